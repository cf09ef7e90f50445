//! Dataset file I/O: whitespace-separated column files read by gnuplot

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::Column;

/// Write columns side by side into a whitespace-separated dataset file.
///
/// All columns must be non-empty and of equal length.
pub fn write_columns(path: &Path, columns: &[Column]) -> Result<()> {
    if columns.is_empty() {
        bail!("Cannot write a dataset without columns");
    }

    let rows = columns[0].len();
    if rows == 0 {
        bail!("Cannot write a dataset with empty columns");
    }
    for (idx, column) in columns.iter().enumerate() {
        if column.len() != rows {
            bail!(
                "Column length mismatch: column 0 has {} rows, column {} has {}",
                rows,
                idx,
                column.len()
            );
        }
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create dataset file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for row in 0..rows {
        let cells: Vec<String> = columns.iter().map(|c| c.format_cell(row)).collect();
        writeln!(writer, "{}", cells.join(" "))
            .with_context(|| format!("Failed to write dataset file: {}", path.display()))?;
    }

    writer.flush().with_context(|| format!("Failed to flush dataset file: {}", path.display()))?;
    Ok(())
}

/// Read a whitespace-separated numeric matrix back from a dataset file.
///
/// Empty lines and `#` comment lines are skipped. All remaining rows must
/// have the same number of numeric fields.
pub fn load_matrix(path: &Path) -> Result<Vec<Vec<f64>>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read line from dataset file")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut row = Vec::new();
        for field in trimmed.split_whitespace() {
            let value: f64 = field.parse().with_context(|| {
                format!("Invalid numeric value '{}' at line {} of {}", field, line_num + 1, path.display())
            })?;
            row.push(value);
        }

        if let Some(first) = rows.first()
            && first.len() != row.len()
        {
            bail!(
                "Ragged dataset: line {} has {} fields, expected {}",
                line_num + 1,
                row.len(),
                first.len()
            );
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_then_load_numeric_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fig__0__.dat");

        let x = Column::from(vec![0.0, 1.0, 2.0]);
        let y = Column::from(vec![0.0, 1.0, 4.0]);
        write_columns(&path, &[x, y]).unwrap();

        let matrix = load_matrix(&path).unwrap();
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix[2], vec![2.0, 4.0]);
    }

    #[test]
    fn test_write_mixed_text_and_numeric() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fig__0__.dat");

        let labels = Column::from(["a", "b"].as_slice());
        let values = Column::from(vec![1.0, 2.0]);
        write_columns(&path, &[labels, values]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("a 1."));
        assert!(lines.next().unwrap().starts_with("b 2."));
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fig__0__.dat");

        let x = Column::from(vec![0.0, 1.0]);
        let y = Column::from(vec![0.0]);
        let result = write_columns(&path, &[x, y]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("length mismatch"));
    }

    #[test]
    fn test_load_skips_comments_and_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.dat");
        std::fs::write(&path, "# header\n\n1 2\n3 4\n").unwrap();

        let matrix = load_matrix(&path).unwrap();
        assert_eq!(matrix, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_load_rejects_ragged_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.dat");
        std::fs::write(&path, "1 2\n3\n").unwrap();

        assert!(load_matrix(&path).is_err());
    }
}
