use serde::{Deserialize, Serialize};

/// One column of data destined for a dataset file.
///
/// Columns are written side by side, whitespace-separated, one row per line.
/// Text columns are allowed so labels can be plotted with `using ...:xtic(n)`
/// and friends.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Formats the cell at `row` the way it appears in the dataset file
    pub fn format_cell(&self, row: usize) -> String {
        match self {
            Column::Numeric(values) => format!("{:.16e}", values[row]),
            Column::Text(values) => values[row].clone(),
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Numeric(values)
    }
}

impl From<&[f64]> for Column {
    fn from(values: &[f64]) -> Self {
        Column::Numeric(values.to_vec())
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::Text(values)
    }
}

impl From<&[&str]> for Column {
    fn from(values: &[&str]) -> Self {
        Column::Text(values.iter().map(|s| s.to_string()).collect())
    }
}

/// How a plot entry participates in the generated script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotKind {
    /// Plots a written dataset file
    Data,
    /// Plots a gnuplot expression, no dataset involved
    Expression,
    /// Emits a `fit` call before the panel's plot command
    Fit,
}

/// One registered plot command within a multiplot panel.
///
/// `command_template` carries the `{DS_FNAME}` placeholder which is replaced
/// with the dataset file name when the script is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotEntry {
    pub kind: PlotKind,
    pub dataset_fname: Option<String>,
    pub command_template: String,
}

/// A `name = value` declaration rendered at the top of the script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDecl {
    pub name: String,
    pub value: String,
}

/// One panel of a (multi)plot: its parameter alterations and plot entries
#[derive(Debug, Clone, Default)]
pub struct Panel {
    pub alterations: Vec<String>,
    pub entries: Vec<PlotEntry>,
}
