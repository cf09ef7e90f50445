//! Figure folder manifest: load/save of `figure.json`
//!
//! The manifest lets the CLI describe a generated folder without re-running
//! any figure-building code. Loading tolerates a missing file; callers fall
//! back to scanning the folder.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MANIFEST_FILENAME: &str = "figure.json";
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureManifest {
    pub version: u32,
    pub file_identifier: String,
    pub created: DateTime<Utc>,
    pub latex_enabled: bool,
    pub tikz_enabled: bool,
    pub is_multiplot: bool,
    pub dataset_files: Vec<String>,
}

impl FigureManifest {
    /// Load the manifest from a figure folder.
    /// Returns None if the file is missing or carries an unknown version.
    pub fn load(folder: &Path) -> Result<Option<Self>> {
        let manifest_path = folder.join(MANIFEST_FILENAME);
        if !manifest_path.exists() {
            return Ok(None);
        }

        let manifest_json = fs::read_to_string(&manifest_path)
            .with_context(|| format!("Failed to read manifest: {}", manifest_path.display()))?;
        let manifest: FigureManifest =
            serde_json::from_str(&manifest_json).context("Failed to parse figure manifest")?;

        if manifest.version != MANIFEST_VERSION {
            eprintln!(
                "Warning: manifest version mismatch (expected {}, found {}), ignoring it",
                MANIFEST_VERSION, manifest.version
            );
            return Ok(None);
        }

        Ok(Some(manifest))
    }

    /// Save the manifest into a figure folder
    pub fn save(&self, folder: &Path) -> Result<()> {
        let manifest_path = folder.join(MANIFEST_FILENAME);
        let manifest_json =
            serde_json::to_string_pretty(self).context("Failed to serialize figure manifest")?;
        fs::write(&manifest_path, manifest_json)
            .with_context(|| format!("Failed to write manifest: {}", manifest_path.display()))?;
        Ok(())
    }
}
