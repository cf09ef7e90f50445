//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use autognuplot::{AutoGnuplotFigure, Column, FigureOptions};

/// Builder for figures living in a throwaway folder
pub struct FigureBuilder {
    temp_dir: TempDir,
    identifier: String,
    options: FigureOptions,
}

impl FigureBuilder {
    pub fn new(identifier: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, identifier: identifier.to_string(), options: FigureOptions::default() }
    }

    pub fn with_options(mut self, options: FigureOptions) -> Self {
        self.options = options;
        self
    }

    /// Folder the figure will be generated into
    pub fn folder(&self) -> PathBuf {
        self.temp_dir.path().join(&self.identifier)
    }

    /// Build the figure; keep the returned TempDir alive for the test
    pub fn build(self) -> (TempDir, AutoGnuplotFigure) {
        let folder = self.temp_dir.path().join(&self.identifier);
        let figure = AutoGnuplotFigure::with_options(
            folder.to_str().expect("non-utf8 temp path"),
            &self.identifier,
            self.options,
        )
        .expect("Failed to create figure");
        (self.temp_dir, figure)
    }
}

/// A small deterministic dataset: x and sin(x)
pub fn sine_columns(n: usize) -> Vec<Column> {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    vec![x.into(), y.into()]
}

/// Names of all regular files in a folder
pub fn file_names(folder: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(folder)
        .expect("Failed to read folder")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub fn read_file(folder: &Path, name: &str) -> String {
    std::fs::read_to_string(folder.join(name))
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
}
