//! File naming scheme for generated figure folders
//!
//! Every artifact in a figure folder derives from the figure's file
//! identifier, so several figures can share one folder without clashing.
//! The compile scripts and the Makefile rely on these exact suffixes.

use std::path::{Path, PathBuf};

/// Computes the file names of every artifact belonging to one figure
#[derive(Debug, Clone)]
pub struct FigurePaths {
    folder: PathBuf,
    identifier: String,
}

impl FigurePaths {
    pub fn new(folder: impl Into<PathBuf>, identifier: impl Into<String>) -> Self {
        Self { folder: folder.into(), identifier: identifier.into() }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Joins a figure-local file name onto the figure folder
    pub fn globalize(&self, local_name: &str) -> PathBuf {
        self.folder.join(local_name)
    }

    /// Dataset file name: `{id}__{counter}__{specs}.dat`
    pub fn dataset(&self, counter: usize, specs: &str) -> String {
        format!("{}__{}__{}.dat", self.identifier, counter, specs)
    }

    pub fn core_script(&self) -> String {
        format!("{}__.core.gnu", self.identifier)
    }

    pub fn jpg_script(&self) -> String {
        format!("{}__.jpg.gnu", self.identifier)
    }

    pub fn jpg_output(&self) -> String {
        format!("{}__.jpg", self.identifier)
    }

    pub fn pdflatex_script(&self) -> String {
        format!("{}__.pdflatex.gnu", self.identifier)
    }

    pub fn pdflatex_compile_script(&self) -> String {
        format!("{}__.pdflatex_compile.sh", self.identifier)
    }

    pub fn pdf_output(&self) -> String {
        format!("{}__.pdf", self.identifier)
    }

    /// Raster conversion of the pdflatex output, produced by the compile script
    pub fn pdf_png_output(&self) -> String {
        format!("{}_converted_to.png", self.pdf_output())
    }

    pub fn tikz_script(&self) -> String {
        format!("{}__.tikz.gnu", self.identifier)
    }

    pub fn tikz_compile_script(&self) -> String {
        format!("{}__.tikz_compile.sh", self.identifier)
    }

    pub fn tikz_output(&self) -> String {
        format!("{}__.tikz.pdf", self.identifier)
    }

    pub fn tikz_jpg_output(&self) -> String {
        format!("{}_converted_to.jpg", self.tikz_output())
    }
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    let path_str = path.to_string_lossy();
    if let Ok(home) = std::env::var("HOME")
        && let Some(rest) = path_str.strip_prefix(&home)
    {
        return format!("~{}", rest);
    }
    path_str.into_owned()
}
