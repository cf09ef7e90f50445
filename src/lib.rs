//! Autognuplot - Programmatic gnuplot figure generation with self-contained folders
//!
//! This library builds publication-quality gnuplot figures from numeric data. Each
//! figure lives in its own folder holding everything needed to recreate it:
//!
//! - Data files dumped from the in-memory columns
//! - A core gnuplot script plus jpg/epslatex/tikz terminal wrappers
//! - Compile shell scripts, a Makefile, and a retrieval script for remote use
//! - A `figure.json` manifest describing the figure
//!
//! # Example
//!
//! ```no_run
//! use autognuplot::AutoGnuplotFigure;
//!
//! let x: Vec<f64> = (0..100).map(|i| i as f64 * 0.1).collect();
//! let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
//!
//! let mut figure = AutoGnuplotFigure::new("figures/sine", "sine")?;
//! figure.set(&["grid"]);
//! figure.plot("u 1:2 w lp t \"sin(x)\"", &[x.into(), y.into()])?;
//! figure.generate()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod data;
pub mod figure;
pub mod fit;
pub mod helpers;
pub mod models;
pub mod render;
pub mod stats;
pub mod sync;
pub mod templates;
pub mod utils;

// Re-export commonly used types
pub use figure::AutoGnuplotFigure;
pub use models::{
    Column, FigureManifest, FigureOptions, OptionValue, PlotOptions, TerminalKind,
    TerminalSettings,
};
pub use stats::{HistogramOptions, Normalization};
pub use utils::{FigurePaths, format_path_with_tilde};
