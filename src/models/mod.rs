//! Data models for figure building.
//!
//! This module defines the data structures used throughout the crate:
//!
//! - [`Column`] / [`PlotEntry`] / [`Panel`] - accumulated plotting state
//! - [`TerminalKind`] / [`TerminalSettings`] - output terminal configuration
//! - [`FigureOptions`] / [`PlotOptions`] - construction and per-plot options
//! - [`FigureManifest`] - the `figure.json` folder description

pub mod dataset;
pub mod manifest;
pub mod options;
pub mod terminal;

pub use dataset::{Column, Panel, PlotEntry, PlotKind, VariableDecl};
pub use manifest::{FigureManifest, MANIFEST_FILENAME};
pub use options::{FigureOptions, OptionValue, PlotOptions};
pub use terminal::{TerminalKind, TerminalSettings};
