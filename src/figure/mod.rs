//! Figure building: state accumulation, script assembly and folder
//! generation
//!
//! A figure is built in three stages: plot/fit/parameter calls accumulate
//! state on [`AutoGnuplotFigure`], `script_content` assembles the core
//! gnuplot script, and `generate` writes the self-contained figure folder.

pub mod builder;
mod files;
mod script;

pub use builder::AutoGnuplotFigure;
