use serde::{Deserialize, Serialize};

/// Output terminals a figure folder can compile to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalKind {
    /// Quick jpeg preview straight out of gnuplot
    Jpg,
    /// epslatex terminal compiled through latex/dvips/ps2pdf
    Latex,
    /// tikz terminal compiled with pdflatex
    Tikz,
}

impl TerminalKind {
    /// Makefile target variable covering this terminal, if it takes part
    /// in the `all` target
    pub fn makefile_target(&self) -> Option<&'static str> {
        match self {
            TerminalKind::Jpg => None,
            TerminalKind::Latex => Some("$(latex_targets_pdf)"),
            TerminalKind::Tikz => Some("$(tikz_targets_pdf)"),
        }
    }
}

/// Size and style parameters shared by the epslatex and tikz terminals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalSettings {
    pub x_size: String,
    pub y_size: String,
    pub font: String,
    pub linewidth: String,
    /// Free-form trailing terminal options, e.g. header package imports
    pub other: String,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self {
            x_size: "9.9cm".to_string(),
            y_size: "8.cm".to_string(),
            font: "phv,12 ".to_string(),
            linewidth: "2".to_string(),
            other: String::new(),
        }
    }
}
