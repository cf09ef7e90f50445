//! Canned style helpers for LaTeX-targeted figures

/// `set format` line printing axis labels as fixed-point LaTeX math,
/// e.g. `set format x '$%.1f$'`
pub fn format_axis_latex(axis: &str, digits: usize) -> String {
    format!("set format {} '$%.{}f$'", axis, digits)
}

/// `set format` line printing axis labels as powers of ten in LaTeX math
pub fn format_axis_latex_pow10(axis: &str, digits: usize) -> String {
    format!("set format {} '$10^{{%.{}f}}$'", axis, digits)
}

/// A reasonable preamble for LaTeX figures: thin mirrored borders, styled
/// lines and tics. Pass to
/// [`extend_global_parameters`](crate::AutoGnuplotFigure::extend_global_parameters).
pub const AUTOSTYLE_PREAMBLE: &str = r#"
set mxtics 2
set mytics 1

# color definitions
set border linewidth 1.5
set style line 1 lc rgb '#ff0000'  lt 1 lw 2
set style line 2 lc rgb '#0000ff' lt 3 lw 4

# Axes
set style line 11  lc rgb '#100100100' lt 1
set border 3 back ls 11
set tics nomirror out scale 0.75
# Grid
set style line 12 lc rgb'#808080' lt 0 lw 1
set grid back ls 12

unset grid
"#;
