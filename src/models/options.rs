/// Construction-time options for a figure
#[derive(Debug, Clone)]
pub struct FigureOptions {
    /// Print progress and diagnostics to stderr
    pub verbose: bool,
    /// Escape backslashes in user-supplied gnuplot syntax, so LaTeX labels
    /// can be written as-is
    pub autoescape: bool,
    /// The Makefile `all` target builds the epslatex figure
    pub latex_enabled: bool,
    /// The Makefile `all` target builds the tikz figure
    pub tikz_enabled: bool,
    /// Overrides the system hostname in generated scp commands
    pub hostname: Option<String>,
    /// dpi used when the `convert` fallback rasterizes the compiled pdf
    pub convert_density: u32,
    /// jpeg quality used by the `convert` fallback
    pub convert_quality: u32,
    /// Anonymous figures carry no user/host information: sync scripts and
    /// LaTeX inclusion helpers are disabled
    pub anonymous: bool,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            autoescape: true,
            latex_enabled: true,
            // The stock tikz terminal configuration has a known lua bug,
            // see the `doctor` output
            tikz_enabled: false,
            hostname: None,
            convert_density: 100,
            convert_quality: 100,
            anonymous: false,
        }
    }
}

/// How an option value is rendered into the gnuplot command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Emitted verbatim
    Raw(String),
    /// Wrapped in double quotes: `"value"`
    Quoted(String),
    /// Wrapped in quotes and math-mode dollars: `"$value$"`
    Math(String),
}

impl OptionValue {
    pub fn raw(value: impl ToString) -> Self {
        OptionValue::Raw(value.to_string())
    }

    pub fn quoted(value: impl ToString) -> Self {
        OptionValue::Quoted(value.to_string())
    }

    pub fn math(value: impl ToString) -> Self {
        OptionValue::Math(value.to_string())
    }
}

/// Per-plot options forwarded by [`plot_with`](crate::AutoGnuplotFigure::plot_with)
#[derive(Debug, Clone, Default)]
pub struct PlotOptions {
    /// Plot title; inferred from the dataset filename when absent
    pub label: Option<String>,
    /// Extra tag inserted into the dataset file name
    pub fname_specs: String,
    /// Iteration expression for gnuplot's `plot for [...]` form
    pub for_each: Option<String>,
    /// Overrides the figure-level autoescape setting for this plot
    pub autoescape: Option<bool>,
    /// Free-form `keyword value` pairs appended to the plot command,
    /// e.g. `("lw", Raw("2"))` or `("xlabel", Quoted("time"))`
    pub extra: Vec<(String, OptionValue)>,
}

impl PlotOptions {
    pub fn label(value: impl ToString) -> Self {
        Self { label: Some(value.to_string()), ..Default::default() }
    }
}
