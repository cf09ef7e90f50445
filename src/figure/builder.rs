//! The figure builder: accumulates plotting state until the folder is generated
//!
//! # Error Handling Strategy
//!
//! Figure construction follows a **graceful degradation** approach for
//! environment-dependent extras: missing user/hostname information disables
//! the sync helpers with a warning instead of failing figure creation. Data
//! errors (mismatched columns, unparsable fit definitions, multiplot misuse)
//! are hard errors, since they would otherwise surface as broken gnuplot
//! scripts much later.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use regex::Regex;
use uuid::Uuid;

use crate::data::write_columns;
use crate::fit::{self, AUTO_VIA, FitOptions};
use crate::models::{
    Column, FigureOptions, OptionValue, Panel, PlotEntry, PlotKind, PlotOptions,
    TerminalKind, TerminalSettings, VariableDecl,
};
use crate::render::{self, RenderOutput};
use crate::stats::{self, HistogramOptions};
use crate::sync::{FolderInfo, SshInfo};
use crate::templates;
use crate::utils::{
    FigurePaths, autoescape_backslashes, has_title_keyword, quote_argument, title_from_dataset,
};

const PARAMETERS_SECTION: &str = "parameters";

/// Wraps one gnuplot figure: accumulates datasets, variables, preamble
/// parameters and multiplot layout, and materializes everything as a
/// self-contained figure folder.
///
/// # Example
///
/// ```no_run
/// use autognuplot::AutoGnuplotFigure;
///
/// let x: Vec<f64> = (0..50).map(|i| i as f64 * 0.1).collect();
/// let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
///
/// let mut fig = AutoGnuplotFigure::new("figures/sine", "fig")?;
/// fig.plot("u 1:2 w l t \"sine\"", &[x.into(), y.into()])?;
/// fig.generate()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct AutoGnuplotFigure {
    folder_name: String,
    absolute_folder: PathBuf,
    paths: FigurePaths,
    options: FigureOptions,
    terminal_settings: TerminalSettings,
    dataset_counter: usize,
    panels: Vec<Panel>,
    is_multiplot: bool,
    preamble: Vec<String>,
    variables: Vec<VariableDecl>,
    ssh: Option<SshInfo>,
    created: DateTime<Utc>,
    dataset_files: Vec<String>,
}

impl AutoGnuplotFigure {
    /// Creates a figure with default options. The target folder is created
    /// if missing; the Makefile and sync script are written immediately.
    pub fn new(folder_name: &str, file_identifier: &str) -> Result<Self> {
        Self::with_options(folder_name, file_identifier, FigureOptions::default())
    }

    pub fn with_options(
        folder_name: &str,
        file_identifier: &str,
        options: FigureOptions,
    ) -> Result<Self> {
        let folder = PathBuf::from(folder_name);
        if !folder.exists() {
            fs::create_dir_all(&folder)
                .with_context(|| format!("Failed to create figure folder: {}", folder_name))?;
            if options.verbose {
                eprintln!("created folder: {}", folder_name);
            }
        }

        let absolute_folder = if folder.is_absolute() {
            folder.clone()
        } else {
            env::current_dir().context("Failed to read current directory")?.join(&folder)
        };

        // Sync helpers depend on user/hostname lookup; a failure there
        // disables them instead of failing the figure
        let ssh = match SshInfo::for_folder(&absolute_folder, options.hostname.as_deref()) {
            Ok(info) => Some(info),
            Err(e) => {
                eprintln!("Warning: sync helpers disabled: {}", e);
                None
            }
        };

        let figure = Self {
            folder_name: folder_name.to_string(),
            absolute_folder,
            paths: FigurePaths::new(folder, file_identifier),
            options,
            terminal_settings: TerminalSettings::default(),
            dataset_counter: 0,
            panels: vec![Panel::default()],
            is_multiplot: false,
            preamble: Vec::new(),
            variables: Vec::new(),
            ssh,
            created: Utc::now(),
            dataset_files: Vec::new(),
        };

        figure.write_makefile()?;
        figure.write_sync_script()?;

        Ok(figure)
    }

    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    pub fn file_identifier(&self) -> &str {
        self.paths.identifier()
    }

    pub fn paths(&self) -> &FigurePaths {
        &self.paths
    }

    pub(crate) fn options(&self) -> &FigureOptions {
        &self.options
    }

    pub(crate) fn terminal_settings(&self) -> &TerminalSettings {
        &self.terminal_settings
    }

    pub(crate) fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub(crate) fn is_multiplot(&self) -> bool {
        self.is_multiplot
    }

    pub(crate) fn preamble(&self) -> &[String] {
        &self.preamble
    }

    pub(crate) fn variables(&self) -> &[VariableDecl] {
        &self.variables
    }

    pub(crate) fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub(crate) fn dataset_files(&self) -> &[String] {
        &self.dataset_files
    }

    /// Sets the terminal figure size used by the epslatex and tikz terminals
    pub fn set_figure_size(&mut self, x_size: Option<&str>, y_size: Option<&str>) {
        if let Some(x) = x_size {
            self.terminal_settings.x_size = x.to_string();
        }
        if let Some(y) = y_size {
            self.terminal_settings.y_size = y.to_string();
        }
    }

    /// Sets the global linewidth parameter for latex/tikz figures
    pub fn set_figure_linewidth(&mut self, linewidth: &str) {
        self.terminal_settings.linewidth = linewidth.to_string();
    }

    /// Direct access to the remaining terminal parameters (font, extras)
    pub fn terminal_settings_mut(&mut self) -> &mut TerminalSettings {
        &mut self.terminal_settings
    }

    fn autoescape_or(&self, override_flag: Option<bool>, text: &str) -> String {
        if override_flag.unwrap_or(self.options.autoescape) {
            autoescape_backslashes(text)
        } else {
            text.to_string()
        }
    }

    /// Extends the preamble of the gnuplot script with raw gnuplot syntax.
    ///
    /// Applies to all panels of a multiplot; use [`set_panel_parameters`]
    /// for per-panel state.
    ///
    /// [`set_panel_parameters`]: Self::set_panel_parameters
    pub fn extend_global_parameters(&mut self, lines: &[&str]) -> &mut Self {
        self.extend_global_parameters_opt(lines, None)
    }

    /// Like [`extend_global_parameters`](Self::extend_global_parameters),
    /// with an explicit autoescape override
    pub fn extend_global_parameters_opt(
        &mut self,
        lines: &[&str],
        autoescape: Option<bool>,
    ) -> &mut Self {
        self.preamble.push(format!("# BEGIN {}", PARAMETERS_SECTION));
        for line in lines {
            self.preamble.push(self.autoescape_or(autoescape, line));
        }
        self.preamble.push(format!("# END {}", PARAMETERS_SECTION));
        self
    }

    /// Appends parameter lines to the current multiplot panel
    pub fn set_panel_parameters(&mut self, lines: &[&str]) -> &mut Self {
        self.set_panel_parameters_opt(lines, None)
    }

    pub fn set_panel_parameters_opt(
        &mut self,
        lines: &[&str],
        autoescape: Option<bool>,
    ) -> &mut Self {
        let escaped: Vec<String> =
            lines.iter().map(|line| self.autoescape_or(autoescape, line)).collect();
        self.current_panel_mut().alterations.extend(escaped);
        self
    }

    /// Prepends `set ` to each argument and adds it to the current panel
    pub fn set(&mut self, args: &[&str]) -> &mut Self {
        let lines: Vec<String> = args.iter().map(|a| format!("set {}", a)).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        self.set_panel_parameters(&refs)
    }

    /// Prepends `unset ` to each argument and adds it to the current panel
    pub fn unset(&mut self, args: &[&str]) -> &mut Self {
        let lines: Vec<String> = args.iter().map(|a| format!("unset {}", a)).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        self.set_panel_parameters(&refs)
    }

    /// Keyed `set` with explicit value rendering, e.g.
    /// `set_value("xlabel", OptionValue::quoted("time"))` emits
    /// `set xlabel "time"`
    pub fn set_value(&mut self, key: &str, value: OptionValue) -> &mut Self {
        let rendered = self.render_option_value(&value);
        let line = format!("set {} {}", key, rendered);
        self.current_panel_mut().alterations.push(line);
        self
    }

    fn render_option_value(&self, value: &OptionValue) -> String {
        match value {
            OptionValue::Raw(v) => v.clone(),
            OptionValue::Quoted(v) => quote_argument(&self.autoescape_or(None, v)),
            OptionValue::Math(v) => {
                quote_argument(&format!("${}$", self.autoescape_or(None, v)))
            }
        }
    }

    /// Adds a variable or function declaration to the script preamble.
    /// Re-declaring a name overwrites its value, keeping the original
    /// position.
    pub fn add_variable_declaration(&mut self, name: &str, value: &str, is_string: bool) {
        let rendered = if is_string { quote_argument(value) } else { value.to_string() };
        if let Some(existing) = self.variables.iter_mut().find(|v| v.name == name) {
            existing.value = rendered;
        } else {
            self.variables.push(VariableDecl { name: name.to_string(), value: rendered });
        }
    }

    /// Enables multiplot mode; `specifiers` is passed through to gnuplot,
    /// e.g. `"layout 2,2"`
    pub fn set_multiplot(&mut self, specifiers: &str) -> &mut Self {
        self.is_multiplot = true;
        let line = format!("set multiplot {}", specifiers);
        self.extend_global_parameters(&[&line]);
        self
    }

    /// Shifts the state to the next plot in the multiplot sequence
    pub fn next_multiplot_group(&mut self) -> Result<()> {
        if !self.is_multiplot {
            bail!("next_multiplot_group requires set_multiplot to be called first");
        }
        self.panels.push(Panel::default());
        Ok(())
    }

    fn current_panel_mut(&mut self) -> &mut Panel {
        self.panels.last_mut().expect("figure always has at least one panel")
    }

    /// Central plotting primitive: writes the columns as a dataset file and
    /// registers the plot command. Returns the dataset file name.
    ///
    /// The command is gnuplot `plot` syntax without the leading `plot` and
    /// without the file name; the quoted `{DS_FNAME}` placeholder is
    /// prepended when absent. A `title` is appended when the command has
    /// none, derived from the label or the dataset file name.
    pub fn plot(&mut self, command: &str, columns: &[Column]) -> Result<String> {
        self.plot_with(command, columns, PlotOptions::default())
    }

    pub fn plot_with(
        &mut self,
        command: &str,
        columns: &[Column],
        options: PlotOptions,
    ) -> Result<String> {
        if columns.is_empty() {
            bail!("plot requires at least one data column; use plot_expression for explicit functions");
        }

        let mut command = self.autoescape_or(options.autoescape, command);
        if self.options.verbose {
            eprintln!("plot -- processing: {}", command);
        }

        let dataset_fname = self.paths.dataset(self.dataset_counter, &options.fname_specs);
        write_columns(&self.paths.globalize(&dataset_fname), columns)?;

        if !command.contains("\"{DS_FNAME}\"") {
            if self.options.verbose {
                eprintln!("[{}] the dataset placeholder will be prepended", command);
            }
            let for_prefix = match &options.for_each {
                Some(expr) => format!("for {} ", expr),
                None => String::new(),
            };
            command = format!("{} \"{{DS_FNAME}}\" {}", for_prefix, command);
        }

        command = self.append_extra_options(command, &options.extra);
        command = self.append_title(command, options.label.as_deref(), Some(&dataset_fname));

        self.current_panel_mut().entries.push(PlotEntry {
            kind: PlotKind::Data,
            dataset_fname: Some(dataset_fname.clone()),
            command_template: command,
        });
        self.dataset_files.push(dataset_fname.clone());
        self.dataset_counter += 1;

        Ok(dataset_fname)
    }

    /// Plots an explicit gnuplot expression; no dataset file is written
    pub fn plot_expression(&mut self, command: &str) -> Result<()> {
        self.plot_expression_with(command, PlotOptions::default())
    }

    pub fn plot_expression_with(&mut self, command: &str, options: PlotOptions) -> Result<()> {
        let mut command = self.autoescape_or(options.autoescape, command);
        command = self.append_extra_options(command, &options.extra);
        command = self.append_title(command, options.label.as_deref(), None);

        self.current_panel_mut().entries.push(PlotEntry {
            kind: PlotKind::Expression,
            dataset_fname: None,
            // initial spaces keep the continuation lines aligned
            command_template: format!("  {}", command),
        });
        Ok(())
    }

    /// Samples a scalar function on an even grid and plots the result
    pub fn plot_function(
        &mut self,
        command: &str,
        f: impl Fn(f64) -> f64,
        range: (f64, f64),
        samples: usize,
    ) -> Result<String> {
        if samples < 2 {
            bail!("plot_function needs at least 2 samples, got {}", samples);
        }
        let (lo, hi) = range;
        let step = (hi - lo) / (samples - 1) as f64;
        let x: Vec<f64> = (0..samples).map(|i| lo + step * i as f64).collect();
        let y: Vec<f64> = x.iter().map(|&v| f(v)).collect();
        self.plot(command, &[x.into(), y.into()])
    }

    /// Histograms 1-D data and plots bin centers against values.
    /// `command` is the plot syntax after the implicit `u 1:2`.
    pub fn histogram(
        &mut self,
        command: &str,
        data: &[f64],
        options: &HistogramOptions,
    ) -> Result<String> {
        self.histogram_with(command, data, options, PlotOptions::default())
    }

    pub fn histogram_with(
        &mut self,
        command: &str,
        data: &[f64],
        options: &HistogramOptions,
        plot_options: PlotOptions,
    ) -> Result<String> {
        let (centers, values) = stats::histogram(data, options)?;
        let full_command = format!("u 1:2 {}", command);
        let dataset_fname =
            self.plot_with(&full_command, &[centers.into(), values.into()], plot_options)?;

        if options.dump_data {
            if self.options.verbose {
                eprintln!("Dumping histogram raw data.");
            }
            let dump_fname = format!("{}.hist_compl_dump.dat", dataset_fname);
            write_columns(&self.paths.globalize(&dump_fname), &[Column::from(data.to_vec())])?;
        }

        Ok(dataset_fname)
    }

    /// Registers a gnuplot `fit` of the given data.
    ///
    /// `function` is either a bare name of a function already declared in
    /// the parameters, or a full definition like `f(x) = a*x + b`. A
    /// definition is added to the current panel's parameters and, when the
    /// modifiers contain `auto_via`, the `via` list is inferred from it.
    pub fn fit(&mut self, function: &str, columns: &[Column], options: FitOptions) -> Result<String> {
        let mut modifiers = options.modifiers.clone();

        let call = match fit::parse_definition(function)? {
            Some(mut definition) => {
                if self.options.verbose {
                    eprintln!("[fit] inferred function name: {}", definition.name);
                    eprintln!(
                        "[fit] inferred independent variable name: {}",
                        definition.independent_var
                    );
                }

                if modifiers.contains(AUTO_VIA) {
                    let mut parameters = fit::infer_parameters(&definition, &options.do_not_fit)?;
                    if self.options.verbose {
                        eprintln!("[fit] inferred parameters to fit: {}", parameters.join(","));
                    }

                    if options.unicize_parameters {
                        let tag = unique_parameter_tag();
                        for parameter in &mut parameters {
                            let renamed = format!("{}{}", parameter, tag);
                            // whole-word replacement only, a previously
                            // applied tag may contain another parameter name
                            let pattern =
                                Regex::new(&format!(r"\b{}\b", regex::escape(parameter)))?;
                            definition.declaration = pattern
                                .replace_all(&definition.declaration, renamed.as_str())
                                .into_owned();
                            *parameter = renamed;
                        }
                    }

                    modifiers =
                        modifiers.replace(AUTO_VIA, &format!("via {}", parameters.join(",")));
                }

                self.current_panel_mut().alterations.push(definition.declaration.clone());
                definition.call
            }
            None => {
                if modifiers.contains(AUTO_VIA) {
                    bail!(
                        "fit with a bare function name cannot infer parameters; \
                         pass explicit modifiers such as \"via a,b\""
                    );
                }
                function.to_string()
            }
        };

        let dataset_fname = self.paths.dataset(self.dataset_counter, "fit");
        write_columns(&self.paths.globalize(&dataset_fname), columns)?;

        self.current_panel_mut().entries.push(PlotEntry {
            kind: PlotKind::Fit,
            dataset_fname: Some(dataset_fname.clone()),
            command_template: format!("{} \"{{DS_FNAME}}\" {}", call, modifiers),
        });
        self.dataset_files.push(dataset_fname.clone());
        self.dataset_counter += 1;

        Ok(dataset_fname)
    }

    fn append_extra_options(
        &self,
        mut command: String,
        extra: &[(String, OptionValue)],
    ) -> String {
        for (key, value) in extra {
            command = format!("{} {} {}", command, key, self.render_option_value(value));
        }
        command
    }

    fn append_title(
        &self,
        command: String,
        label: Option<&str>,
        dataset_fname: Option<&str>,
    ) -> String {
        if has_title_keyword(&command) {
            return command;
        }

        let title = match label {
            Some(label) => Some(autoescape_backslashes(label)),
            None => dataset_fname.map(title_from_dataset),
        };

        match title {
            // a default title avoids latex compilation problems from
            // underscores in generated file names
            Some(title) => format!("{} title \"{}\" ", command, title),
            None => command,
        }
    }

    /// Returns the content of the core gnuplot script
    pub fn script_content(&self) -> String {
        super::script::assemble(self)
    }

    /// Generates the figure folder files: core script, terminal wrappers,
    /// compile scripts, `.gitignore` and the `figure.json` manifest
    pub fn generate(&self) -> Result<()> {
        super::files::write_figure_files(self)
    }

    fn enabled_makefile_targets(&self) -> String {
        let mut targets = Vec::new();
        if self.options.latex_enabled
            && let Some(target) = TerminalKind::Latex.makefile_target()
        {
            targets.push(target);
        }
        if self.options.tikz_enabled
            && let Some(target) = TerminalKind::Tikz.makefile_target()
        {
            targets.push(target);
        }
        targets.join(" ")
    }

    fn write_makefile(&self) -> Result<()> {
        let content = templates::makefile(&self.enabled_makefile_targets());
        let path = self.paths.globalize("Makefile");
        fs::write(&path, content)
            .with_context(|| format!("Failed to write Makefile: {}", path.display()))
    }

    fn write_sync_script(&self) -> Result<()> {
        let Some(ssh) = &self.ssh else {
            return Ok(());
        };
        let content = templates::sync_script(&ssh.scp_command_contents);
        let path = self.paths.globalize("sync_me.sh");
        fs::write(&path, content)
            .with_context(|| format!("Failed to write sync script: {}", path.display()))
    }

    /// Runs gnuplot on the jpeg wrapper and returns the preview image
    pub fn render_preview(&self) -> Result<RenderOutput> {
        render::render_preview(&self.paths, self.options.verbose)
    }

    /// Runs the epslatex compile pipeline and returns the compiled pdf
    pub fn render_latex(&self) -> Result<RenderOutput> {
        render::render_latex(&self.paths, self.options.verbose)
    }

    /// Runs the tikz compile pipeline and returns the compiled pdf
    pub fn render_tikz(&self) -> Result<RenderOutput> {
        render::render_tikz(&self.paths, self.options.verbose)
    }

    /// Local/remote location summary for this figure folder
    pub fn folder_info(&self) -> Result<FolderInfo> {
        if self.options.anonymous {
            bail!("folder_info is disabled for anonymous figures");
        }
        let ssh = self
            .ssh
            .as_ref()
            .context("No ssh info available (user or hostname lookup failed)")?;
        Ok(FolderInfo::new(&self.folder_name, &self.absolute_folder, ssh))
    }

    /// LaTeX code for including the compiled figure in a document
    pub fn latex_snippet(&self) -> Result<String> {
        if self.options.anonymous {
            bail!("latex_snippet is disabled for anonymous figures");
        }

        let pdf_stem = format!(
            "{}/{}",
            self.folder_name,
            self.paths.pdf_output().trim_end_matches(".pdf")
        );
        let tikz_stem = format!(
            "{}/{}",
            self.folder_name,
            self.paths.tikz_output().trim_end_matches(".pdf")
        );
        Ok(templates::latex_include_snippet(&pdf_stem, &tikz_stem, self.options.tikz_enabled))
    }
}

/// Short unique suffix for fit parameter renaming
fn unique_parameter_tag() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("__{}", &hex[..8])
}
