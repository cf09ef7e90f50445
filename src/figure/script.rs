//! Core gnuplot script assembly
//!
//! The script layout mirrors what a hand-written figure script would look
//! like: variable declarations first, then the global parameter block, then
//! one section per multiplot panel carrying its alterations, its `fit`
//! calls and a single `p` command with `,\` continuations.

use crate::models::{PlotEntry, PlotKind};

use super::builder::AutoGnuplotFigure;

const DS_FNAME_PLACEHOLDER: &str = "{DS_FNAME}";

fn substitute_dataset(entry: &PlotEntry) -> String {
    match &entry.dataset_fname {
        Some(fname) => entry.command_template.replace(DS_FNAME_PLACEHOLDER, fname),
        None => entry.command_template.clone(),
    }
}

pub(super) fn assemble(figure: &AutoGnuplotFigure) -> String {
    let variables = figure
        .variables()
        .iter()
        .map(|v| format!("{}={}", v.name, v.value))
        .collect::<Vec<_>>()
        .join("\n");

    let parameters = format!("{}\n", figure.preamble().join("\n"));

    let mut panel_sections = Vec::new();
    for (index, panel) in figure.panels().iter().enumerate() {
        let mut alterations = vec![format!("\n# this is multiplot idx: {}", index)];
        alterations.extend(panel.alterations.iter().cloned());
        alterations.push(String::new());
        let alterations_text = alterations.join("\n");

        let fit_calls = panel
            .entries
            .iter()
            .filter(|e| e.kind == PlotKind::Fit)
            .map(|e| format!("fit {}", substitute_dataset(e)))
            .collect::<Vec<_>>()
            .join("\n");
        let fit_text = format!("{}\n", fit_calls);

        let plot_parts: Vec<String> = panel
            .entries
            .iter()
            .filter(|e| matches!(e.kind, PlotKind::Data | PlotKind::Expression))
            .map(|e| substitute_dataset(e))
            .collect();
        let plot_text = if plot_parts.is_empty() {
            String::new()
        } else {
            format!("p {}", plot_parts.join(",\\\n"))
        };

        panel_sections.push(format!("{}{}{}", alterations_text, fit_text, plot_text));
    }

    [variables, parameters, panel_sections.join("\n")].join("\n")
}
