//! Figure folder materialization: core script, wrappers, compile scripts
//! and the manifest

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{FigureManifest, manifest::MANIFEST_VERSION};
use crate::templates;

use super::builder::AutoGnuplotFigure;

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write figure file: {}", path.display()))
}

pub(super) fn write_figure_files(figure: &AutoGnuplotFigure) -> Result<()> {
    let paths = figure.paths();
    let options = figure.options();
    let settings = figure.terminal_settings();

    // core script
    write_file(&paths.globalize(&paths.core_script()), &figure.script_content())?;

    // jpeg preview terminal
    write_file(
        &paths.globalize(&paths.jpg_script()),
        &templates::jpg_wrapper(&paths.jpg_output(), &paths.core_script()),
    )?;

    write_file(&paths.globalize(".gitignore"), templates::GITIGNORE)?;

    // epslatex terminal and its compile pipeline
    write_file(
        &paths.globalize(&paths.pdflatex_script()),
        &templates::latex_wrapper(&paths.core_script(), settings),
    )?;
    write_file(
        &paths.globalize(&paths.pdflatex_compile_script()),
        &templates::latex_compile_script(
            &paths.pdflatex_script(),
            &paths.pdf_output(),
            &paths.pdf_png_output(),
            options.convert_density,
            options.convert_quality,
        ),
    )?;

    // tikz terminal and its compile pipeline
    write_file(
        &paths.globalize(&paths.tikz_script()),
        &templates::tikz_wrapper(&paths.core_script(), settings),
    )?;
    write_file(
        &paths.globalize(&paths.tikz_compile_script()),
        &templates::tikz_compile_script(
            &paths.tikz_script(),
            &paths.tikz_output(),
            &paths.tikz_jpg_output(),
            options.convert_density,
            options.convert_quality,
        ),
    )?;

    let manifest = FigureManifest {
        version: MANIFEST_VERSION,
        file_identifier: paths.identifier().to_string(),
        created: figure.created(),
        latex_enabled: options.latex_enabled,
        tikz_enabled: options.tikz_enabled,
        is_multiplot: figure.is_multiplot(),
        dataset_files: figure.dataset_files().to_vec(),
    };
    manifest.save(paths.folder())?;

    Ok(())
}
