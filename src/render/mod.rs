//! Rendering pipelines: preview, epslatex and tikz
//!
//! Each pipeline runs the corresponding generated script inside the figure
//! folder and hands back the produced files. Failures carry the full
//! stdout/stderr of the toolchain for diagnosis.

pub mod runner;

use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::utils::FigurePaths;

pub use runner::{ProcessOutput, diagnose, run_in_folder};

/// Files produced by a successful render
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// Primary artifact: the jpeg preview or the compiled pdf
    pub image: PathBuf,
    /// Raster conversion of the pdf, when the pipeline produces one
    pub preview: Option<PathBuf>,
    pub stdout: String,
    pub stderr: String,
}

fn finish(
    paths: &FigurePaths,
    output: ProcessOutput,
    image: String,
    preview: Option<String>,
) -> Result<RenderOutput> {
    if let Some(message) = diagnose(&output) {
        bail!("Rendering failed in {}: {}", paths.folder().display(), message);
    }
    Ok(RenderOutput {
        image: paths.globalize(&image),
        preview: preview.map(|p| paths.globalize(&p)),
        stdout: output.stdout,
        stderr: output.stderr,
    })
}

/// Runs gnuplot on the jpeg wrapper script
pub fn render_preview(paths: &FigurePaths, verbose: bool) -> Result<RenderOutput> {
    let script = paths.jpg_script();
    let output = run_in_folder(paths.folder(), "gnuplot", &[&script], verbose)?;
    finish(paths, output, paths.jpg_output(), None)
}

/// Runs the epslatex compile script (latex, dvips, ps2pdf, raster fallback)
pub fn render_latex(paths: &FigurePaths, verbose: bool) -> Result<RenderOutput> {
    let script = paths.pdflatex_compile_script();
    let output = run_in_folder(paths.folder(), "bash", &[&script], verbose)?;
    finish(paths, output, paths.pdf_output(), Some(paths.pdf_png_output()))
}

/// Runs the tikz compile script (gnuplot tikz terminal + pdflatex)
pub fn render_tikz(paths: &FigurePaths, verbose: bool) -> Result<RenderOutput> {
    let script = paths.tikz_compile_script();
    let output = run_in_folder(paths.folder(), "bash", &[&script], verbose)?;
    finish(paths, output, paths.tikz_output(), Some(paths.tikz_jpg_output()))
}
