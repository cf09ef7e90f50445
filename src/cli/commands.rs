use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use walkdir::WalkDir;

use crate::clipboard::copy_to_clipboard;
use crate::models::FigureManifest;
use crate::render;
use crate::sync::{FolderInfo, SshInfo};
use crate::templates;
use crate::utils::{FigurePaths, format_path_with_tilde};

#[derive(Parser)]
#[command(name = "autognuplot")]
#[command(version = "0.1.0")]
#[command(about = "Compile and inspect generated gnuplot figure folders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a figure folder's compile pipeline
    Render {
        /// Figure folder containing the generated scripts
        folder: PathBuf,
        /// Which output terminal to compile
        #[arg(long, value_enum, default_value = "latex")]
        terminal: TerminalArg,
        /// Show the toolchain's stdout/stderr even on success
        #[arg(long)]
        verbose: bool,
    },
    /// Print the core gnuplot script(s) of a figure folder
    Script { folder: PathBuf },
    /// Describe a figure folder: manifest and retrieval information
    Info { folder: PathBuf },
    /// Print the LaTeX inclusion snippet for a figure folder
    Snippet {
        folder: PathBuf,
        /// Also copy the snippet to the system clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Delete build artifacts (compiled pdfs, previews, latex leftovers)
    Clean { folder: PathBuf },
    /// Print known environment fixes for the compile toolchain
    Doctor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TerminalArg {
    Jpg,
    Latex,
    Tikz,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Render { folder, terminal, verbose }) => {
            render_folder(folder, *terminal, *verbose)?;
        }
        Some(Commands::Script { folder }) => {
            print_scripts(folder)?;
        }
        Some(Commands::Info { folder }) => {
            show_info(folder)?;
        }
        Some(Commands::Snippet { folder, copy }) => {
            show_snippet(folder, *copy)?;
        }
        Some(Commands::Clean { folder }) => {
            clean_folder(folder)?;
        }
        Some(Commands::Doctor) => {
            println!("{}", templates::ENVIRONMENT_FIXES);
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

const CORE_SCRIPT_SUFFIX: &str = "__.core.gnu";

/// Figure identifiers present in a folder, from the core script names
fn discover_identifiers(folder: &Path) -> Result<Vec<String>> {
    if !folder.is_dir() {
        bail!("Not a figure folder: {}", folder.display());
    }

    let mut identifiers = Vec::new();
    for entry in WalkDir::new(folder).max_depth(1).into_iter().filter_map(|e| e.ok()) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(identifier) = name.strip_suffix(CORE_SCRIPT_SUFFIX) {
            identifiers.push(identifier.to_string());
        }
    }
    identifiers.sort();

    if identifiers.is_empty() {
        bail!("No generated figure scripts (*{}) in {}", CORE_SCRIPT_SUFFIX, folder.display());
    }
    Ok(identifiers)
}

fn render_folder(folder: &Path, terminal: TerminalArg, verbose: bool) -> Result<()> {
    for identifier in discover_identifiers(folder)? {
        let paths = FigurePaths::new(folder, identifier.as_str());
        let output = match terminal {
            TerminalArg::Jpg => render::render_preview(&paths, verbose)?,
            TerminalArg::Latex => render::render_latex(&paths, verbose)?,
            TerminalArg::Tikz => render::render_tikz(&paths, verbose)?,
        };

        if verbose {
            println!("===== stderr =====\n{}\n===== stdout =====\n{}", output.stderr, output.stdout);
        }
        println!("Rendered {}: {}", identifier, output.image.display());
        if let Some(preview) = output.preview {
            println!("  preview: {}", preview.display());
        }
    }
    Ok(())
}

fn print_scripts(folder: &Path) -> Result<()> {
    for identifier in discover_identifiers(folder)? {
        let paths = FigurePaths::new(folder, identifier.as_str());
        let script_path = paths.globalize(&paths.core_script());
        let content = fs::read_to_string(&script_path)
            .with_context(|| format!("Failed to read script: {}", script_path.display()))?;
        println!("# ---- {} ----", paths.core_script());
        println!("{}", content);
    }
    Ok(())
}

fn show_info(folder: &Path) -> Result<()> {
    match FigureManifest::load(folder)? {
        Some(manifest) => {
            println!("Figure folder: {}", format_path_with_tilde(folder));
            println!("  identifier: {}", manifest.file_identifier);
            println!("  created: {}", manifest.created.format("%Y-%m-%d %H:%M:%S"));
            println!("  latex enabled: {}", manifest.latex_enabled);
            println!("  tikz enabled: {}", manifest.tikz_enabled);
            println!("  multiplot: {}", manifest.is_multiplot);
            println!("  datasets ({}):", manifest.dataset_files.len());
            for dataset in &manifest.dataset_files {
                println!("    {}", dataset);
            }
        }
        None => {
            // older folders carry no manifest, fall back to scanning
            println!("Figure folder: {} (no manifest)", format_path_with_tilde(folder));
            for identifier in discover_identifiers(folder)? {
                println!("  identifier: {}", identifier);
            }
        }
    }

    let absolute = folder
        .canonicalize()
        .with_context(|| format!("Failed to resolve folder: {}", folder.display()))?;
    match SshInfo::for_folder(&absolute, None) {
        Ok(ssh) => {
            let info = FolderInfo::new(&folder.to_string_lossy(), &absolute, &ssh);
            println!();
            print!("{}", info.render());
        }
        Err(e) => {
            eprintln!("Warning: no retrieval info available: {}", e);
        }
    }

    Ok(())
}

fn show_snippet(folder: &Path, copy: bool) -> Result<()> {
    let (identifier, tikz_enabled) = match FigureManifest::load(folder)? {
        Some(manifest) => (manifest.file_identifier, manifest.tikz_enabled),
        None => {
            let identifiers = discover_identifiers(folder)?;
            (identifiers[0].clone(), false)
        }
    };

    let paths = FigurePaths::new(folder, identifier.as_str());
    let folder_name = folder.to_string_lossy();
    let pdf_stem =
        format!("{}/{}", folder_name, paths.pdf_output().trim_end_matches(".pdf"));
    let tikz_stem =
        format!("{}/{}", folder_name, paths.tikz_output().trim_end_matches(".pdf"));
    let snippet = templates::latex_include_snippet(&pdf_stem, &tikz_stem, tikz_enabled);

    println!("{}", snippet);
    if copy {
        copy_to_clipboard(&snippet)?;
        eprintln!("Snippet copied to clipboard");
    }
    Ok(())
}

/// Artifacts removed by `clean`, matching the Makefile clean target plus
/// the latex intermediates the compile scripts normally remove themselves
const CLEAN_EXTENSIONS: &[&str] = &["pdf", "jpg", "png", "aux", "dvi", "log", "ps"];
const CLEAN_DIRS: &[&str] = &["fig.latex.nice", "fig.tikz.nice"];

fn clean_folder(folder: &Path) -> Result<()> {
    if !folder.is_dir() {
        bail!("Not a figure folder: {}", folder.display());
    }

    let mut removed = 0;
    for entry in WalkDir::new(folder).max_depth(1).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path == folder {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().is_dir() {
            if CLEAN_DIRS.contains(&name.as_str()) {
                fs::remove_dir_all(path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
                removed += 1;
            }
            continue;
        }

        let matches_extension = path
            .extension()
            .map(|e| CLEAN_EXTENSIONS.contains(&e.to_string_lossy().as_ref()))
            .unwrap_or(false);
        if matches_extension || name.contains("converted") {
            fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
            removed += 1;
        }
    }

    println!("Removed {} build artifacts from {}", removed, folder.display());
    Ok(())
}
