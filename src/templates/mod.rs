//! File templates for generated figure folders
//!
//! Each figure folder is self-contained: the Makefile, the terminal wrapper
//! scripts and the compile shell scripts are all generated from the templates
//! below. Placeholders use `{NAME}` markers and are filled by plain string
//! replacement; `{TAB}` stands in for the literal tab the Makefile requires.

use crate::models::TerminalSettings;

const MAKEFILE_TEMPLATE: &str = r#"
SHELL:=/bin/bash
latex_figs=$(wildcard *.pdflatex_compile.sh)
tikz_figs=$(wildcard *.tikz_compile.sh)
latex_targets_pdf=$(latex_figs:.pdflatex_compile.sh=.pdf)
tikz_targets_pdf=$(tikz_figs:.tikz_compile.sh=.tikz.pdf)
all_targets=$(latex_targets_pdf) $(tikz_targets_pdf)


all: {ALL_TARGETS}
latex: $(latex_targets_pdf)
tikz:  $(tikz_targets_pdf)


%.tikz.pdf: %.tikz_compile.sh %.tikz.gnu %.core.gnu
{TAB}bash $<
{TAB}-[[ -f "compiled_files_redirection.string" ]] && (mkdir -p `cat compiled_files_redirection.string`)
{TAB}-[[ -f "compiled_files_redirection.string" ]] && (cp $@ `cat compiled_files_redirection.string`)


%.pdf: %.pdflatex_compile.sh %.pdflatex.gnu %.core.gnu
{TAB}bash $<
{TAB}-[[ -f "compiled_files_redirection.string" ]] && (mkdir -p `cat compiled_files_redirection.string`)
{TAB}-[[ -f "compiled_files_redirection.string" ]] && (cp $@ `cat compiled_files_redirection.string`)


clean:
{TAB}rm -f *.pdf *.jpg
{TAB}rm -Rf fig.latex.nice
{TAB}rm -Rf fig.tikz.nice

deepclean:
{TAB}rm -rf *

.PHONY: sync
sync:
{TAB}bash sync_me.sh
"#;

const SYNC_SCRIPT_TEMPLATE: &str = r#"
{SYNC_SCP_CALL}
"#;

const LATEX_WRAPPER_TEMPLATE: &str = r#"
set terminal epslatex size {x_size},{y_size} color colortext standalone \
     '{font}'  linewidth {linewidth} {other}
set output 'fig.latex.nice/plot_out.tex'

load "{CORE}";
"#;

const TIKZ_WRAPPER_TEMPLATE: &str = r#"
set terminal tikz size {x_size},{y_size} color colortext standalone \
     '{font}'  linewidth {linewidth} {other}
set output 'fig.tikz.nice/tikz_out.tex'

load "{CORE}";
"#;

const JPG_WRAPPER_TEMPLATE: &str = r#"
set term jpeg;
set out "{OUTFILE}";
load "{CORE}";
"#;

const LATEX_COMPILE_TEMPLATE: &str = r#"
mkdir -p fig.latex.nice
gnuplot {LATEX_TARGET_GNU} || exit 1

latex fig.latex.nice/plot_out.tex
dvips plot_out.dvi  -o plot_out.ps
ps2eps --ignoreBB -f plot_out.ps
ps2pdf plot_out.ps

mv plot_out.pdf {FINAL_PDF_NAME}

if command -v pdftoppm &> /dev/null
then

    pdftoppm -png {FINAL_PDF_NAME} > {FINAL_PDF_NAME_CONVERTED}

else
## this step rasterizes the pdf for quick previewing
if convert -density {CONVERT_DENSITY} {FINAL_PDF_NAME} -quality {CONVERT_QUALITY} {FINAL_PDF_NAME_CONVERTED}
then
  echo "conversion successful"
else
  echo ""
  echo "-ERROR: The convert command gave an error."
  echo "-FIXES: Make sure imagemagick is installed"
  echo "        Make sure imagemagick enables offline conversions:"
  echo "          sudo sed -i '/PDF/s/none/read|write/' /etc/ImageMagick-6/policy.xml   "
  echo "        Ref:   https://stackoverflow.com/a/52661288"
  echo ""
fi
fi

rm *.aux || true
rm *.dvi || true
rm *.log || true
rm *.ps || true
rm -Rf fig.latex.nice || true
"#;

const TIKZ_COMPILE_TEMPLATE: &str = r#"
mkdir -p fig.tikz.nice
gnuplot {TIKZ_TARGET_GNU} || exit 1

pdflatex fig.tikz.nice/tikz_out.tex

mv tikz_out.pdf {FINAL_PDF_NAME}

## check if pdftoppm exists, usually gives better results
if command -v pdftoppm &> /dev/null
then

    pdftoppm -png {FINAL_PDF_NAME} > {FINAL_PDF_NAME_CONVERTED}

else
if convert -density {CONVERT_DENSITY} {FINAL_PDF_NAME} -quality {CONVERT_QUALITY} {FINAL_PDF_NAME_CONVERTED}
then
  echo "conversion successful"
else
  echo ""
  echo "-ERROR: The convert command gave an error."
  echo "-FIXES: Make sure imagemagick is installed"
  echo "        Make sure imagemagick enables offline conversions:"
  echo "          sudo sed -i '/PDF/s/none/read|write/' /etc/ImageMagick-6/policy.xml   "
  echo "        Ref:   https://stackoverflow.com/a/52661288"
  echo ""
fi

fi


rm *.aux || true
rm *.log || true
rm -Rf fig.tikz.nice || true
"#;

pub const GITIGNORE: &str = r#"
*.aux
*.dvi
*.log
*.ps
*~
*.tex
**/fig.latex.nice/**
**/fig.tikz.nice/**
*converted*
plot_out.eps
"#;

/// Environment fixes printed by the `doctor` command, covering the two
/// failure modes most often hit when compiling figures: the imagemagick
/// pdf conversion policy and the gnuplot tikz terminal lua bug.
pub const ENVIRONMENT_FIXES: &str = r#"
These are some fixes found for imagemagick and gnuplot tikz terminal


Rasterizing the compiled pdf requires ImageMagick and authorization
to render pdf to jpg.
Should it fail:
https://stackoverflow.com/a/52661288

Concisely: sudo sed -i '/PDF/s/none/read|write/' /etc/ImageMagick-6/policy.xml

LUA compilation issue: https://tex.stackexchange.com/a/368194
solution:
in /usr/share/gnuplot5/gnuplot/5.0/lua/gnuplot-tikz.lua, Replace:
pgf.set_dashtype = function(dashtype)
gp.write("\\gpsetdashtype{"..dashtype.."}\n")
end


with:
pgf.set_dashtype = function(dashtype)
gp.write("%\\gpsetdashtype{"..dashtype.."}\n")
end
"#;

/// Renders the Makefile, with `all` building only the enabled terminals
pub fn makefile(all_targets: &str) -> String {
    MAKEFILE_TEMPLATE.replace("{ALL_TARGETS}", all_targets).replace("{TAB}", "\t")
}

pub fn sync_script(scp_call: &str) -> String {
    SYNC_SCRIPT_TEMPLATE.replace("{SYNC_SCP_CALL}", scp_call)
}

fn apply_terminal_settings(template: &str, settings: &TerminalSettings) -> String {
    template
        .replace("{x_size}", &settings.x_size)
        .replace("{y_size}", &settings.y_size)
        .replace("{font}", &settings.font)
        .replace("{linewidth}", &settings.linewidth)
        .replace("{other}", &settings.other)
}

/// Wrapper script selecting the epslatex terminal before loading the core file
pub fn latex_wrapper(core_script: &str, settings: &TerminalSettings) -> String {
    apply_terminal_settings(LATEX_WRAPPER_TEMPLATE, settings).replace("{CORE}", core_script)
}

/// Wrapper script selecting the tikz terminal before loading the core file
pub fn tikz_wrapper(core_script: &str, settings: &TerminalSettings) -> String {
    apply_terminal_settings(TIKZ_WRAPPER_TEMPLATE, settings).replace("{CORE}", core_script)
}

/// Wrapper script for the quick jpeg preview terminal
pub fn jpg_wrapper(outfile: &str, core_script: &str) -> String {
    JPG_WRAPPER_TEMPLATE.replace("{OUTFILE}", outfile).replace("{CORE}", core_script)
}

/// Shell script running the latex -> dvips -> ps2pdf pipeline and the
/// pdf-to-raster conversion fallback chain
pub fn latex_compile_script(
    target_gnu: &str,
    final_pdf: &str,
    converted_name: &str,
    density: u32,
    quality: u32,
) -> String {
    LATEX_COMPILE_TEMPLATE
        .replace("{LATEX_TARGET_GNU}", target_gnu)
        .replace("{FINAL_PDF_NAME_CONVERTED}", converted_name)
        .replace("{FINAL_PDF_NAME}", final_pdf)
        .replace("{CONVERT_DENSITY}", &density.to_string())
        .replace("{CONVERT_QUALITY}", &quality.to_string())
}

/// Shell script compiling the tikz terminal output with pdflatex
pub fn tikz_compile_script(
    target_gnu: &str,
    final_pdf: &str,
    converted_name: &str,
    density: u32,
    quality: u32,
) -> String {
    TIKZ_COMPILE_TEMPLATE
        .replace("{TIKZ_TARGET_GNU}", target_gnu)
        .replace("{FINAL_PDF_NAME_CONVERTED}", converted_name)
        .replace("{FINAL_PDF_NAME}", final_pdf)
        .replace("{CONVERT_DENSITY}", &density.to_string())
        .replace("{CONVERT_QUALITY}", &quality.to_string())
}

/// LaTeX snippet for including the compiled figure in a document
pub fn latex_include_snippet(pdf_stem: &str, tikz_stem: &str, tikz_enabled: bool) -> String {
    let (active_stem, inactive) = if tikz_enabled {
        (tikz_stem, format!("% pdflatex alternative:\n% \\includegraphics{{{}}}\n", pdf_stem))
    } else {
        (pdf_stem, format!("% tikz alternative:\n% \\includegraphics{{{}}}\n", tikz_stem))
    };
    format!(
        "\\begin{{figure}}\n  \\centering\n  \\includegraphics{{{}}}\n  \\caption{{}}\n  \\label{{fig:}}\n\\end{{figure}}\n{}",
        active_stem, inactive
    )
}
