//! End-to-end folder generation: every self-contained figure artifact

mod common;

use autognuplot::{AutoGnuplotFigure, FigureManifest, FigureOptions, HistogramOptions};
use common::{FigureBuilder, file_names, read_file, sine_columns};

#[test]
fn test_generate_writes_all_artifacts() {
    let builder = FigureBuilder::new("fig1");
    let folder = builder.folder();
    let (_dir, mut figure) = builder.build();
    figure.plot("u 1:2 w lp t \"data\"", &sine_columns(20)).unwrap();
    figure.generate().unwrap();

    let names = file_names(&folder);
    for expected in [
        "fig1__0__.dat",
        "fig1__.core.gnu",
        "fig1__.jpg.gnu",
        "fig1__.pdflatex.gnu",
        "fig1__.pdflatex_compile.sh",
        "fig1__.tikz.gnu",
        "fig1__.tikz_compile.sh",
        "Makefile",
        ".gitignore",
        "figure.json",
    ] {
        assert!(names.contains(&expected.to_string()), "missing {} in {:?}", expected, names);
    }
}

#[test]
fn test_dataset_file_holds_the_columns() {
    let builder = FigureBuilder::new("fig1");
    let folder = builder.folder();
    let (_dir, mut figure) = builder.build();
    figure.plot("u 1:2 t \"d\"", &[vec![1.0, 2.0].into(), vec![10.0, 20.0].into()]).unwrap();

    let content = read_file(&folder, "fig1__0__.dat");
    let rows: Vec<&str> = content.lines().collect();
    assert_eq!(rows.len(), 2);
    let first: Vec<f64> = rows[0].split_whitespace().map(|v| v.parse().unwrap()).collect();
    assert_eq!(first, vec![1.0, 10.0]);
}

#[test]
fn test_wrapper_scripts_load_the_core_script() {
    let builder = FigureBuilder::new("fig1");
    let folder = builder.folder();
    let (_dir, mut figure) = builder.build();
    figure.plot("u 1:2 t \"d\"", &sine_columns(5)).unwrap();
    figure.generate().unwrap();

    for wrapper in ["fig1__.jpg.gnu", "fig1__.pdflatex.gnu", "fig1__.tikz.gnu"] {
        let content = read_file(&folder, wrapper);
        assert!(content.contains("load \"fig1__.core.gnu\""), "{} was:\n{}", wrapper, content);
    }
}

#[test]
fn test_compile_script_carries_conversion_settings() {
    let options = FigureOptions { convert_density: 250, convert_quality: 90, ..Default::default() };
    let builder = FigureBuilder::new("fig1").with_options(options);
    let folder = builder.folder();
    let (_dir, mut figure) = builder.build();
    figure.plot("u 1:2 t \"d\"", &sine_columns(5)).unwrap();
    figure.generate().unwrap();

    let content = read_file(&folder, "fig1__.pdflatex_compile.sh");
    assert!(content.contains("-density 250"), "script was:\n{}", content);
    assert!(content.contains("-quality 90"), "script was:\n{}", content);
    assert!(content.contains("fig1__.pdf_converted_to.png"), "script was:\n{}", content);
}

#[test]
fn test_makefile_targets_follow_enabled_terminals() {
    let builder = FigureBuilder::new("fig1");
    let folder = builder.folder();
    let (_dir, _figure) = builder.build();

    // latex on, tikz off by default
    let makefile = read_file(&folder, "Makefile");
    assert!(makefile.contains("all: $(latex_targets_pdf)"), "Makefile was:\n{}", makefile);
    assert!(!makefile.contains("all: $(latex_targets_pdf) $(tikz_targets_pdf)"));

    let options = FigureOptions { tikz_enabled: true, ..Default::default() };
    let builder = FigureBuilder::new("fig2").with_options(options);
    let folder = builder.folder();
    let (_dir2, _figure) = builder.build();
    let makefile = read_file(&folder, "Makefile");
    assert!(
        makefile.contains("all: $(latex_targets_pdf) $(tikz_targets_pdf)"),
        "Makefile was:\n{}",
        makefile
    );
}

#[test]
fn test_makefile_recipes_are_tab_indented() {
    let builder = FigureBuilder::new("fig1");
    let folder = builder.folder();
    let (_dir, _figure) = builder.build();

    let makefile = read_file(&folder, "Makefile");
    assert!(makefile.contains("\n\t"), "Makefile was:\n{}", makefile);
    assert!(!makefile.contains("{TAB}"));
}

#[test]
fn test_manifest_round_trip() {
    let builder = FigureBuilder::new("fig1");
    let folder = builder.folder();
    let (_dir, mut figure) = builder.build();
    figure.set_multiplot("layout 1,2");
    figure.plot("u 1:2 t \"a\"", &sine_columns(5)).unwrap();
    figure.next_multiplot_group().unwrap();
    figure.plot("u 1:2 t \"b\"", &sine_columns(5)).unwrap();
    figure.generate().unwrap();

    let manifest = FigureManifest::load(&folder).unwrap().expect("manifest written");
    assert_eq!(manifest.file_identifier, "fig1");
    assert!(manifest.latex_enabled);
    assert!(!manifest.tikz_enabled);
    assert!(manifest.is_multiplot);
    assert_eq!(manifest.dataset_files, ["fig1__0__.dat", "fig1__1__.dat"]);
}

#[test]
fn test_manifest_missing_returns_none() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(FigureManifest::load(dir.path()).unwrap().is_none());
}

#[test]
fn test_histogram_dump_writes_raw_data() {
    let builder = FigureBuilder::new("fig1");
    let folder = builder.folder();
    let (_dir, mut figure) = builder.build();

    let data: Vec<f64> = (0..50).map(|i| i as f64).collect();
    let options = HistogramOptions { dump_data: true, ..Default::default() };
    figure.histogram("w boxes t \"h\"", &data, &options).unwrap();

    let dump = read_file(&folder, "fig1__0__.dat.hist_compl_dump.dat");
    assert_eq!(dump.lines().count(), 50);
}

#[test]
fn test_regenerate_is_idempotent() {
    let builder = FigureBuilder::new("fig1");
    let folder = builder.folder();
    let (_dir, mut figure) = builder.build();
    figure.plot("u 1:2 t \"d\"", &sine_columns(5)).unwrap();
    figure.generate().unwrap();
    let first = read_file(&folder, "fig1__.core.gnu");
    figure.generate().unwrap();
    let second = read_file(&folder, "fig1__.core.gnu");
    assert_eq!(first, second);
}

#[test]
fn test_nested_folder_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let folder = dir.path().join("a").join("b").join("fig");
    let figure = AutoGnuplotFigure::new(folder.to_str().unwrap(), "fig").unwrap();
    assert!(folder.is_dir());
    assert_eq!(figure.file_identifier(), "fig");
}
