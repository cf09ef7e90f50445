//! String escaping and title handling for generated gnuplot commands

/// Doubles backslashes so LaTeX markup survives the trip through the
/// generated script (gnuplot consumes one level of escaping on load).
pub fn autoescape_backslashes(text: &str) -> String {
    text.replace('\\', "\\\\")
}

/// Wraps a value in double quotes for use as a gnuplot string argument
pub fn quote_argument(value: &str) -> String {
    format!("\"{}\"", value)
}

/// Checks whether a plot command already carries a `title` keyword,
/// including the short form `t` accepted by gnuplot
pub fn has_title_keyword(command: &str) -> bool {
    command.contains(" t ")
        || command.contains(" t\"")
        || command.contains(" title ")
        || command.contains(" title\"")
}

/// Derives a plot title from a dataset filename.
///
/// Collapses the double-underscore separators used in generated dataset
/// names and escapes the remaining underscores, which would otherwise be
/// read as subscripts by the epslatex and tikz terminals.
pub fn title_from_dataset(dataset_fname: &str) -> String {
    let basename = dataset_fname.rsplit('/').next().unwrap_or(dataset_fname);
    basename.replace("__", "_").replace('_', "\\\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autoescape_doubles_backslashes() {
        assert_eq!(autoescape_backslashes(r"set xlabel '$\nu$'"), r"set xlabel '$\\nu$'");
    }

    #[test]
    fn test_autoescape_leaves_plain_text_alone() {
        let plain = "u 1:2 w lp title \"data\"";
        assert_eq!(autoescape_backslashes(plain), plain);
    }

    #[test]
    fn test_quote_argument() {
        assert_eq!(quote_argument("phv,12"), "\"phv,12\"");
    }

    #[test]
    fn test_title_keyword_detection() {
        assert!(has_title_keyword("u 1:2 t \"foo\""));
        assert!(has_title_keyword("u 1:2 title \"foo\""));
        assert!(has_title_keyword("u 1:2 t 'foo' w l"));
        assert!(!has_title_keyword("u 1:2 w lp"));
        // `notitle` must not be mistaken for a title
        assert!(!has_title_keyword("u 1:2 notitle"));
    }

    #[test]
    fn test_title_from_dataset_escapes_underscores() {
        assert_eq!(title_from_dataset("fig__0__.dat"), "fig\\\\_0\\\\_.dat");
    }

    #[test]
    fn test_title_from_dataset_strips_folder() {
        assert_eq!(title_from_dataset("figures/run1/fig__3__.dat"), "fig\\\\_3\\\\_.dat");
    }
}
