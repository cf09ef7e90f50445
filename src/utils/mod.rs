//! Shared utilities: escaping, file naming, environment lookup

pub mod environment;
pub mod escape;
pub mod paths;

pub use environment::{get_hostname, get_username};
pub use escape::{autoescape_backslashes, has_title_keyword, quote_argument, title_from_dataset};
pub use paths::{FigurePaths, format_path_with_tilde};
