//! Gnuplot `fit` support: function definition parsing and parameter inference
//!
//! A fit can reference a function already defined in the preamble, or carry
//! a full definition such as `f(x) = a*exp(-x/tau) + c`. Definitions are
//! parsed here so the declaration can be added to the script preamble and
//! the `via` parameter list inferred from the right-hand side.

use anyhow::{Context, Result, bail};
use regex::Regex;

/// Modifier keyword replaced with an inferred `via <params>` clause
pub const AUTO_VIA: &str = "auto_via";

/// Gnuplot built-in functions and constants, excluded from `via` inference
const GNUPLOT_BUILTINS: &[&str] = &[
    "abs", "acos", "acosh", "asin", "asinh", "atan", "atan2", "atanh", "besj0", "besj1",
    "besy0", "besy1", "ceil", "cos", "cosh", "erf", "erfc", "exp", "floor", "gamma", "int",
    "inverf", "invnorm", "lgamma", "log", "log10", "norm", "pi", "rand", "sgn", "sin",
    "sinh", "sqrt", "tan", "tanh",
];

/// A parsed `f(x) = ...` function definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    /// Callable part passed to `fit`, e.g. `f(x)`
    pub call: String,
    /// Function name, e.g. `f`
    pub name: String,
    /// Independent variable name, e.g. `x`
    pub independent_var: String,
    /// Right-hand side of the definition
    pub body: String,
    /// The whole declaration line added to the preamble
    pub declaration: String,
}

/// Options for [`fit`](crate::AutoGnuplotFigure::fit)
#[derive(Debug, Clone)]
pub struct FitOptions {
    /// Modifier string appended to the `fit` call. `auto_via` (the default)
    /// is replaced with a `via` clause inferred from the definition.
    pub modifiers: String,
    /// Names excluded from parameter inference, on top of the independent
    /// variable and gnuplot built-ins
    pub do_not_fit: Vec<String>,
    /// Suffix inferred parameters with a unique tag, so repeated fits in one
    /// script do not share state
    pub unicize_parameters: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self { modifiers: AUTO_VIA.to_string(), do_not_fit: Vec::new(), unicize_parameters: false }
    }
}

/// Parse a function argument as given to `fit`.
///
/// Returns None when `function` carries no `=`, i.e. names a function
/// defined elsewhere.
pub fn parse_definition(function: &str) -> Result<Option<FunctionDefinition>> {
    if !function.contains('=') {
        return Ok(None);
    }

    let declaration_re = Regex::new(r"^.*?\s*([a-zA-Z][a-zA-Z0-9_]*\s*\(.+\)\s*=.*)")
        .context("Invalid function declaration regex")?;
    let declaration = declaration_re
        .captures(function)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .with_context(|| format!("Cannot parse function definition: {}", function))?;

    let parts_re = Regex::new(r"([a-zA-Z][a-zA-Z0-9_]*)\s*\(\s*([a-zA-Z][a-zA-Z0-9_]*)\s*\)\s*=\s*(.*)")
        .context("Invalid function parts regex")?;
    let captures = parts_re
        .captures(&declaration)
        .with_context(|| format!("Unsupported function definition (scalar functions only): {}", function))?;

    let name = captures[1].to_string();
    let independent_var = captures[2].to_string();
    let body = captures[3].trim().to_string();
    let call = format!("{}({})", name, independent_var);

    Ok(Some(FunctionDefinition { call, name, independent_var, body, declaration }))
}

/// Infer the parameters to fit from the definition's right-hand side:
/// every identifier that is not the independent variable, a gnuplot
/// built-in, or explicitly excluded. Order of first appearance, unique.
pub fn infer_parameters(definition: &FunctionDefinition, do_not_fit: &[String]) -> Result<Vec<String>> {
    let ident_re =
        Regex::new(r"[a-zA-Z][a-zA-Z0-9_]*").context("Invalid identifier regex")?;

    let mut parameters = Vec::new();
    for m in ident_re.find_iter(&definition.body) {
        let ident = m.as_str();
        if ident == definition.independent_var
            || GNUPLOT_BUILTINS.contains(&ident)
            || do_not_fit.iter().any(|d| d == ident)
            || parameters.iter().any(|p| p == ident)
        {
            continue;
        }
        parameters.push(ident.to_string());
    }

    if parameters.is_empty() {
        bail!("No fit parameters found in function definition: {}", definition.declaration);
    }

    Ok(parameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_function_name_is_not_a_definition() {
        assert!(parse_definition("f(x)").unwrap().is_none());
    }

    #[test]
    fn test_parse_simple_definition() {
        let def = parse_definition("f(x) = a*x + b").unwrap().unwrap();
        assert_eq!(def.name, "f");
        assert_eq!(def.independent_var, "x");
        assert_eq!(def.call, "f(x)");
        assert_eq!(def.body, "a*x + b");
        assert_eq!(def.declaration, "f(x) = a*x + b");
    }

    #[test]
    fn test_parse_definition_with_custom_variable_name() {
        let def = parse_definition("g(yy) = tt*yy").unwrap().unwrap();
        assert_eq!(def.independent_var, "yy");
        assert_eq!(def.call, "g(yy)");
    }

    #[test]
    fn test_infer_parameters_excludes_variable_and_builtins() {
        let def = parse_definition("f(x) = a*exp(-x/tau) + c").unwrap().unwrap();
        let params = infer_parameters(&def, &[]).unwrap();
        assert_eq!(params, vec!["a", "tau", "c"]);
    }

    #[test]
    fn test_infer_parameters_respects_do_not_fit() {
        let def = parse_definition("f(x) = a*x + b").unwrap().unwrap();
        let params = infer_parameters(&def, &["b".to_string()]).unwrap();
        assert_eq!(params, vec!["a"]);
    }

    #[test]
    fn test_infer_parameters_deduplicates() {
        let def = parse_definition("f(x) = a*x*x + a*x + b").unwrap().unwrap();
        let params = infer_parameters(&def, &[]).unwrap();
        assert_eq!(params, vec!["a", "b"]);
    }

    #[test]
    fn test_constant_function_has_no_parameters() {
        let def = parse_definition("f(x) = sin(x)").unwrap().unwrap();
        assert!(infer_parameters(&def, &[]).is_err());
    }
}
