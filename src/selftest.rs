//! Built-in checks run by `--test`.
//!
//! Each case feeds one input to one grammar production and compares the
//! rendered output. Results are printed one line per case.

use crate::error::{AppError, Result};
use gtkcss::parser::rules::{
    parse_color_definition, parse_comment, parse_css_rule, parse_declaration, parse_keyframes,
};
use gtkcss::parser::values::parse_color_value;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Production {
    ColorValue,
    ColorDefinition,
    Declaration,
    Rule,
    Keyframes,
    Comment,
    Document,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Production::ColorValue => "color-value",
            Production::ColorDefinition => "define-color",
            Production::Declaration => "declaration",
            Production::Rule => "rule",
            Production::Keyframes => "keyframes",
            Production::Comment => "comment",
            Production::Document => "document",
        };
        write!(f, "{:<12}", name)
    }
}

struct Case {
    production: Production,
    input: &'static str,
    /// `None` when the input must be rejected.
    expected: Option<&'static str>,
}

const fn case(production: Production, input: &'static str, expected: &'static str) -> Case {
    Case {
        production,
        input,
        expected: Some(expected),
    }
}

const fn rejects(production: Production, input: &'static str) -> Case {
    Case {
        production,
        input,
        expected: None,
    }
}

const CASES: &[Case] = &[
    case(Production::ColorValue, "@foo", "var(--foo)"),
    case(Production::ColorValue, "var(--foo)", "var(--foo)"),
    case(Production::ColorValue, "#123324", "#123324"),
    case(Production::ColorValue, "rgba(0, 0, 0, 0.5)", "rgba(0, 0, 0, 0.5)"),
    case(
        Production::ColorValue,
        "alpha(@view_fg_color, 0.1)",
        "color-mix(in srgb, var(--view_fg_color) 10%, transparent)",
    ),
    case(
        Production::ColorValue,
        "mix(#123324, @bg, 0.25)",
        "color-mix(in srgb, #123324 25%, var(--bg))",
    ),
    case(
        Production::ColorValue,
        "color-mix(in srgb, red 10%, blue)",
        "color-mix(in srgb , red 10% , blue)",
    ),
    case(
        Production::ColorValue,
        "linear-gradient(to right, @a, @b)",
        "linear-gradient(to right , var(--a) , var(--b))",
    ),
    case(Production::ColorValue, "transparent", "transparent"),
    rejects(Production::ColorValue, "mix(@a, 0.5)"),
    case(
        Production::ColorDefinition,
        "@define-color accent_1 #336699;",
        ":root { --accent_1: #336699; }",
    ),
    rejects(Production::ColorDefinition, "@define-color accent_1 #336699"),
    case(
        Production::Declaration,
        "border: 1px solid @borders;",
        "border: 1px solid var(--borders)",
    ),
    case(
        Production::Rule,
        "selection { background-color: alpha(@view_fg_color,0.1); color: transparent; }",
        "selection {\n    background-color: color-mix(in srgb, var(--view_fg_color) 10%, transparent);\n    color: transparent;\n}",
    ),
    case(
        Production::Keyframes,
        "@keyframes spin { from { opacity: 0; } to { opacity: 1; } }",
        "@keyframes spin {\n    from {\n        opacity: 0;\n    }\n    to {\n        opacity: 1;\n    }\n}",
    ),
    case(Production::Comment, "/* keep me */", "/* keep me */"),
    case(
        Production::Document,
        "@define-color a #fff;\n/* x */\nb { color: @a; }",
        ":root { --a: #fff; }\n/* x */\nb {\n    color: var(--a);\n}",
    ),
    rejects(Production::Document, "b { color: @a; "),
];

/// Runs `parser` and renders its result.
///
/// All input must be consumed, except for a lone terminating `;` that
/// productions such as a declaration leave for their caller.
fn complete<'a, T, E>(
    parser: fn(&'a str) -> std::result::Result<(&'a str, T), E>,
    input: &'a str,
) -> std::result::Result<String, String>
where
    T: fmt::Display,
    E: fmt::Debug,
{
    match parser(input) {
        Ok((rest, value)) if matches!(rest.trim(), "" | ";") => Ok(value.to_string()),
        Ok((rest, _)) => Err(format!("unparsed input {:?}", rest)),
        Err(e) => Err(format!("{:?}", e)),
    }
}

fn apply(production: Production, input: &str) -> std::result::Result<String, String> {
    match production {
        Production::ColorValue => complete(parse_color_value, input),
        Production::ColorDefinition => complete(parse_color_definition, input),
        Production::Declaration => complete(parse_declaration, input),
        Production::Rule => complete(parse_css_rule, input),
        Production::Keyframes => complete(parse_keyframes, input),
        Production::Comment => complete(parse_comment, input),
        Production::Document => gtkcss::translate(input).map_err(|e| e.to_string()),
    }
}

/// Runs one case, returning a description of the mismatch on failure.
fn check(case: &Case) -> std::result::Result<(), String> {
    match (apply(case.production, case.input), case.expected) {
        (Ok(actual), Some(expected)) if actual == expected => Ok(()),
        (Ok(actual), Some(expected)) => Err(format!(
            "    expected: {:?}\n    actual:   {:?}",
            expected, actual
        )),
        (Err(e), Some(_)) => Err(format!("    error: {}", e)),
        (Ok(actual), None) => Err(format!("    expected rejection, got {:?}", actual)),
        (Err(_), None) => Ok(()),
    }
}

/// Runs every case, printing a line per case. Fails if any case fails.
pub fn run() -> Result<()> {
    let mut failed = 0;
    for case in CASES {
        match check(case) {
            Ok(()) => println!("ok   {} {:?}", case.production, case.input),
            Err(details) => {
                failed += 1;
                println!("FAIL {} {:?}", case.production, case.input);
                println!("{}", details);
            }
        }
    }

    println!("{} passed, {} failed", CASES.len() - failed, failed);
    if failed > 0 {
        return Err(AppError::SelfTest(failed, CASES.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_case_passes() {
        for case in CASES {
            assert_eq!(check(case), Ok(()), "{} {:?}", case.production, case.input);
        }
    }
}
