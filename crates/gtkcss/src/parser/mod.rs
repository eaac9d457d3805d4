//! GTK CSS grammar and document assembly.
//!
//! This module provides:
//!
//! - [`parse_document`]: Parses a whole stylesheet into a [`Document`]
//! - [`translate`]: Parses and renders a stylesheet as web CSS
//! - [`parse_top_level`]: The ordered choice over top-level constructs
//!
//! ## Submodules
//!
//! - [`values`]: Color value grammar (`@name`, `alpha()`, `mix()`, functions)
//! - [`rules`]: `@define-color`, rule blocks, `@keyframes`, comments
//! - [`stylesheet`]: Data model produced by the grammar
//!
//! ## Example
//!
//! ```rust
//! use gtkcss::parser::{Rule, parse_document};
//!
//! let document = parse_document("@define-color bg #fff; window { color: @bg; }").unwrap();
//! assert_eq!(document.rules.len(), 2);
//! assert!(matches!(document.rules[0], Rule::ColorDefinition(_)));
//! ```

pub mod rules;
pub mod stylesheet;
pub mod values;

pub use crate::parser::stylesheet::{
    ArgToken, Channel, ColorDefinition, ColorValue, CssRule, Declaration, Document,
    KeyframeBlock, KeyframeSelector, KeyframesRule, Rule, ValueToken,
};

use crate::GtkCssError;
use crate::parser::rules::{
    parse_color_definition, parse_comment, parse_css_rule, parse_keyframes,
};

use nom::{IResult, branch::alt, combinator::map, multi::many0};

/// Parses one top-level construct.
///
/// Alternatives are tried in a fixed order: color definition, rule block,
/// keyframes, comment. The first one that matches wins.
pub fn parse_top_level(input: &str) -> IResult<&str, Rule> {
    alt((
        map(parse_color_definition, Rule::ColorDefinition),
        map(parse_css_rule, Rule::Css),
        map(parse_keyframes, Rule::Keyframes),
        map(parse_comment, |raw: &str| Rule::Comment(raw.to_string())),
    ))(input)
}

/// Parses a complete GTK stylesheet.
///
/// The whole input must match; there is no recovery after a mismatch.
pub fn parse_document(source: &str) -> Result<Document, GtkCssError> {
    let (remaining, rules) = many0(parse_top_level)(source).map_err(|e| match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => GtkCssError::at(source, e.input),
        nom::Err::Incomplete(_) => GtkCssError::UnexpectedEof {
            expected: "more input".to_string(),
        },
    })?;

    let remaining = remaining.trim_start();
    if !remaining.is_empty() {
        return Err(GtkCssError::at(source, remaining));
    }

    let document = Document::new(rules);
    log::debug!(
        "parsed {} top-level rules ({} color definitions, {} GTK-specific values)",
        document.rules.len(),
        document.color_definitions(),
        document.dialect_values()
    );
    Ok(document)
}

/// Translates a GTK stylesheet into web CSS.
///
/// # Examples
///
/// ```rust
/// let css = gtkcss::translate("@define-color accent_1 #336699;").unwrap();
/// assert_eq!(css, ":root { --accent_1: #336699; }");
/// ```
pub fn translate(source: &str) -> Result<String, GtkCssError> {
    parse_document(source).map(|document| document.to_string())
}
