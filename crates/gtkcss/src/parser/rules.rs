//! Top-level constructs and declaration blocks.
//!
//! - `@define-color NAME VALUE;`
//! - `selector { name: value; ... }`
//! - `@keyframes NAME { from { ... } to { ... } }`
//! - `/* ... */`
//!
//! All parsers here skip leading whitespace themselves.

use crate::parser::stylesheet::{
    Channel, ColorDefinition, CssRule, Declaration, KeyframeBlock, KeyframeSelector, KeyframesRule,
    ValueToken,
};
use crate::parser::values::{
    is_ident_char, parse_channel, parse_color_value, parse_ident, parse_string_literal,
};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until},
    character::complete::{char, multispace0, multispace1, one_of, satisfy},
    combinator::{cut, map, not, opt, peek, recognize, value, verify},
    multi::{many1, separated_list1},
    sequence::{delimited, pair, preceded, terminated, tuple},
};

/// Parses `@define-color NAME VALUE;`.
///
/// The keyword must be followed by whitespace. After that, a malformed name,
/// value or missing `;` is a hard failure.
pub fn parse_color_definition(input: &str) -> IResult<&str, ColorDefinition> {
    let (input, _) = multispace0(input)?;
    let (input, _) = terminated(tag("@define-color"), peek(multispace1))(input)?;

    let (input, (name, value)) = cut(terminated(
        pair(
            preceded(multispace1, parse_ident),
            preceded(multispace1, parse_color_value),
        ),
        preceded(multispace0, char(';')),
    ))(input)?;

    log::debug!("@define-color {}", name);
    Ok((
        input,
        ColorDefinition {
            name: name.to_string(),
            value,
        },
    ))
}

fn parse_value_token(input: &str) -> IResult<&str, ValueToken> {
    alt((
        map(parse_color_value, ValueToken::Color),
        map(one_of("/,|"), ValueToken::Separator),
    ))(input)
}

/// Parses `name: value tokens`, stopping before `;` or `}`.
///
/// The terminator is left in the input. Once the `:` has been seen, the value
/// must parse; a bad value is a hard failure.
pub fn parse_declaration(input: &str) -> IResult<&str, Declaration> {
    let (input, _) = multispace0(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, _) = pair(multispace0, char(':'))(input)?;

    let (input, value) = cut(terminated(
        many1(preceded(multispace0, parse_value_token)),
        peek(preceded(multispace0, one_of(";}"))),
    ))(input)?;

    Ok((input, Declaration::new(name, value)))
}

/// Parses one or more `;`-separated declarations with an optional trailing `;`.
pub fn parse_declaration_list(input: &str) -> IResult<&str, Vec<Declaration>> {
    terminated(
        separated_list1(pair(multispace0, char(';')), parse_declaration),
        opt(pair(multispace0, char(';'))),
    )(input)
}

/// Parses `{ declarations }`; the declaration list may be empty.
fn parse_declaration_block(input: &str) -> IResult<&str, Vec<Declaration>> {
    map(
        delimited(
            pair(multispace0, char('{')),
            opt(parse_declaration_list),
            pair(multispace0, char('}')),
        ),
        Option::unwrap_or_default,
    )(input)
}

/// Scans a selector: everything up to the first `{` not escaped by `\` and
/// not inside a quoted string or comment.
///
/// Outside quotes a selector never contains `;` or `}` and never starts with
/// `/*`, so a stray statement or comment is not folded into the following rule.
fn parse_selector(input: &str) -> IResult<&str, &str> {
    if input.starts_with("/*") {
        return Err(selector_error(input, nom::error::ErrorKind::Verify));
    }

    let mut pos = 0;
    while let Some(c) = input[pos..].chars().next() {
        match c {
            '\\' => {
                pos += c.len_utf8();
                if let Some(next) = input[pos..].chars().next() {
                    pos += next.len_utf8();
                }
                continue;
            }
            '"' | '\'' => {
                let (rest, _) = parse_string_literal(&input[pos..])
                    .map_err(|_| selector_error(input, nom::error::ErrorKind::TakeUntil))?;
                pos = input.len() - rest.len();
                continue;
            }
            '/' if input[pos..].starts_with("/*") => {
                let end = input[pos + 2..]
                    .find("*/")
                    .ok_or_else(|| selector_error(input, nom::error::ErrorKind::TakeUntil))?;
                pos += end + 4;
                continue;
            }
            '{' if pos > 0 => return Ok((&input[pos..], &input[..pos])),
            '{' | ';' | '}' => {
                return Err(selector_error(input, nom::error::ErrorKind::TakeTill1));
            }
            _ => {}
        }
        pos += c.len_utf8();
    }

    Err(selector_error(input, nom::error::ErrorKind::TakeUntil))
}

fn selector_error(input: &str, kind: nom::error::ErrorKind) -> nom::Err<nom::error::Error<&str>> {
    nom::Err::Error(nom::error::Error::new(input, kind))
}

/// Parses `selector { declarations }`.
pub fn parse_css_rule(input: &str) -> IResult<&str, CssRule> {
    let (input, _) = multispace0(input)?;
    let (input, selector) = parse_selector(input)?;
    let selector = selector.trim_end();
    let (input, declarations) = parse_declaration_block(input)?;

    log::debug!("rule `{}` with {} declarations", selector, declarations.len());
    Ok((
        input,
        CssRule {
            selector: selector.to_string(),
            declarations,
        },
    ))
}

fn parse_keyframe_selector(input: &str) -> IResult<&str, KeyframeSelector> {
    alt((
        value(KeyframeSelector::From, keyword("from")),
        value(KeyframeSelector::To, keyword("to")),
        map(
            verify(parse_channel, |c: &Channel| c.percent),
            |c: Channel| KeyframeSelector::Percent(c.raw),
        ),
    ))(input)
}

/// Matches `word` only when it is not the prefix of a longer name.
fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag(word), not(peek(satisfy(is_ident_char))))
}

fn parse_keyframe_block(input: &str) -> IResult<&str, KeyframeBlock> {
    let (input, selector) = preceded(multispace0, parse_keyframe_selector)(input)?;
    let (input, declarations) = parse_declaration_block(input)?;
    Ok((
        input,
        KeyframeBlock {
            selector,
            declarations,
        },
    ))
}

/// Parses `@keyframes NAME { from { ... } to { ... } }`.
pub fn parse_keyframes(input: &str) -> IResult<&str, KeyframesRule> {
    let (input, _) = multispace0(input)?;
    let (input, _) = terminated(tag("@keyframes"), peek(multispace1))(input)?;

    let (input, (name, blocks)) = cut(pair(
        preceded(multispace1, parse_ident),
        delimited(
            pair(multispace0, char('{')),
            many1(parse_keyframe_block),
            pair(multispace0, char('}')),
        ),
    ))(input)?;

    log::debug!("@keyframes {} with {} blocks", name, blocks.len());
    Ok((
        input,
        KeyframesRule {
            name: name.to_string(),
            blocks,
        },
    ))
}

/// Parses a `/* ... */` comment, delimiters included.
pub fn parse_comment(input: &str) -> IResult<&str, &str> {
    preceded(
        multispace0,
        recognize(tuple((tag("/*"), take_until("*/"), tag("*/")))),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_stops_at_brace() {
        let (rest, selector) = parse_selector("button:hover {").unwrap();
        assert_eq!(selector, "button:hover ");
        assert_eq!(rest, "{");
    }

    #[test]
    fn selector_skips_escaped_brace() {
        let (rest, selector) = parse_selector(r"a\{b {").unwrap();
        assert_eq!(selector, r"a\{b ");
        assert_eq!(rest, "{");
    }

    #[test]
    fn selector_rejects_semicolon() {
        assert!(parse_selector("@define-color a #fff; b {").is_err());
    }

    #[test]
    fn selector_keeps_quoted_attribute_values() {
        let (rest, selector) = parse_selector(r#"a[title="x;y"] {"#).unwrap();
        assert_eq!(selector, r#"a[title="x;y"] "#);
        assert_eq!(rest, "{");

        let (rest, selector) = parse_selector(r#"a[title='}{'] {"#).unwrap();
        assert_eq!(selector, r#"a[title='}{'] "#);
        assert_eq!(rest, "{");
    }

    #[test]
    fn selector_handles_escaped_quote_in_string() {
        let (_, selector) = parse_selector(r#"a[title="\"}"] {"#).unwrap();
        assert_eq!(selector, r#"a[title="\"}"] "#);
    }

    #[test]
    fn selector_skips_inner_comment() {
        let (_, selector) = parse_selector("a /* don't; } */ b {").unwrap();
        assert_eq!(selector, "a /* don't; } */ b ");
    }

    #[test]
    fn selector_rejects_unterminated_string() {
        assert!(parse_selector(r#"a[title="x] {"#).is_err());
    }

    #[test]
    fn selector_rejects_leading_comment() {
        assert!(parse_selector("/* x */ b {").is_err());
    }

    #[test]
    fn keyframe_selector_percent() {
        let (_, selector) = parse_keyframe_selector("50% {").unwrap();
        assert_eq!(selector, KeyframeSelector::Percent("50%".to_string()));
    }

    #[test]
    fn keyframe_selector_requires_word_boundary() {
        assert!(parse_keyframe_selector("tomato {").is_err());
    }
}
