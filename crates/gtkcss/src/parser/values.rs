//! Color value grammar.
//!
//! A color value is anything that can appear as a token in a property value:
//!
//! - `var(--name)`: standard custom property reference, kept as-is
//! - `@name`: GTK color reference, rewritten to `var(--name)`
//! - `#rgb`, `#rrggbb`, ...: hex literals, kept as-is
//! - `rgb(...)`, `rgba(...)`: kept exactly as written
//! - `alpha(color, factor)`, `mix(a, b, factor)`: GTK color functions
//! - `name(...)`: any other function, with color references inside rewritten
//! - bare keywords and quoted strings
//!
//! The alternatives form an ordered choice. The order matters: `@name` must be
//! tried before a keyword, and `alpha(`/`mix(` before the generic function.

use crate::parser::stylesheet::{ArgToken, Channel, ColorValue};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit0, digit1, hex_digit1, multispace0, one_of},
    combinator::{cut, map, map_res, opt, recognize, verify},
    multi::many1,
    sequence::{delimited, pair, preceded, terminated, tuple},
};

/// Returns `true` for characters allowed in color, property and keyframes names.
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn is_keyword_char(c: char) -> bool {
    is_ident_char(c) || c == '.' || c == '%' || c == '!'
}

/// Parses a name: one or more of `A-Z`, `a-z`, `0-9`, `-` and `_`.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(is_ident_char)(input)
}

/// Parses a signed decimal number such as `1`, `-0.5` or `.25`.
fn parse_decimal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
    )))(input)
}

/// Parses a numeric channel: a signed decimal, optionally followed by `%`.
///
/// No range checking is done; `300` and `-5%` are both accepted. A number
/// too large to be represented as a finite `f64` is rejected.
pub fn parse_channel(input: &str) -> IResult<&str, Channel> {
    verify(
        map_res(
            pair(parse_decimal, opt(char('%'))),
            |(number, percent): (&str, Option<char>)| {
                number.parse::<f64>().map(|value| Channel {
                    raw: match percent {
                        Some(_) => format!("{}%", number),
                        None => number.to_string(),
                    },
                    value,
                    percent: percent.is_some(),
                })
            },
        ),
        |channel: &Channel| channel.value.is_finite(),
    )(input)
}

/// Deepest nesting of function calls inside one color value.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Parses a single color value at the start of `input`.
///
/// Leading whitespace is not skipped; callers position the input first.
/// Function calls nested deeper than [`MAX_NESTING_DEPTH`] are a hard failure.
pub fn parse_color_value(input: &str) -> IResult<&str, ColorValue> {
    parse_nested_color_value(input, 0)
}

fn parse_nested_color_value(input: &str, depth: usize) -> IResult<&str, ColorValue> {
    if depth > MAX_NESTING_DEPTH {
        log::warn!("color value nested deeper than {} calls", MAX_NESTING_DEPTH);
        return Err(nom::Err::Failure(nom::error::Error::new(
            input,
            nom::error::ErrorKind::TooLarge,
        )));
    }

    alt((
        parse_variable_ref,
        parse_gnome_variable_ref,
        parse_hex_literal,
        parse_rgb_literal,
        |i| parse_alpha_call(i, depth),
        |i| parse_mix_call(i, depth),
        |i| parse_function_call(i, depth),
        map(take_while1(is_keyword_char), |s: &str| {
            ColorValue::Keyword(s.to_string())
        }),
        map(parse_string_literal, |s: &str| {
            ColorValue::StringLiteral(s.to_string())
        }),
    ))(input)
}

/// `var(--name)`
fn parse_variable_ref(input: &str) -> IResult<&str, ColorValue> {
    map(
        delimited(
            tuple((tag("var("), multispace0, tag("--"))),
            parse_ident,
            pair(multispace0, char(')')),
        ),
        |name: &str| ColorValue::VariableRef(name.to_string()),
    )(input)
}

/// `@name`
fn parse_gnome_variable_ref(input: &str) -> IResult<&str, ColorValue> {
    map(preceded(char('@'), parse_ident), |name: &str| {
        log::trace!("rewriting @{} to var(--{})", name, name);
        ColorValue::GnomeVariableRef(name.to_string())
    })(input)
}

fn parse_hex_literal(input: &str) -> IResult<&str, ColorValue> {
    map(recognize(preceded(char('#'), hex_digit1)), |s: &str| {
        ColorValue::HexLiteral(s.to_string())
    })(input)
}

/// `rgb(r, g, b)` or `rgba(r, g, b, a)`, three or four channels either way.
fn parse_rgb_literal(input: &str) -> IResult<&str, ColorValue> {
    map(
        recognize(tuple((
            alt((tag("rgba("), tag("rgb("))),
            multispace0,
            parse_channel,
            parse_comma,
            parse_channel,
            parse_comma,
            parse_channel,
            opt(pair(parse_comma, parse_channel)),
            multispace0,
            char(')'),
        ))),
        |s: &str| ColorValue::RgbLiteral(s.to_string()),
    )(input)
}

fn parse_comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

/// Parses `, <color>` inside a GTK color function.
fn parse_color_argument(input: &str, depth: usize) -> IResult<&str, ColorValue> {
    let (input, _) = parse_comma(input)?;
    parse_nested_color_value(input, depth)
}

/// Parses `, <factor> )`, closing a GTK color function.
fn parse_factor_argument(input: &str) -> IResult<&str, Channel> {
    delimited(
        parse_comma,
        parse_channel,
        pair(multispace0, char(')')),
    )(input)
}

/// `alpha(color, factor)`
///
/// Once `alpha(` has matched, any other argument shape is a hard failure.
fn parse_alpha_call(input: &str, depth: usize) -> IResult<&str, ColorValue> {
    let (input, _) = tag("alpha(")(input)?;
    let (input, (color, alpha)) = cut(pair(
        preceded(multispace0, |i| parse_nested_color_value(i, depth + 1)),
        parse_factor_argument,
    ))(input)?;

    log::trace!("rewriting alpha() with factor {}", alpha.raw);
    Ok((
        input,
        ColorValue::AlphaCall {
            color: Box::new(color),
            alpha,
        },
    ))
}

/// `mix(first, second, factor)`
///
/// Only matches at the start of a value token, so the `mix(` inside a
/// standard `color-mix(` is never taken for the GTK function.
fn parse_mix_call(input: &str, depth: usize) -> IResult<&str, ColorValue> {
    let (input, _) = tag("mix(")(input)?;
    let (input, (first, second, alpha)) = cut(tuple((
        preceded(multispace0, |i| parse_nested_color_value(i, depth + 1)),
        |i| parse_color_argument(i, depth + 1),
        parse_factor_argument,
    )))(input)?;

    log::trace!("rewriting mix() with factor {}", alpha.raw);
    Ok((
        input,
        ColorValue::MixCall {
            first: Box::new(first),
            second: Box::new(second),
            alpha,
        },
    ))
}

/// Any other `name(args)`, e.g. `linear-gradient(...)` or `color-mix(...)`.
fn parse_function_call(input: &str, depth: usize) -> IResult<&str, ColorValue> {
    let (input, name) = recognize(terminated(parse_ident, char('(')))(input)?;
    let (input, args) = terminated(
        many1(preceded(multispace0, |i| parse_arg_token(i, depth + 1))),
        pair(multispace0, char(')')),
    )(input)?;

    Ok((
        input,
        ColorValue::GenericFunctionCall {
            name: name.to_string(),
            args,
        },
    ))
}

fn parse_arg_token(input: &str, depth: usize) -> IResult<&str, ArgToken> {
    alt((
        map(|i| parse_nested_color_value(i, depth), ArgToken::Color),
        map(one_of("/,%"), ArgToken::Separator),
    ))(input)
}

/// `"..."` or `'...'`, quotes included. A backslash escapes the next character.
pub(crate) fn parse_string_literal(input: &str) -> IResult<&str, &str> {
    let quote = match input.chars().next() {
        Some(c @ ('"' | '\'')) => c,
        _ => {
            return Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Char,
            )));
        }
    };

    let mut escaped = false;
    for (i, c) in input.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Ok((&input[i + 1..], &input[..i + 1]));
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Eof,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_keeps_percent_sign() {
        let (rest, channel) = parse_channel("40%)").unwrap();
        assert_eq!(rest, ")");
        assert_eq!(channel.raw, "40%");
        assert_eq!(channel.as_percentage(), 40.0);
    }

    #[test]
    fn channel_accepts_leading_dot_and_sign() {
        let (_, channel) = parse_channel("-.5").unwrap();
        assert_eq!(channel.value, -0.5);
        assert!(!channel.percent);
    }

    #[test]
    fn channel_rejects_overflowing_number() {
        let huge = "9".repeat(400);
        assert!(parse_channel(&huge).is_err());
        assert!(parse_channel(&format!("{}%", huge)).is_err());
    }

    #[test]
    fn nesting_at_limit_is_accepted() {
        let source = format!(
            "{}red{}",
            "alpha(".repeat(MAX_NESTING_DEPTH),
            ", 1)".repeat(MAX_NESTING_DEPTH)
        );
        let (rest, _) = parse_color_value(&source).unwrap();
        assert_eq!(rest, "");
    }

    #[test]
    fn nesting_past_limit_fails_hard() {
        let source = format!("{}red", "rgba(".repeat(MAX_NESTING_DEPTH + 1));
        assert!(matches!(
            parse_color_value(&source),
            Err(nom::Err::Failure(e)) if e.code == nom::error::ErrorKind::TooLarge
        ));
    }

    #[test]
    fn string_with_escaped_quote() {
        let (rest, s) = parse_string_literal(r#""a\"b" x"#).unwrap();
        assert_eq!(s, r#""a\"b""#);
        assert_eq!(rest, " x");
    }

    #[test]
    fn ident_rejects_empty() {
        assert!(parse_ident("(").is_err());
    }
}
