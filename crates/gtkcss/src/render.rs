//! Rendering of parsed GTK CSS as standard web CSS.
//!
//! Each data-model type implements [`fmt::Display`], producing the rewritten
//! text for the span it was parsed from. Rendering never looks at the source
//! text again; it only combines the output of inner values.
//!
//! Value tokens (including `,`, `/` and `|`) are joined with a single space,
//! so `a, b` is emitted as `a , b`. The result is still valid CSS.

use crate::parser::stylesheet::{
    ArgToken, Channel, ColorDefinition, ColorValue, CssRule, Declaration, Document,
    KeyframeBlock, KeyframeSelector, KeyframesRule, Rule, ValueToken,
};
use std::fmt::{self, Write};

const INDENT: &str = "    ";

/// Formats a GTK blend factor as a CSS percentage, without the `%` sign.
///
/// The value is rounded to six decimal places and printed without trailing
/// zeros, so `0.1` becomes `10` and `0.333` becomes `33.3`.
pub fn format_percentage(channel: &Channel) -> String {
    let rounded = (channel.as_percentage() * 1e6).round() / 1e6;
    // Avoid printing `-0`.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}

fn join_tokens<T: fmt::Display>(tokens: &[T]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::VariableRef(name) | ColorValue::GnomeVariableRef(name) => {
                write!(f, "var(--{})", name)
            }
            ColorValue::HexLiteral(raw)
            | ColorValue::RgbLiteral(raw)
            | ColorValue::Keyword(raw)
            | ColorValue::StringLiteral(raw) => f.write_str(raw),
            ColorValue::AlphaCall { color, alpha } => write!(
                f,
                "color-mix(in srgb, {} {}%, transparent)",
                color,
                format_percentage(alpha)
            ),
            ColorValue::MixCall {
                first,
                second,
                alpha,
            } => write!(
                f,
                "color-mix(in srgb, {} {}%, {})",
                first,
                format_percentage(alpha),
                second
            ),
            ColorValue::GenericFunctionCall { name, args } => {
                write!(f, "{}{})", name, join_tokens(args))
            }
        }
    }
}

impl fmt::Display for ArgToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgToken::Color(value) => write!(f, "{}", value),
            ArgToken::Separator(c) => f.write_char(*c),
        }
    }
}

impl fmt::Display for ValueToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueToken::Color(value) => write!(f, "{}", value),
            ValueToken::Separator(c) => f.write_char(*c),
        }
    }
}

impl fmt::Display for ColorDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":root {{ --{}: {}; }}", self.name, self.value)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, join_tokens(&self.value))
    }
}

/// Renders a declaration list, one `;`-terminated line per declaration.
///
/// `depth` is the nesting level; each level indents by four spaces.
pub fn render_declarations(declarations: &[Declaration], depth: usize) -> String {
    let indent = INDENT.repeat(depth);
    declarations
        .iter()
        .map(|d| format!("{}{};\n", indent, d))
        .collect()
}

impl fmt::Display for CssRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{\n{}}}",
            self.selector,
            render_declarations(&self.declarations, 1)
        )
    }
}

impl fmt::Display for KeyframeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyframeSelector::From => f.write_str("from"),
            KeyframeSelector::To => f.write_str("to"),
            KeyframeSelector::Percent(raw) => f.write_str(raw),
        }
    }
}

impl fmt::Display for KeyframeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{indent}{} {{\n{}{indent}}}\n",
            self.selector,
            render_declarations(&self.declarations, 2),
            indent = INDENT
        )
    }
}

impl fmt::Display for KeyframesRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@keyframes {} {{", self.name)?;
        for block in &self.blocks {
            write!(f, "{}", block)?;
        }
        f.write_char('}')
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::ColorDefinition(definition) => write!(f, "{}", definition),
            Rule::Css(rule) => write!(f, "{}", rule),
            Rule::Keyframes(rule) => write!(f, "{}", rule),
            Rule::Comment(raw) => f.write_str(raw),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{}", rule)?;
        }
        Ok(())
    }
}
