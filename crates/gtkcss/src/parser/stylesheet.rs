//! Data model produced by the grammar.
//!
//! Every production yields one of these values; [`crate::render`] turns them
//! into web CSS text. Values are built once per match and never mutated.

/// A numeric channel such as `0.25`, `-1` or `40%`.
///
/// `raw` keeps the source spelling for pass-through; `value` is the parsed
/// number used by the `alpha()`/`mix()` rewrites.
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    pub raw: String,
    pub value: f64,
    pub percent: bool,
}

impl Channel {
    /// The channel expressed as a percentage.
    ///
    /// Fractions are multiplied by 100; a value already written as a
    /// percentage is taken as-is.
    pub fn as_percentage(&self) -> f64 {
        if self.percent {
            self.value
        } else {
            self.value * 100.0
        }
    }
}

/// Every syntactic form a color value can take.
///
/// Alternatives are tried in declaration order and the first match wins.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    /// Standard `var(--name)`.
    VariableRef(String),
    /// GTK `@name`, rewritten to `var(--name)`.
    GnomeVariableRef(String),
    /// `#` followed by hex digits, including the `#`.
    HexLiteral(String),
    /// `rgb(...)` / `rgba(...)` exactly as written.
    RgbLiteral(String),
    /// GTK `alpha(color, factor)`.
    AlphaCall {
        color: Box<ColorValue>,
        alpha: Channel,
    },
    /// GTK `mix(first, second, factor)`.
    MixCall {
        first: Box<ColorValue>,
        second: Box<ColorValue>,
        alpha: Channel,
    },
    /// Any other `name(...)`; `name` includes the opening parenthesis.
    GenericFunctionCall { name: String, args: Vec<ArgToken> },
    /// Bare word such as `red`, `solid` or `0.5`.
    Keyword(String),
    /// Quoted string, quotes included.
    StringLiteral(String),
}

impl ColorValue {
    /// Returns `true` if this value, or anything nested in it, uses GTK-only syntax.
    pub fn is_dialect(&self) -> bool {
        match self {
            ColorValue::GnomeVariableRef(_)
            | ColorValue::AlphaCall { .. }
            | ColorValue::MixCall { .. } => true,
            ColorValue::GenericFunctionCall { args, .. } => args.iter().any(|arg| match arg {
                ArgToken::Color(value) => value.is_dialect(),
                ArgToken::Separator(_) => false,
            }),
            _ => false,
        }
    }
}

/// One token of a generic function's argument list.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgToken {
    Color(ColorValue),
    /// `/`, `,` or `%`.
    Separator(char),
}

/// One token of a declaration value.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueToken {
    Color(ColorValue),
    /// `/`, `,` or `|`.
    Separator(char),
}

/// `@define-color NAME VALUE;`
#[derive(Clone, Debug, PartialEq)]
pub struct ColorDefinition {
    pub name: String,
    pub value: ColorValue,
}

/// A `name: value` property declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub value: Vec<ValueToken>,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: Vec<ValueToken>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Returns `true` if any token of the value uses GTK-only syntax.
    pub fn is_dialect(&self) -> bool {
        self.value.iter().any(|token| match token {
            ValueToken::Color(value) => value.is_dialect(),
            ValueToken::Separator(_) => false,
        })
    }
}

/// A selector followed by a block of declarations.
#[derive(Clone, Debug, PartialEq)]
pub struct CssRule {
    /// The selector text, trimmed but otherwise verbatim.
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

/// Header of a keyframe sub-block.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyframeSelector {
    From,
    To,
    /// A percentage offset such as `50%`, kept as written.
    Percent(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeBlock {
    pub selector: KeyframeSelector,
    pub declarations: Vec<Declaration>,
}

/// `@keyframes NAME { from { ... } to { ... } }`
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframesRule {
    pub name: String,
    pub blocks: Vec<KeyframeBlock>,
}

/// A top-level construct of a document.
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    ColorDefinition(ColorDefinition),
    Css(CssRule),
    Keyframes(KeyframesRule),
    /// A `/* ... */` span, delimiters included.
    Comment(String),
}

/// A whole parsed stylesheet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub rules: Vec<Rule>,
}

impl Document {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Number of `@define-color` rules in the document.
    pub fn color_definitions(&self) -> usize {
        self.rules
            .iter()
            .filter(|r| matches!(r, Rule::ColorDefinition(_)))
            .count()
    }

    /// Number of color definitions and declarations whose value needed rewriting.
    pub fn dialect_values(&self) -> usize {
        self.rules
            .iter()
            .map(|rule| match rule {
                Rule::ColorDefinition(def) => usize::from(def.value.is_dialect()),
                Rule::Css(css) => css.declarations.iter().filter(|d| d.is_dialect()).count(),
                Rule::Keyframes(keyframes) => keyframes
                    .blocks
                    .iter()
                    .flat_map(|block| &block.declarations)
                    .filter(|d| d.is_dialect())
                    .count(),
                Rule::Comment(_) => 0,
            })
            .sum()
    }
}
