//! Selector engine
//!
//! Supports selector lists of compound selectors made of an optional
//! type selector and attribute selectors (`[attr]`, `[attr=value]`,
//! `[attr="value" i]`). Combinators and pseudo-classes are rejected.
//! Tokenizing (escapes, strings, blocks) is done by `cssparser`.

use cssparser::{BasicParseErrorKind, ParseError, ParseErrorKind, Parser, ParserInput, Token};

use crate::{DomTree, NodeId};

/// Attributes whose values HTML matches ASCII case-insensitively in
/// attribute selectors
const CASE_INSENSITIVE_ATTRIBUTES: &[&str] = &[
    "align", "charset", "dir", "enctype", "lang", "method", "shape", "type", "valign",
];

/// Selector parse errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Unexpected token {token} at column {column}")]
    UnexpectedToken { token: String, column: u32 },

    #[error("Unterminated string at column {column}")]
    UnterminatedString { column: u32 },

    #[error("Unexpected end of selector")]
    UnexpectedEnd,

    #[error("Unsupported selector syntax: {0}")]
    Unsupported(String),
}

impl SelectorError {
    fn from_parse(err: ParseError<'_, SelectorError>) -> Self {
        let column = err.location.column;
        match err.kind {
            ParseErrorKind::Custom(err) => err,
            ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => Self::UnexpectedEnd,
            ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(Token::BadString(_))) => {
                Self::UnterminatedString { column }
            }
            ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => Self::UnexpectedToken {
                token: format!("{token:?}"),
                column,
            },
            ParseErrorKind::Basic(other) => Self::UnexpectedToken {
                token: format!("{other:?}"),
                column,
            },
        }
    }
}

type SelectorParseError<'i> = ParseError<'i, SelectorError>;

/// One attribute condition
#[derive(Debug, Clone, PartialEq, Eq)]
struct AttributeSelector {
    name: String,
    value: Option<String>,
    /// `Some(true)` for the `i` flag, `Some(false)` for `s`
    ignore_case: Option<bool>,
}

impl AttributeSelector {
    fn matches(&self, actual: &str) -> bool {
        let Some(wanted) = &self.value else {
            return true;
        };
        let ignore_case = self
            .ignore_case
            .unwrap_or_else(|| CASE_INSENSITIVE_ATTRIBUTES.contains(&self.name.as_str()));
        if ignore_case {
            wanted.eq_ignore_ascii_case(actual)
        } else {
            wanted == actual
        }
    }
}

/// A compound selector: `tag[a][b="c"]`
#[derive(Debug, Clone, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    attrs: Vec<AttributeSelector>,
}

/// Parsed selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Compound>,
}

fn unsupported<'i>(input: &Parser<'i, '_>, token: &Token<'i>) -> SelectorParseError<'i> {
    let syntax = match token {
        Token::Colon => ":".to_string(),
        Token::Hash(_) | Token::IDHash(_) => "#".to_string(),
        Token::Delim(c @ ('.' | '>' | '+' | '~' | '|')) => c.to_string(),
        Token::Function(name) => format!("{}()", &**name),
        other => return input.new_unexpected_token_error(other.clone()),
    };
    input.new_custom_error(SelectorError::Unsupported(syntax))
}

fn parse_attribute<'i>(input: &mut Parser<'i, '_>) -> Result<AttributeSelector, SelectorParseError<'i>> {
    let name = input.expect_ident()?.to_ascii_lowercase();
    let value = match input.next().cloned() {
        Err(_) => None,
        Ok(Token::Delim('=')) => Some(input.expect_ident_or_string()?.to_string()),
        Ok(
            Token::IncludeMatch
            | Token::DashMatch
            | Token::PrefixMatch
            | Token::SuffixMatch
            | Token::SubstringMatch,
        ) => {
            return Err(input.new_custom_error(SelectorError::Unsupported(format!("[{name} operator]"))));
        }
        Ok(token) => return Err(input.new_unexpected_token_error(token)),
    };
    let ignore_case = match (&value, input.next().cloned()) {
        (_, Err(_)) => None,
        (Some(_), Ok(Token::Ident(flag))) if flag.eq_ignore_ascii_case("i") => Some(true),
        (Some(_), Ok(Token::Ident(flag))) if flag.eq_ignore_ascii_case("s") => Some(false),
        (_, Ok(token)) => return Err(input.new_unexpected_token_error(token)),
    };
    input.expect_exhausted()?;
    Ok(AttributeSelector { name, value, ignore_case })
}

fn parse_compound<'i>(input: &mut Parser<'i, '_>) -> Result<Compound, SelectorParseError<'i>> {
    input.skip_whitespace();
    let mut universal = false;
    let mut tag = None;
    let mut attrs = Vec::new();
    loop {
        let at_start = !universal && tag.is_none() && attrs.is_empty();
        let Ok(token) = input.next_including_whitespace().cloned() else {
            break;
        };
        match token {
            Token::Ident(name) if at_start => tag = Some(name.to_ascii_lowercase()),
            Token::Delim('*') if at_start => universal = true,
            Token::SquareBracketBlock => attrs.push(input.parse_nested_block(parse_attribute)?),
            Token::WhiteSpace(_) => {
                if input.is_exhausted() {
                    break;
                }
                return Err(input.new_custom_error(SelectorError::Unsupported("combinators".into())));
            }
            other => return Err(unsupported(input, &other)),
        }
    }
    if !universal && tag.is_none() && attrs.is_empty() {
        return Err(input.new_error(BasicParseErrorKind::EndOfInput));
    }
    Ok(Compound { tag, attrs })
}

impl Selector {
    /// Parse a selector list
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        if source.trim().is_empty() {
            return Err(SelectorError::Empty);
        }
        let mut input = ParserInput::new(source);
        let mut parser = Parser::new(&mut input);
        let compounds = parser
            .parse_comma_separated(parse_compound)
            .map_err(SelectorError::from_parse)?;
        Ok(Self { compounds })
    }

    /// Whether `id` matches any compound in the list
    pub fn matches(&self, tree: &DomTree, id: NodeId) -> bool {
        let Some(elem) = tree.element(id) else {
            return false;
        };
        self.compounds.iter().any(|compound| {
            compound.tag.as_deref().is_none_or(|tag| tag == elem.local_name)
                && compound
                    .attrs
                    .iter()
                    .all(|attr| elem.get_attr(&attr.name).is_some_and(|actual| attr.matches(actual)))
        })
    }
}

impl DomTree {
    /// `querySelectorAll` over the descendants of `scope`
    pub fn query_selector_all(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants(scope)
            .into_iter()
            .filter(|&id| selector.matches(self, id))
            .collect())
    }
}

/// `CSS.escape`
pub fn css_escape(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len());
    for (index, &c) in chars.iter().enumerate() {
        let code = c as u32;
        if c == '\0' {
            out.push('\u{FFFD}');
        } else if (0x01..=0x1F).contains(&code)
            || code == 0x7F
            || (index == 0 && c.is_ascii_digit())
            || (index == 1 && c.is_ascii_digit() && chars[0] == '-')
        {
            out.push_str(&format!("\\{code:x} "));
        } else if index == 0 && c == '-' && chars.len() == 1 {
            out.push_str("\\-");
        } else if code >= 0x80 || c == '-' || c == '_' || c.is_ascii_alphanumeric() {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}
