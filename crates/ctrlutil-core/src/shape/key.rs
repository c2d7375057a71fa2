//! Property keys and their literalness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The primitive category a property key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    String,
    Number,
    Symbol,
}

impl KeyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyKind::String => "string",
            KeyKind::Number => "number",
            KeyKind::Symbol => "symbol",
        }
    }
}

/// A field name in a [`Shape`](super::Shape).
///
/// `Str`, `Num` and `Symbol` name exactly one property (literal keys).
/// `Index` stands for every key of a kind, like an index signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PropertyKey {
    Str(String),
    Num(i64),
    /// A unique symbol, identified by its description
    Symbol(String),
    Index(KeyKind),
}

impl PropertyKey {
    pub fn kind(&self) -> KeyKind {
        match self {
            PropertyKey::Str(_) => KeyKind::String,
            PropertyKey::Num(_) => KeyKind::Number,
            PropertyKey::Symbol(_) => KeyKind::Symbol,
            PropertyKey::Index(kind) => *kind,
        }
    }

    pub fn is_literal(&self) -> bool {
        !matches!(self, PropertyKey::Index(_))
    }

    /// Whether `other` is one of the keys this key denotes.
    ///
    /// A literal key denotes only itself; an index key denotes every key of
    /// its kind, literal or not.
    pub fn covers(&self, other: &PropertyKey) -> bool {
        match self {
            PropertyKey::Index(kind) => other.kind() == *kind,
            literal => literal == other,
        }
    }

    /// Key of a JSON object member. Canonical integers become `Num`.
    pub fn from_json_key(key: &str) -> Self {
        PropertyKey::Str(key.to_string()).canonical()
    }

    /// The form this key takes inside a [`Shape`](super::Shape).
    ///
    /// A `Str` spelling a canonical integer (`"0"`, `"-3"`, not `"007"`)
    /// names the same member as the `Num` key and becomes it. Every other
    /// key is returned unchanged.
    pub fn canonical(self) -> Self {
        match self {
            PropertyKey::Str(name) => match name.parse::<i64>() {
                Ok(n) if n.to_string() == name => PropertyKey::Num(n),
                _ => PropertyKey::Str(name),
            },
            other => other,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Str(name) => write!(f, "{name}"),
            PropertyKey::Num(n) => write!(f, "{n}"),
            PropertyKey::Symbol(desc) => write!(f, "[Symbol({desc})]"),
            PropertyKey::Index(kind) => write!(f, "[{}]", kind.as_str()),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        PropertyKey::Str(name.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        PropertyKey::Str(name)
    }
}

impl From<i64> for PropertyKey {
    fn from(n: i64) -> Self {
        PropertyKey::Num(n)
    }
}

impl From<KeyKind> for PropertyKey {
    fn from(kind: KeyKind) -> Self {
        PropertyKey::Index(kind)
    }
}

/// Literalness of a union of keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literalness {
    /// Every member is a literal key
    Literal,
    /// No member is a literal key
    NonLiteral,
    /// Both kinds present
    Mixed,
}

impl Literalness {
    /// Classify a union of keys. The empty union has no literalness.
    pub fn of<'a>(keys: impl IntoIterator<Item = &'a PropertyKey>) -> Option<Self> {
        let (mut literal, mut non_literal) = (false, false);
        for key in keys {
            if key.is_literal() {
                literal = true;
            } else {
                non_literal = true;
            }
        }
        match (literal, non_literal) {
            (true, false) => Some(Literalness::Literal),
            (false, true) => Some(Literalness::NonLiteral),
            (true, true) => Some(Literalness::Mixed),
            (false, false) => None,
        }
    }
}
