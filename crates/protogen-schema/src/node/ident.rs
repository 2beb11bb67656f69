use crate::prelude::*;
use derive_more::Display;

///
/// Identifier
///
/// A single proto identifier: a letter followed by letters, digits or
/// underscores. Construction is the only entry point; an `Identifier`
/// that exists is valid.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Result<Self, SchemaError> {
        let name = name.into();
        if is_valid_segment(&name) {
            Ok(Self(name))
        } else {
            Err(SchemaError::MalformedIdentifier(name))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

///
/// FullIdentifier
///
/// A dot-separated identifier path, used for package names and for the
/// qualified names of nested messages.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct FullIdentifier(String);

impl FullIdentifier {
    pub fn new(path: impl Into<String>) -> Result<Self, SchemaError> {
        let path = path.into();
        if !path.is_empty() && path.split('.').all(is_valid_segment) {
            Ok(Self(path))
        } else {
            Err(SchemaError::MalformedFullIdentifier(path))
        }
    }

    /// Join already-validated segments without re-checking them.
    pub(crate) fn from_validated(path: String) -> Self {
        Self(path)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The dot-separated segments of the path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl From<Identifier> for FullIdentifier {
    fn from(ident: Identifier) -> Self {
        Self(ident.0)
    }
}

fn is_valid_segment(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
        _ => false,
    }
}
