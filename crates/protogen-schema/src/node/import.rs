use crate::prelude::*;
use std::ops::Not;

///
/// Import
///
/// An import of another proto file, optionally re-exported to importers
/// of this one.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Import {
    path: String,

    #[serde(skip_serializing_if = "Not::not")]
    public: bool,
}

impl Import {
    /// A plain import.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            public: false,
        }
    }

    /// A public import.
    #[must_use]
    pub fn public(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            public: true,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn is_public(&self) -> bool {
        self.public
    }
}
