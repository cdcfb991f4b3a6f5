use serde::{Deserialize, Serialize};

use crate::normalizer::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    Email,
    HashedEmail,
    Username,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Email => "email",
            QueryKind::HashedEmail => "hashed_email",
            QueryKind::Username => "username",
        }
    }

    /// Label shown in the `Type` field of a rendered document.
    pub fn label(&self) -> &'static str {
        match self {
            QueryKind::Email => "Email",
            QueryKind::HashedEmail => "Hashed Email",
            QueryKind::Username => "Username",
        }
    }
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single lookup request. The normalized form is computed on construction
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeakQuery {
    kind: QueryKind,
    raw_input: String,
    normalized: String,
}

impl LeakQuery {
    pub fn new(kind: QueryKind, raw_input: impl Into<String>) -> Self {
        let raw_input = raw_input.into();
        let normalized = normalize(kind, &raw_input);
        Self {
            kind,
            raw_input,
            normalized,
        }
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}
