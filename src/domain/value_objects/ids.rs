use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Raised when a path segment is not a syntactically valid record id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformatted id: {raw}")]
pub struct MalformedId {
    pub raw: String,
}

/// Store-assigned identifier of a person record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PersonId(pub Uuid);

impl PersonId {
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id taken from a request path or the command line.
    pub fn parse(raw: &str) -> Result<Self, MalformedId> {
        Uuid::parse_str(raw.trim()).map(Self).map_err(|_| MalformedId {
            raw: raw.to_string(),
        })
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
