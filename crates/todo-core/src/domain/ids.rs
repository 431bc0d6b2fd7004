//! Domain identifier.
//!
//! `TodoId` wraps a ULID (Universally Unique Lexicographically
//! Sortable Identifier):
//! - sortable by creation time (the timestamp leads the encoding)
//! - generatable without coordination between nodes
//! - 128-bit, UUID-sized

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

use crate::error::TodoError;

/// Opaque unique identifier for a [`Todo`](crate::domain::Todo).
///
/// Assigned once at creation and immutable thereafter. Serializes as
/// the canonical 26-character ULID string, which is also the form the
/// presentation layer sends back; `FromStr` is the text boundary.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Ulid);

impl TodoId {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for TodoId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TodoId {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ulid = Ulid::from_string(s)?;
        Ok(Self(ulid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_round_trip() {
        let id = TodoId::from(Ulid::new());
        let parsed: TodoId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn rejects_malformed_text() {
        let err = "not-a-ulid".parse::<TodoId>().unwrap_err();
        assert!(matches!(err, TodoError::InvalidId(_)));
    }

    #[test]
    fn serializes_as_the_canonical_string() {
        let id = TodoId::from(Ulid::from_string("01ARZ3NDEKTSV4RRFFQ69G5FAV").unwrap());
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!("01ARZ3NDEKTSV4RRFFQ69G5FAV"));
    }
}
