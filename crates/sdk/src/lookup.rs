//! Outcome of a single upstream lookup.

use serde::{Serialize, Serializer};

/// Either a fully adapted response or nothing at all.
///
/// Every failure between sending the request and validating the body
/// collapses into [`Lookup::Absent`]; the cause is logged where it happens.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    Absent,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Absent => None,
        }
    }
}

/// Absent serializes as `null`.
impl<T: Serialize> Serialize for Lookup<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Found(value) => value.serialize(serializer),
            Self::Absent => serializer.serialize_none(),
        }
    }
}
