//! Opaque actor reference.
//!
//! The host assigns its own identifiers to acting entities; we never inspect
//! them beyond equality and hashing, so this is a validated string newtype
//! rather than a UUID.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Host-assigned identifier of the acting entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorRef(String);

impl ActorRef {
    /// Create an actor ref, rejecting empty identifiers
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::validation("actor ref cannot be empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
