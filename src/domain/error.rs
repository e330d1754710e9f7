//! Domain-level errors (no external dependencies)

use std::fmt;

use thiserror::Error;

/// Which part of a parameter declaration collided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    LongName,
    ShortAlias,
    Reserved,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictKind::LongName => write!(f, "long name"),
            ConflictKind::ShortAlias => write!(f, "short alias"),
            ConflictKind::Reserved => write!(f, "reserved name"),
        }
    }
}

/// Domain errors are schema declaration mistakes.
/// They surface while the registry is being built, before any user input is read.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("verb already registered: {0}")]
    DuplicateVerb(String),

    #[error("schema conflict in verb '{verb}': {kind} '{name}' is already taken")]
    SchemaConflict {
        verb: String,
        kind: ConflictKind,
        name: String,
    },

    #[error("invalid parameter '{name}' in verb '{verb}': {reason}")]
    InvalidParameter {
        verb: String,
        name: String,
        reason: String,
    },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
