use std::fmt;

use thiserror::Error;

use crate::ids::{EntityId, EntityKind};

/// A caller-supplied handle that did not resolve to a node of the expected kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingEntity {
    pub kind: EntityKind,
    pub name: String,
}

impl fmt::Display for MissingEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with name {}", self.kind.label(), self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridGraphError {
    #[error("{kind} {0} already exists", kind = .0.kind().label())]
    DuplicateEntity(EntityId),
    #[error("can't find {}", join(.0))]
    EntityNotFound(Vec<MissingEntity>),
    #[error("{0} already connected to {1}")]
    AlreadyConnected(EntityId, EntityId),
    #[error("{0} already disconnected from {1}")]
    AlreadyDisconnected(EntityId, EntityId),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl GridGraphError {
    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        GridGraphError::InvalidInput(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        GridGraphError::Serialization(msg.into())
    }

    /// Handles that failed to resolve; empty for every other variant.
    pub fn missing(&self) -> &[MissingEntity] {
        match self {
            GridGraphError::EntityNotFound(missing) => missing,
            _ => &[],
        }
    }
}

fn join(missing: &[MissingEntity]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" and ")
}
