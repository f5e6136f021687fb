use thiserror::Error;

use crate::core::types::{EntityId, EntityKind};

/// Fatal errors: broken invariants, bad configuration, failed collaborators.
#[derive(Error, Debug)]
pub enum RogueError {
    #[error("Entity not found: {0:?}")]
    EntityNotFound(EntityId),

    #[error("Entity {0:?} is not an actor")]
    NotAnActor(EntityId),

    #[error("Cannot generate a name for entity kind {0:?}")]
    InvalidEntityKind(EntityKind),

    #[error("Generated identity for {0} claims both genders")]
    IdentityConflict(String),

    #[error("Position ({0}, {1}) is outside the map")]
    OutOfBounds(i32, i32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Text generation error: {0}")]
    TextGeneration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RogueError>;

/// Recoverable action failure. The reason is shown to the player when the
/// action came from direct input; AI callers drop it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct Impossible(pub String);

impl Impossible {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

pub type ActionResult = std::result::Result<(), Impossible>;
