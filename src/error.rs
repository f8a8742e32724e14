//! Error types for engine construction
//!
//! Only building the engine can fail. Once constructed, every interaction
//! entry point swallows its own "nothing to do" cases (no surface hit, empty
//! registry, degenerate anchors) instead of surfacing them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving configuration and the placeable template
#[derive(Error, Debug)]
pub enum DiceError {
    /// The OBJ asset loaded, but no model carries the requested name
    #[error("template node '{node_name}' not found in {}", path.display())]
    TemplateNotFound { path: PathBuf, node_name: String },

    /// The OBJ asset could not be read or parsed
    #[error("failed to load template asset: {0}")]
    AssetLoad(#[from] tobj::LoadError),

    /// The resolved template has no vertices to place
    #[error("template '{0}' has no geometry")]
    EmptyTemplate(String),

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DiceError>;

impl DiceError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
