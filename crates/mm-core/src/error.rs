use crate::id::IdeaId;
use thiserror::Error;

/// Failures surfaced by the idea tree, configuration, and storage layers.
///
/// Geometry and grid queries never fail; they answer `None` instead.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("no idea with id {0}")]
    UnknownIdea(IdeaId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid style value {input:?}: {reason}")]
    InvalidStyle { input: String, reason: String },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("failed to encode map: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    #[error("failed to decode map: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}

pub type Result<T, E = MapError> = std::result::Result<T, E>;
