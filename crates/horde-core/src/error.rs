//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `HordeError` via `From` impls, or keep them separate and wrap `HordeError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::{AgentId, ColliderId};

/// The top-level error type for `horde-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HordeError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("collider {0} not mapped to any agent")]
    ColliderNotFound(ColliderId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `horde-*` crates.
pub type HordeResult<T> = Result<T, HordeError>;
