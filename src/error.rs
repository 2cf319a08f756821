//! # Engine Errors
//!
//! Failure modes fall into two camps: configuration errors that must abort
//! session setup (duplicate or malformed cell names, unreadable layout
//! files), and consistency violations that must abort a running session
//! (the rule oracle refusing a move the local generator offered).
//!
//! Lookup misses are not errors; they are `Option` returns checked by
//! every caller. Malformed UI-driven interactions (confirming with nothing
//! selected) are silent no-ops handled in the interaction layer.

use thiserror::Error;

/// Errors produced by board construction, layout loading, and move
/// application.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Two declared cells share a name. The name index would silently drop
    /// one of them, so this is fatal at load time.
    #[error("duplicate cell name '{0}' in board layout")]
    DuplicateCell(String),

    /// A declared cell name does not parse as a grid coordinate.
    #[error("malformed cell name '{0}' in board layout")]
    MalformedCellName(String),

    /// The external rule oracle refused a move the local generator offered.
    /// Board and oracle state must never diverge, so the session is over.
    #[error("board and rule oracle diverged: {0}")]
    OracleDivergence(String),

    /// A layout file could not be read.
    #[error("failed to read layout file")]
    LayoutIo(#[from] std::io::Error),

    /// A layout file could not be parsed.
    #[error("invalid layout file")]
    LayoutFormat(#[from] serde_json::Error),
}
