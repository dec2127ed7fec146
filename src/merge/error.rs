//! Error types for the merge engine.

use crate::models::Action;

/// Errors surfaced by the merge engine and its projection tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// The projection table has no keysym for this action at this position.
    ///
    /// This signals a gap in the fixture tables, not a runtime fault; the
    /// generated suite would be incomplete, so generation stops here rather
    /// than defaulting to a value that would corrupt a test oracle.
    #[error("no keysym mapping for {action} at slot {index}, level {level}")]
    UnmappedAction {
        /// The action that could not be projected.
        action: Action,
        /// Slot index within the level.
        index: usize,
        /// Level index within the entry.
        level: usize,
    },

    /// An unrecognized merge mode name was requested.
    #[error("unknown merge mode: {0:?}")]
    UnknownMode(String),
}

/// Convenience alias for merge-engine results.
pub type MergeResult<T> = Result<T, MergeError>;
