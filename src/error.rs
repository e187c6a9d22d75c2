//! Error types for chainsort.

/// Alias for Results returning [`SortError`].
pub type Result<T> = std::result::Result<T, SortError>;

/// A rejected sort configuration.
///
/// Every variant is raised before the first comparison, so the records
/// handed to the failing call are left in their original order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The key list or the direction list has no entries.
    #[error("sort criteria must not be empty (keys: {keys}, directions: {directions})")]
    EmptyCriteria { keys: usize, directions: usize },

    /// Each key must be matched with exactly one direction.
    #[error(
        "each sort key must be matched with a direction (keys: {keys}, directions: {directions})"
    )]
    LengthMismatch { keys: usize, directions: usize },

    /// A key name does not match any registered field of the record type.
    #[error("field \"{0}\" not found")]
    UnknownField(String),
}
