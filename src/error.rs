//! Error types for command registration and resolution.

use thiserror::Error;

use crate::command::Argument;

/// Convenience type alias for Results using [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors reported by [`CommandMap`](crate::CommandMap) operations.
///
/// Completion never produces errors; unmatched input simply yields no
/// candidates.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A command with this name is already registered in the map.
    #[error("command {0:?} is already registered")]
    DuplicateCommand(String),

    /// No command matched the token sequence.
    ///
    /// Carries the complete original token sequence rather than the partial
    /// path reached, so callers can render a clear "unrecognized command"
    /// message no matter how deep resolution got.
    #[error("no matching command for [{}]", .0.join(" "))]
    NoMatchingCommand(Vec<Argument>),

    /// A resolved command failed; the underlying error passes through
    /// unchanged.
    #[error(transparent)]
    Exec(#[from] anyhow::Error),
}
