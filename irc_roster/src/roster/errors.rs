//! Defines errors returned by the roster

use thiserror::Error;

/// Errors returned by [`Roster`](super::Roster) operations.
///
/// Events naming users or channels that aren't tracked are not errors; the
/// protocol stream can legitimately refer to state that was never seen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Roster is not tracking")]
    Inactive,
}

/// Convenience definition of a Result type used by the roster.
pub type RosterResult<T> = std::result::Result<T, RosterError>;
