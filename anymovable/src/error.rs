//! Errors raised by the container itself.
//!
//! Failures of the stored value’s own constructor are never wrapped in [`Error`]: they are handed back to the caller
//! as-is by [`AnyMovable::try_in_place_with`](crate::AnyMovable::try_in_place_with) and
//! [`AnyMovable::try_emplace_with`](crate::AnyMovable::try_emplace_with).

use thiserror::Error;

/// Result type alias for container operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Container errors.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
  /// The container doesn’t hold any object.
  #[error("the container is empty")]
  Empty,

  /// A fixed-size sequence was built from the wrong number of elements.
  #[error("expected {expected} elements, got {found}")]
  ElementCount {
    /// Length of the sequence.
    expected: usize,
    /// Number of elements pulled from the source; `expected + 1` when the source had too many.
    found: usize,
  },
}
