//! Error types for the viewer core
//!
//! Each subsystem gets its own error enum; the crate-level [`Error`] wraps
//! them with `#[from]` conversions so callers can use `?` across module
//! boundaries. All errors use `thiserror`.
//!
//! Recovery expectations:
//! - [`HistoryError`] and the caller-misuse variants of [`RenderError`]
//!   (`NoLayout`, `PageIndex`) are recoverable input-validation failures.
//! - [`LayoutError`] and `RenderError::Paint` abort the current paint pass
//!   but never wedge the viewer; the next pass starts clean.
//! - [`RenderError::Aborted`] is a host-lifecycle signal and always
//!   propagates to the caller untouched.

use thiserror::Error;

/// Result type alias for viewer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type covering all viewer subsystems.
#[derive(Error, Debug)]
pub enum Error {
  /// Navigation history error
  #[error("History error: {0}")]
  History(#[from] HistoryError),

  /// The box tree provider could not produce a tree
  #[error("Layout error: {0}")]
  Layout(#[from] LayoutError),

  /// Error during a paint pass
  #[error("Render error: {0}")]
  Render(#[from] RenderError),
}

/// Errors raised by navigation-history operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
  /// `back()` or `forward()` would move the cursor outside the log.
  ///
  /// Callers should consult `has_back()` / `has_forward()` first, or treat
  /// this as the signal that the corresponding button should be disabled.
  #[error("history cursor cannot move past the log: cursor {index}, {len} entries")]
  OutOfRange { index: isize, len: usize },
}

/// Errors raised while asking the box tree provider for a layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
  /// The viewport constraints could not be satisfied
  #[error("invalid layout constraints: {message}")]
  InvalidConstraints { message: String },

  /// Box tree construction failed inside the provider
  #[error("box tree construction failed: {message}")]
  TreeConstruction { message: String },
}

/// Errors raised during painting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
  /// Paint was requested before any document produced a box tree
  #[error("document needs layout before painting")]
  NoLayout,

  /// A page index outside `[0, count)` was requested
  #[error("page {page} is not between 0 and {count}")]
  PageIndex { page: usize, count: usize },

  /// The box tree painter failed while the viewer was delegating to it
  #[error("paint delegation failed: {message}")]
  Paint { message: String },

  /// Host-lifecycle abort. Never reported to failure listeners; always
  /// propagates to the caller.
  #[error("paint pass aborted by host")]
  Aborted,
}
