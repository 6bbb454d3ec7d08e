//! Error types for boxlayout
//!
//! Geometry itself never fails: numeric edge cases are clamped. Errors are
//! reserved for misuse of the public entry points:
//! - Layout errors (invalid containing block, stale root element)
//! - Tree errors (structural edits that would corrupt the element tree)
//!
//! All errors use the `thiserror` crate.

use thiserror::Error;

/// Result type alias for boxlayout operations
///
/// # Examples
///
/// ```
/// use boxlayout::Result;
///
/// fn layout_once() -> Result<()> {
///   Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
///
/// # Examples
///
/// ```
/// use boxlayout::Error;
/// use boxlayout::error::LayoutError;
///
/// fn format() -> Result<(), Error> {
///   Err(Error::Layout(LayoutError::InvalidConstraints {
///     message: "containing block width is negative".to_string(),
///   }))
/// }
/// assert!(format().is_err());
/// ```
#[derive(Error, Debug)]
pub enum Error {
  /// Layout pass rejected its inputs
  #[error("Layout error: {0}")]
  Layout(#[from] LayoutError),

  /// Element tree edit rejected
  #[error("Tree error: {0}")]
  Tree(#[from] TreeError),
}

/// Errors reported by a layout pass before any geometry is written
///
/// # Examples
///
/// ```
/// use boxlayout::error::LayoutError;
///
/// let error = LayoutError::InvalidConstraints {
///   message: "width cannot be negative: -100px".to_string(),
/// };
/// assert!(error.to_string().contains("-100px"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
  /// Containing block is negative or not finite
  #[error("Invalid layout constraints: {message}")]
  InvalidConstraints { message: String },

  /// The element to format is not in the tree
  #[error("Element {id} is not part of the tree")]
  MissingElement { id: usize },
}

/// Errors raised by structural edits on the element tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
  /// Referenced element has been removed or never existed
  #[error("Element {id} does not exist")]
  StaleElement { id: usize },

  /// Appending would make an element its own ancestor
  #[error("Appending {child} under {parent} would create a cycle")]
  Cycle { parent: usize, child: usize },

  /// Child already has a parent
  #[error("Element {child} is already attached to {parent}")]
  AlreadyAttached { parent: usize, child: usize },
}
