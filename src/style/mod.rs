//! Style system types
//!
//! The layout pass consumes a read-only [`ComputedStyle`] per element.

pub mod computed;
pub mod types;
pub mod values;

pub use computed::ComputedStyle;
pub use types::{
  AlignContent, AlignItems, AlignSelf, BoxSizing, Direction, Display, FlexDirection, FlexWrap,
  JustifyContent, Overflow, Position,
};
pub use values::{LengthPercentage, LengthPercentageAuto, MAX_SIZE_NONE_THRESHOLD};
