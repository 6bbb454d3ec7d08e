//! Computed style snapshot
//!
//! [`ComputedStyle`] holds the resolved CSS properties the layout pass reads
//! for one element. Computed values are partially resolved:
//! - Relative units (em, rem, vw) are already pixels
//! - `inherit` has been replaced by the inherited value
//! - Percentages are kept and resolved during layout
//! - `line-height` is a resolved pixel value
//!
//! The snapshot is immutable input: layout never writes to it.
//!
//! # Example
//!
//! ```
//! use boxlayout::style::{ComputedStyle, Display, LengthPercentage};
//!
//! let style = ComputedStyle::default();
//! assert_eq!(style.display, Display::Block);
//! assert_eq!(style.max_width, LengthPercentage::NONE);
//! ```

use crate::style::types::{
  AlignContent, AlignItems, AlignSelf, BoxSizing, Direction, Display, FlexDirection, FlexWrap,
  JustifyContent, Overflow, Position,
};
use crate::style::values::{LengthPercentage, LengthPercentageAuto};

/// Computed CSS properties for an element
///
/// Defaults are CSS initial values, except `max_width`/`max_height` which
/// carry the `none` sentinel ([`LengthPercentage::NONE`]).
///
/// # Property Groups
///
/// - **Display**: display, box-sizing, direction, overflow
/// - **Flexbox**: container and item properties
/// - **Sizing**: width/height with min and max
/// - **Box model**: margin, padding, border widths
/// - **Positioning**: position and insets
/// - **Text**: line-height
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
  pub display: Display,
  pub box_sizing: BoxSizing,
  pub direction: Direction,
  pub overflow_x: Overflow,
  pub overflow_y: Overflow,

  pub flex_direction: FlexDirection,
  pub flex_wrap: FlexWrap,
  pub justify_content: JustifyContent,
  pub align_content: AlignContent,
  pub align_items: AlignItems,
  pub align_self: AlignSelf,
  pub flex_grow: f32,
  pub flex_shrink: f32,
  pub flex_basis: LengthPercentageAuto,
  pub row_gap: LengthPercentage,
  pub column_gap: LengthPercentage,

  pub width: LengthPercentageAuto,
  pub height: LengthPercentageAuto,
  pub min_width: LengthPercentage,
  pub min_height: LengthPercentage,
  pub max_width: LengthPercentage,
  pub max_height: LengthPercentage,

  pub margin_top: LengthPercentageAuto,
  pub margin_right: LengthPercentageAuto,
  pub margin_bottom: LengthPercentageAuto,
  pub margin_left: LengthPercentageAuto,
  pub padding_top: LengthPercentage,
  pub padding_right: LengthPercentage,
  pub padding_bottom: LengthPercentage,
  pub padding_left: LengthPercentage,
  pub border_top_width: f32,
  pub border_right_width: f32,
  pub border_bottom_width: f32,
  pub border_left_width: f32,

  pub position: Position,
  pub top: LengthPercentageAuto,
  pub right: LengthPercentageAuto,
  pub bottom: LengthPercentageAuto,
  pub left: LengthPercentageAuto,

  /// Resolved line height in pixels
  pub line_height: f32,
}

impl Default for ComputedStyle {
  fn default() -> Self {
    Self {
      display: Display::Block,
      box_sizing: BoxSizing::ContentBox,
      direction: Direction::Auto,
      overflow_x: Overflow::Visible,
      overflow_y: Overflow::Visible,

      flex_direction: FlexDirection::Row,
      flex_wrap: FlexWrap::NoWrap,
      justify_content: JustifyContent::FlexStart,
      align_content: AlignContent::Stretch,
      align_items: AlignItems::Stretch,
      align_self: AlignSelf::Auto,
      flex_grow: 0.0,
      flex_shrink: 1.0,
      flex_basis: LengthPercentageAuto::Auto,
      row_gap: LengthPercentage::ZERO,
      column_gap: LengthPercentage::ZERO,

      width: LengthPercentageAuto::Auto,
      height: LengthPercentageAuto::Auto,
      min_width: LengthPercentage::ZERO,
      min_height: LengthPercentage::ZERO,
      max_width: LengthPercentage::NONE,
      max_height: LengthPercentage::NONE,

      margin_top: LengthPercentageAuto::ZERO,
      margin_right: LengthPercentageAuto::ZERO,
      margin_bottom: LengthPercentageAuto::ZERO,
      margin_left: LengthPercentageAuto::ZERO,
      padding_top: LengthPercentage::ZERO,
      padding_right: LengthPercentage::ZERO,
      padding_bottom: LengthPercentage::ZERO,
      padding_left: LengthPercentage::ZERO,
      border_top_width: 0.0,
      border_right_width: 0.0,
      border_bottom_width: 0.0,
      border_left_width: 0.0,

      position: Position::Static,
      top: LengthPercentageAuto::Auto,
      right: LengthPercentageAuto::Auto,
      bottom: LengthPercentageAuto::Auto,
      left: LengthPercentageAuto::Auto,

      line_height: 0.0,
    }
  }
}

impl ComputedStyle {
  /// Sets all four margins
  pub fn set_margin(&mut self, value: LengthPercentageAuto) {
    self.margin_top = value;
    self.margin_right = value;
    self.margin_bottom = value;
    self.margin_left = value;
  }

  /// Sets all four paddings
  pub fn set_padding(&mut self, value: LengthPercentage) {
    self.padding_top = value;
    self.padding_right = value;
    self.padding_bottom = value;
    self.padding_left = value;
  }

  /// Sets all four border widths
  pub fn set_border_width(&mut self, value: f32) {
    self.border_top_width = value;
    self.border_right_width = value;
    self.border_bottom_width = value;
    self.border_left_width = value;
  }

  /// Sets both overflow axes
  pub fn set_overflow(&mut self, value: Overflow) {
    self.overflow_x = value;
    self.overflow_y = value;
  }
}
