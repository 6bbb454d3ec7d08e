//! Keyword property values read by layout
//!
//! Each enum mirrors one CSS property. Values the layout pass cannot express
//! are still represented here so the snapshot stays faithful to what the
//! cascade produced; the style adapter decides how they degrade.

use std::fmt;

/// Outer/inner display type
///
/// CSS: `display`
///
/// Everything except `None` is formatted as a flex container by the layout
/// pass. The distinction matters to [`crate::layout::build_box`] callers that
/// pick a box mode from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Display {
  None,
  #[default]
  Block,
  Inline,
  InlineBlock,
  Flex,
  InlineFlex,
}

impl Display {
  /// Returns true for values whose outer display type is inline
  pub fn is_inline_level(self) -> bool {
    matches!(self, Display::Inline | Display::InlineBlock | Display::InlineFlex)
  }
}

impl fmt::Display for Display {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Display::None => "none",
      Display::Block => "block",
      Display::Inline => "inline",
      Display::InlineBlock => "inline-block",
      Display::Flex => "flex",
      Display::InlineFlex => "inline-flex",
    };
    f.write_str(s)
  }
}

/// Inline base direction
///
/// CSS: `direction`
///
/// `Auto` means the element did not set a direction and inherits its
/// parent's resolved direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
  #[default]
  Auto,
  Ltr,
  Rtl,
}

/// Overflow behavior along one axis
///
/// CSS: `overflow-x`, `overflow-y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Overflow {
  #[default]
  Visible,
  Hidden,
  Scroll,
  Auto,
}

/// Which box `width`/`height` apply to
///
/// CSS: `box-sizing`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoxSizing {
  #[default]
  ContentBox,
  BorderBox,
}

/// Positioning scheme
///
/// CSS: `position`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
  #[default]
  Static,
  Relative,
  Absolute,
  Fixed,
}

impl Position {
  /// Absolute and fixed boxes are taken out of flow
  pub fn is_absolutely_positioned(self) -> bool {
    matches!(self, Position::Absolute | Position::Fixed)
  }
}

/// Main axis of a flex container
///
/// CSS: `flex-direction`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlexDirection {
  #[default]
  Row,
  RowReverse,
  Column,
  ColumnReverse,
}

impl FlexDirection {
  pub fn is_row(self) -> bool {
    matches!(self, FlexDirection::Row | FlexDirection::RowReverse)
  }
}

/// Flex line wrapping
///
/// CSS: `flex-wrap`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlexWrap {
  #[default]
  NoWrap,
  Wrap,
  WrapReverse,
}

/// Main axis distribution
///
/// CSS: `justify-content`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JustifyContent {
  #[default]
  FlexStart,
  FlexEnd,
  Center,
  SpaceBetween,
  SpaceAround,
  SpaceEvenly,
}

/// Cross axis alignment of items
///
/// CSS: `align-items`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlignItems {
  FlexStart,
  FlexEnd,
  Center,
  Baseline,
  #[default]
  Stretch,
}

/// Cross axis alignment override for one item
///
/// CSS: `align-self`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlignSelf {
  #[default]
  Auto,
  FlexStart,
  FlexEnd,
  Center,
  Baseline,
  Stretch,
}

/// Distribution of flex lines along the cross axis
///
/// CSS: `align-content`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlignContent {
  FlexStart,
  FlexEnd,
  Center,
  SpaceBetween,
  SpaceAround,
  SpaceEvenly,
  #[default]
  Stretch,
}
