//! Computed style to Taffy style conversion
//!
//! Every element becomes a flex box in the solver tree, whatever its
//! `display`, unless it is `display: none`. Features Taffy cannot express are
//! approximated:
//!
//! - `position: fixed` is laid out as `absolute`
//! - max sizes at or above [`MAX_SIZE_NONE_THRESHOLD`] are dropped
//! - the two overflow axes collapse to the most restrictive single value
//! - Taffy has no `direction`, so right-to-left containers mirror their
//!   inline axis: rows flip to `row-reverse`, and column containers swap
//!   start/end cross-axis alignment

use crate::style::values::MAX_SIZE_NONE_THRESHOLD;
use crate::style::{
  AlignContent, AlignItems, AlignSelf, BoxSizing, ComputedStyle, Direction, Display, FlexDirection,
  FlexWrap, JustifyContent, LengthPercentage, LengthPercentageAuto, Overflow, Position,
};
use taffy::style::{
  Dimension, LengthPercentage as TaffyLengthPercentage,
  LengthPercentageAuto as TaffyLengthPercentageAuto,
};

/// Direction as seen by one node of the solver tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
  Inherit,
  Ltr,
  Rtl,
}

impl LayoutDirection {
  /// Resolves `Inherit` against the parent's resolved direction
  pub fn resolve(self, inherited: LayoutDirection) -> LayoutDirection {
    match self {
      LayoutDirection::Inherit => inherited,
      other => other,
    }
  }

  /// Direction used for a whole pass: `Inherit` at the root means ltr
  pub fn or_ltr(self) -> LayoutDirection {
    match self {
      LayoutDirection::Inherit => LayoutDirection::Ltr,
      other => other,
    }
  }

  pub fn is_rtl(self) -> bool {
    self == LayoutDirection::Rtl
  }
}

/// `direction: auto` inherits from the parent
pub fn to_layout_direction(direction: Direction) -> LayoutDirection {
  match direction {
    Direction::Auto => LayoutDirection::Inherit,
    Direction::Ltr => LayoutDirection::Ltr,
    Direction::Rtl => LayoutDirection::Rtl,
  }
}

/// Axes of the flex container an item sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerAxes {
  pub flex_direction: FlexDirection,
  /// Resolved direction of the container
  pub direction: LayoutDirection,
}

impl ContainerAxes {
  /// Column containers in rtl have their cross-start on the right
  fn cross_axis_mirrored(self) -> bool {
    self.direction.is_rtl() && !self.flex_direction.is_row()
  }
}

/// Collapses two overflow axes into one
///
/// Hidden on either axis wins; otherwise scroll or auto on either axis gives
/// scroll; otherwise visible.
///
/// # Examples
///
/// ```
/// use boxlayout::layout::combine_overflow;
/// use boxlayout::style::Overflow;
///
/// assert_eq!(combine_overflow(Overflow::Hidden, Overflow::Visible), Overflow::Hidden);
/// assert_eq!(combine_overflow(Overflow::Auto, Overflow::Visible), Overflow::Scroll);
/// assert_eq!(combine_overflow(Overflow::Visible, Overflow::Visible), Overflow::Visible);
/// ```
pub fn combine_overflow(x: Overflow, y: Overflow) -> Overflow {
  let either = |value: Overflow| x == value || y == value;
  if either(Overflow::Hidden) {
    Overflow::Hidden
  } else if either(Overflow::Scroll) || either(Overflow::Auto) {
    Overflow::Scroll
  } else {
    Overflow::Visible
  }
}

/// Translates one element's style into a Taffy style
///
/// `direction` is the element's resolved direction; `parent` describes the
/// container the element is an item of, `None` for the formatted root.
pub fn computed_style_to_taffy(
  style: &ComputedStyle,
  direction: LayoutDirection,
  parent: Option<ContainerAxes>,
) -> taffy::style::Style {
  let own_axes = ContainerAxes {
    flex_direction: style.flex_direction,
    direction,
  };
  let cross_mirrored = own_axes.cross_axis_mirrored();
  let item_cross_mirrored = parent.is_some_and(ContainerAxes::cross_axis_mirrored);

  let overflow = overflow_to_taffy(combine_overflow(style.overflow_x, style.overflow_y));

  taffy::style::Style {
    display: display_to_taffy(style.display),
    box_sizing: box_sizing_to_taffy(style.box_sizing),
    overflow: taffy::geometry::Point {
      x: overflow,
      y: overflow,
    },
    position: position_to_taffy(style.position),
    inset: taffy::geometry::Rect {
      left: lpa_to_taffy(style.left),
      right: lpa_to_taffy(style.right),
      top: lpa_to_taffy(style.top),
      bottom: lpa_to_taffy(style.bottom),
    },

    size: taffy::geometry::Size {
      width: lpa_to_dimension(style.width),
      height: lpa_to_dimension(style.height),
    },
    min_size: taffy::geometry::Size {
      width: lp_to_dimension(style.min_width),
      height: lp_to_dimension(style.min_height),
    },
    max_size: taffy::geometry::Size {
      width: max_to_dimension(style.max_width),
      height: max_to_dimension(style.max_height),
    },

    margin: taffy::geometry::Rect {
      left: lpa_to_taffy(style.margin_left),
      right: lpa_to_taffy(style.margin_right),
      top: lpa_to_taffy(style.margin_top),
      bottom: lpa_to_taffy(style.margin_bottom),
    },
    padding: taffy::geometry::Rect {
      left: lp_to_taffy(style.padding_left),
      right: lp_to_taffy(style.padding_right),
      top: lp_to_taffy(style.padding_top),
      bottom: lp_to_taffy(style.padding_bottom),
    },
    border: taffy::geometry::Rect {
      left: TaffyLengthPercentage::Length(style.border_left_width),
      right: TaffyLengthPercentage::Length(style.border_right_width),
      top: TaffyLengthPercentage::Length(style.border_top_width),
      bottom: TaffyLengthPercentage::Length(style.border_bottom_width),
    },
    gap: taffy::geometry::Size {
      width: lp_to_taffy(style.column_gap),
      height: lp_to_taffy(style.row_gap),
    },

    flex_direction: flex_direction_to_taffy(style.flex_direction, direction),
    flex_wrap: flex_wrap_to_taffy(style.flex_wrap),
    justify_content: Some(justify_content_to_taffy(style.justify_content)),
    align_items: Some(align_items_to_taffy(style.align_items, cross_mirrored)),
    align_content: Some(align_content_to_taffy(style.align_content, cross_mirrored)),
    align_self: align_self_to_taffy(style.align_self, item_cross_mirrored),
    flex_grow: style.flex_grow,
    flex_shrink: style.flex_shrink,
    flex_basis: lpa_to_dimension(style.flex_basis),

    ..Default::default()
  }
}

/// Style of the synthetic node standing in for the containing block
///
/// A row container with stretched items: an auto-size root takes its content
/// width and the block's full height. In a right-to-left pass the row runs
/// from the right edge, so a narrow root sits against it.
pub fn containing_block_style(
  width: f32,
  height: f32,
  direction: LayoutDirection,
) -> taffy::style::Style {
  taffy::style::Style {
    display: taffy::style::Display::Flex,
    flex_direction: flex_direction_to_taffy(FlexDirection::Row, direction),
    justify_content: Some(taffy::style::JustifyContent::FlexStart),
    align_items: Some(taffy::style::AlignItems::Stretch),
    size: taffy::geometry::Size {
      width: Dimension::Length(width),
      height: Dimension::Length(height),
    },
    ..Default::default()
  }
}

fn display_to_taffy(display: Display) -> taffy::style::Display {
  match display {
    Display::None => taffy::style::Display::None,
    _ => taffy::style::Display::Flex,
  }
}

fn box_sizing_to_taffy(box_sizing: BoxSizing) -> taffy::style::BoxSizing {
  match box_sizing {
    BoxSizing::ContentBox => taffy::style::BoxSizing::ContentBox,
    BoxSizing::BorderBox => taffy::style::BoxSizing::BorderBox,
  }
}

fn overflow_to_taffy(overflow: Overflow) -> taffy::style::Overflow {
  match overflow {
    Overflow::Hidden => taffy::style::Overflow::Hidden,
    Overflow::Scroll | Overflow::Auto => taffy::style::Overflow::Scroll,
    Overflow::Visible => taffy::style::Overflow::Visible,
  }
}

fn position_to_taffy(position: Position) -> taffy::style::Position {
  match position {
    Position::Static | Position::Relative => taffy::style::Position::Relative,
    // No fixed positioning downstream.
    Position::Absolute | Position::Fixed => taffy::style::Position::Absolute,
  }
}

fn lpa_to_dimension(value: LengthPercentageAuto) -> Dimension {
  match value {
    LengthPercentageAuto::Length(v) => Dimension::Length(v),
    LengthPercentageAuto::Percent(p) => Dimension::Percent(p / 100.0),
    LengthPercentageAuto::Auto => Dimension::Auto,
  }
}

fn lp_to_dimension(value: LengthPercentage) -> Dimension {
  match value {
    LengthPercentage::Length(v) => Dimension::Length(v),
    LengthPercentage::Percent(p) => Dimension::Percent(p / 100.0),
  }
}

fn max_to_dimension(value: LengthPercentage) -> Dimension {
  match value {
    LengthPercentage::Length(v) if v >= MAX_SIZE_NONE_THRESHOLD => Dimension::Auto,
    other => lp_to_dimension(other),
  }
}

fn lpa_to_taffy(value: LengthPercentageAuto) -> TaffyLengthPercentageAuto {
  match value {
    LengthPercentageAuto::Length(v) => TaffyLengthPercentageAuto::Length(v),
    LengthPercentageAuto::Percent(p) => TaffyLengthPercentageAuto::Percent(p / 100.0),
    LengthPercentageAuto::Auto => TaffyLengthPercentageAuto::Auto,
  }
}

fn lp_to_taffy(value: LengthPercentage) -> TaffyLengthPercentage {
  match value {
    LengthPercentage::Length(v) => TaffyLengthPercentage::Length(v),
    LengthPercentage::Percent(p) => TaffyLengthPercentage::Percent(p / 100.0),
  }
}

fn flex_direction_to_taffy(
  flex_direction: FlexDirection,
  direction: LayoutDirection,
) -> taffy::style::FlexDirection {
  let rtl = direction.is_rtl();
  match flex_direction {
    FlexDirection::Row if rtl => taffy::style::FlexDirection::RowReverse,
    FlexDirection::Row => taffy::style::FlexDirection::Row,
    FlexDirection::RowReverse if rtl => taffy::style::FlexDirection::Row,
    FlexDirection::RowReverse => taffy::style::FlexDirection::RowReverse,
    FlexDirection::Column => taffy::style::FlexDirection::Column,
    FlexDirection::ColumnReverse => taffy::style::FlexDirection::ColumnReverse,
  }
}

fn flex_wrap_to_taffy(wrap: FlexWrap) -> taffy::style::FlexWrap {
  match wrap {
    FlexWrap::NoWrap => taffy::style::FlexWrap::NoWrap,
    FlexWrap::Wrap => taffy::style::FlexWrap::Wrap,
    FlexWrap::WrapReverse => taffy::style::FlexWrap::WrapReverse,
  }
}

// Main-axis keywords follow the (possibly reversed) flex direction, so they
// need no mirroring.
fn justify_content_to_taffy(justify: JustifyContent) -> taffy::style::JustifyContent {
  match justify {
    JustifyContent::FlexStart => taffy::style::JustifyContent::FlexStart,
    JustifyContent::FlexEnd => taffy::style::JustifyContent::FlexEnd,
    JustifyContent::Center => taffy::style::JustifyContent::Center,
    JustifyContent::SpaceBetween => taffy::style::JustifyContent::SpaceBetween,
    JustifyContent::SpaceAround => taffy::style::JustifyContent::SpaceAround,
    JustifyContent::SpaceEvenly => taffy::style::JustifyContent::SpaceEvenly,
  }
}

fn align_items_to_taffy(align: AlignItems, mirrored: bool) -> taffy::style::AlignItems {
  match align {
    AlignItems::FlexStart if mirrored => taffy::style::AlignItems::FlexEnd,
    AlignItems::FlexStart => taffy::style::AlignItems::FlexStart,
    AlignItems::FlexEnd if mirrored => taffy::style::AlignItems::FlexStart,
    AlignItems::FlexEnd => taffy::style::AlignItems::FlexEnd,
    AlignItems::Center => taffy::style::AlignItems::Center,
    AlignItems::Baseline => taffy::style::AlignItems::Baseline,
    AlignItems::Stretch => taffy::style::AlignItems::Stretch,
  }
}

fn align_self_to_taffy(align: AlignSelf, mirrored: bool) -> Option<taffy::style::AlignSelf> {
  let keyword = match align {
    AlignSelf::Auto => return None,
    AlignSelf::FlexStart => AlignItems::FlexStart,
    AlignSelf::FlexEnd => AlignItems::FlexEnd,
    AlignSelf::Center => AlignItems::Center,
    AlignSelf::Baseline => AlignItems::Baseline,
    AlignSelf::Stretch => AlignItems::Stretch,
  };
  Some(align_items_to_taffy(keyword, mirrored))
}

fn align_content_to_taffy(align: AlignContent, mirrored: bool) -> taffy::style::AlignContent {
  match align {
    AlignContent::FlexStart if mirrored => taffy::style::AlignContent::FlexEnd,
    AlignContent::FlexStart => taffy::style::AlignContent::FlexStart,
    AlignContent::FlexEnd if mirrored => taffy::style::AlignContent::FlexStart,
    AlignContent::FlexEnd => taffy::style::AlignContent::FlexEnd,
    AlignContent::Center => taffy::style::AlignContent::Center,
    AlignContent::SpaceBetween => taffy::style::AlignContent::SpaceBetween,
    AlignContent::SpaceAround => taffy::style::AlignContent::SpaceAround,
    AlignContent::SpaceEvenly => taffy::style::AlignContent::SpaceEvenly,
    AlignContent::Stretch => taffy::style::AlignContent::Stretch,
  }
}
