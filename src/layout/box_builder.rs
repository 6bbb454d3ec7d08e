//! Standalone box model resolution
//!
//! [`build_box`] resolves an element's box from its style and a containing
//! block without running the solver. Callers outside the main pass use it to
//! size things like popups or scroll handles. Unknown content sizes are
//! reported as [`AUTO_SIZE`].

use crate::geometry::{EdgeOffsets, Size};
use crate::style::{
  BoxSizing, ComputedStyle, LengthPercentage, Overflow, MAX_SIZE_NONE_THRESHOLD,
};
use crate::tree::{Element, ElementBox};

/// Content size component meaning `auto`
pub const AUTO_SIZE: f32 = -1.0;

/// How much of the box model [`build_box`] resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildBoxMode {
  /// Sizes stay auto and horizontal margins are zero
  Inline,
  /// Like `Block`, but auto horizontal margins stay zero
  UnalignedBlock,
  /// Full resolution, distributing free width to auto horizontal margins
  #[default]
  Block,
}

/// True when either axis clips and scrolls its content
pub fn is_scroll_container(overflow_x: Overflow, overflow_y: Overflow) -> bool {
  let scrolls = |o: Overflow| matches!(o, Overflow::Auto | Overflow::Scroll);
  scrolls(overflow_x) || scrolls(overflow_y)
}

/// Resolves the box of `element` inside `containing_block`
///
/// Padding and every margin resolve against the containing block width;
/// width and height resolve against their own axis. A missing element yields
/// a box the size of the containing block with no edges.
///
/// # Examples
///
/// ```
/// use boxlayout::layout::{build_box, BuildBoxMode};
/// use boxlayout::style::{ComputedStyle, LengthPercentageAuto};
/// use boxlayout::tree::ElementTree;
/// use boxlayout::Size;
///
/// let mut elements = ElementTree::new();
/// let id = elements.create_element(ComputedStyle {
///   width: LengthPercentageAuto::px(100.0),
///   margin_left: LengthPercentageAuto::Auto,
///   margin_right: LengthPercentageAuto::Auto,
///   ..ComputedStyle::default()
/// });
///
/// let b = build_box(Size::new(300.0, 200.0), elements.get(id), BuildBoxMode::Block);
/// assert_eq!(b.content.width, 100.0);
/// assert_eq!((b.margin.left, b.margin.right), (100.0, 100.0));
/// ```
pub fn build_box(
  containing_block: Size,
  element: Option<&Element>,
  mode: BuildBoxMode,
) -> ElementBox {
  let Some(element) = element else {
    return ElementBox::new(containing_block);
  };
  build_box_for_style(containing_block, element.style(), mode)
}

/// [`build_box`] for a bare style
pub fn build_box_for_style(
  containing_block: Size,
  style: &ComputedStyle,
  mode: BuildBoxMode,
) -> ElementBox {
  let cb_width = containing_block.width;
  let cb_height = containing_block.height;

  let padding = EdgeOffsets::new(
    style.padding_top.resolve(cb_width),
    style.padding_right.resolve(cb_width),
    style.padding_bottom.resolve(cb_width),
    style.padding_left.resolve(cb_width),
  );
  let border = EdgeOffsets::new(
    style.border_top_width,
    style.border_right_width,
    style.border_bottom_width,
    style.border_left_width,
  );
  let border_padding_x = padding.horizontal() + border.horizontal();
  let border_padding_y = padding.vertical() + border.vertical();

  let margin_left_auto = style.margin_left.is_auto();
  let margin_right_auto = style.margin_right.is_auto();
  let mut margin = EdgeOffsets::new(
    style.margin_top.resolve_or(cb_width, 0.0),
    style.margin_right.resolve_or(cb_width, 0.0),
    style.margin_bottom.resolve_or(cb_width, 0.0),
    style.margin_left.resolve_or(cb_width, 0.0),
  );

  let mut width = style.width.resolve_or(cb_width, AUTO_SIZE);
  let mut height = style.height.resolve_or(cb_height, AUTO_SIZE);

  if mode == BuildBoxMode::Inline {
    width = AUTO_SIZE;
    height = AUTO_SIZE;
    margin.left = 0.0;
    margin.right = 0.0;
  }

  if style.box_sizing == BoxSizing::BorderBox {
    if width >= 0.0 {
      width = (width - border_padding_x).max(0.0);
    }
    if height >= 0.0 {
      height = (height - border_padding_y).max(0.0);
    }
  }

  if width >= 0.0 {
    width = clamp_definite(width, style.min_width, style.max_width, cb_width);
  }
  if height >= 0.0 {
    height = clamp_definite(height, style.min_height, style.max_height, cb_height);
  }

  if mode == BuildBoxMode::Block
    && (margin_left_auto || margin_right_auto)
    && width >= 0.0
    && cb_width >= 0.0
  {
    // Auto margins already resolved to zero above.
    let remaining = cb_width - (width + border_padding_x + margin.left + margin.right);
    if remaining > 0.0 {
      match (margin_left_auto, margin_right_auto) {
        (true, true) => {
          margin.left = remaining * 0.5;
          margin.right = remaining * 0.5;
        }
        (true, false) => margin.left = remaining,
        _ => margin.right = remaining,
      }
    }
  }

  ElementBox {
    content: Size::new(width, height),
    padding,
    border,
    margin,
  }
}

/// Applies min then max to a definite size; a `none` max leaves it unbounded
fn clamp_definite(value: f32, min: LengthPercentage, max: LengthPercentage, base: f32) -> f32 {
  let mut value = value.max(min.resolve(base));
  let max = max.resolve(base);
  if (0.0..MAX_SIZE_NONE_THRESHOLD).contains(&max) {
    value = value.min(max);
  }
  value
}
