//! Layout Engine - Orchestrates one layout pass
//!
//! [`LayoutEngine::format_element`] is the entry point. A pass:
//! 1. Validates the containing block and the root element
//! 2. Builds a pass-scoped solver tree mirroring the root's subtree
//! 3. Runs the flex solver over it
//! 4. Writes boxes, offsets, overflow and text lines back onto the elements
//! 5. Clamps every scroll offset in the subtree to its new overflow
//!
//! Nothing is written to the element tree before the solver has returned, so
//! a pass that fails validation leaves the tree untouched.

use crate::debug::runtime::{self, RuntimeToggles};
use crate::error::{LayoutError, Result};
use crate::geometry::{Point, Size};
use crate::layout::apply::LayoutApplier;
use crate::layout::tree_builder::LayoutTree;
use crate::text::FontEngine;
use crate::tree::{BoxArea, ElementId, ElementTree};
use std::sync::Arc;

/// Configuration for layout engine
///
/// # Examples
///
/// ```
/// use boxlayout::LayoutConfig;
///
/// let config = LayoutConfig::default();
/// assert!(config.pixel_snapping);
/// assert!(!config.trace_geometry);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
  /// Round solved geometry to whole pixels
  pub pixel_snapping: bool,

  /// Log every element's geometry at `trace` level while applying
  pub trace_geometry: bool,
}

impl Default for LayoutConfig {
  fn default() -> Self {
    Self {
      pixel_snapping: true,
      trace_geometry: false,
    }
  }
}

impl LayoutConfig {
  /// Reads `BOXLAYOUT_PIXEL_SNAPPING` and `BOXLAYOUT_TRACE_LAYOUT`
  ///
  /// # Examples
  ///
  /// ```
  /// use boxlayout::debug::runtime::RuntimeToggles;
  /// use boxlayout::LayoutConfig;
  /// use std::collections::HashMap;
  ///
  /// let toggles = RuntimeToggles::from_map(HashMap::from([
  ///   ("BOXLAYOUT_PIXEL_SNAPPING".to_string(), "0".to_string()),
  /// ]));
  /// let config = LayoutConfig::from_toggles(&toggles);
  /// assert!(!config.pixel_snapping);
  /// ```
  pub fn from_toggles(toggles: &RuntimeToggles) -> Self {
    let defaults = Self::default();
    Self {
      pixel_snapping: toggles.truthy_with_default(runtime::PIXEL_SNAPPING, defaults.pixel_snapping),
      trace_geometry: toggles.truthy_with_default(runtime::TRACE_LAYOUT, defaults.trace_geometry),
    }
  }

  /// Configuration from the active runtime toggles
  pub fn from_env() -> Self {
    Self::from_toggles(&runtime::runtime_toggles())
  }

  pub fn with_pixel_snapping(mut self, enabled: bool) -> Self {
    self.pixel_snapping = enabled;
    self
  }

  pub fn with_trace_geometry(mut self, enabled: bool) -> Self {
    self.trace_geometry = enabled;
    self
  }
}

/// Lays out element subtrees
///
/// The engine holds no per-pass state; one engine can format any number of
/// trees, and since the font engine is `Send + Sync` so is the engine.
///
/// # Examples
///
/// ```
/// use boxlayout::style::{ComputedStyle, LengthPercentageAuto};
/// use boxlayout::text::FixedAdvanceFontEngine;
/// use boxlayout::tree::{BoxArea, ElementTree};
/// use boxlayout::{LayoutEngine, Size};
/// use std::sync::Arc;
///
/// let mut elements = ElementTree::new();
/// let root = elements.create_element(ComputedStyle {
///   width: LengthPercentageAuto::px(120.0),
///   height: LengthPercentageAuto::px(80.0),
///   ..ComputedStyle::default()
/// });
///
/// let engine = LayoutEngine::new(Arc::new(FixedAdvanceFontEngine::new()));
/// engine.format_element(&mut elements, root, Size::new(800.0, 600.0)).unwrap();
///
/// let layout_box = elements.get(root).unwrap().layout_box();
/// assert_eq!(layout_box.size(BoxArea::Border), Size::new(120.0, 80.0));
/// ```
#[derive(Clone)]
pub struct LayoutEngine {
  fonts: Arc<dyn FontEngine>,
  config: LayoutConfig,
}

impl std::fmt::Debug for LayoutEngine {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("LayoutEngine")
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}

impl LayoutEngine {
  /// Creates an engine with the default configuration
  pub fn new(fonts: Arc<dyn FontEngine>) -> Self {
    Self::with_config(fonts, LayoutConfig::default())
  }

  pub fn with_config(fonts: Arc<dyn FontEngine>, config: LayoutConfig) -> Self {
    Self { fonts, config }
  }

  pub fn config(&self) -> LayoutConfig {
    self.config
  }

  pub fn fonts(&self) -> &Arc<dyn FontEngine> {
    &self.fonts
  }

  /// Lays out `root` and its subtree inside `containing_block`
  ///
  /// On success every live element in the subtree has a fresh box, offset,
  /// scrollable overflow and clamped scroll offset, and text elements have
  /// regenerated lines. The root's offset is relative to its parent's
  /// border box and includes the parent's content offset.
  ///
  /// # Errors
  ///
  /// Returns [`LayoutError::InvalidConstraints`] when the containing block is
  /// negative or not finite, and [`LayoutError::MissingElement`] when `root`
  /// is not in `elements`. The tree is not modified in either case.
  pub fn format_element(
    &self,
    elements: &mut ElementTree,
    root: ElementId,
    containing_block: Size,
  ) -> Result<()> {
    if !containing_block.is_valid_extent() {
      return Err(
        LayoutError::InvalidConstraints {
          message: format!("containing block {containing_block} must be finite and non-negative"),
        }
        .into(),
      );
    }
    let Some(root_element) = elements.get(root) else {
      return Err(LayoutError::MissingElement { id: root.index() }.into());
    };

    let offset_parent = root_element.parent().filter(|&p| elements.contains(p));
    let parent_content_position = offset_parent
      .and_then(|p| elements.get(p))
      .map(|p| p.layout_box().position(BoxArea::Content))
      .unwrap_or(Point::ZERO);

    let name = elements.debug_name(root);
    log::debug!("layout pass start: {name} in {containing_block}");

    let solved = {
      let mut tree = LayoutTree::build(elements, self.fonts.as_ref(), root, containing_block)?;
      tree.compute(containing_block, self.config.pixel_snapping);
      tree.into_solved()
    };

    LayoutApplier::new(&solved, self.fonts.as_ref())
      .with_trace_geometry(self.config.trace_geometry)
      .apply(
        elements,
        root,
        solved.root_element_node(),
        offset_parent,
        parent_content_position,
      );
    drop(solved);

    elements.clamp_scroll_offset_recursive(root)?;

    if let Some(element) = elements.get(root) {
      log::debug!(
        "layout pass end: {name} border box {} overflow {}",
        element.layout_box().size(BoxArea::Border),
        element.scrollable_overflow()
      );
    }
    Ok(())
  }
}
