//! Taffy trait bindings for [`LayoutTree`]
//!
//! The arena implements Taffy's low-level tree traits directly, so node ids
//! are arena indices and leaf measurement can read the element tree without
//! any per-node context storage.

use crate::layout::measure::{
  constraint_from_taffy, face_metrics, measure_replaced, measure_text, text_baseline, LeafMeasure,
};
use crate::layout::taffy_integration::{record_flex_pass, record_measure, MeasureKind};
use crate::layout::tree_builder::LayoutTree;
use crate::tree::ElementKind;
use taffy::prelude::*;
use taffy::{
  compute_cached_layout, compute_flexbox_layout, compute_hidden_layout, compute_leaf_layout,
  compute_root_layout, round_layout, CacheTree, Layout, LayoutFlexboxContainer, LayoutInput,
  LayoutOutput, LayoutPartialTree, RoundTree, RunMode, TraversePartialTree, TraverseTree,
};

/// Iterator over a node's children
pub struct ChildIter<'a> {
  inner: std::slice::Iter<'a, NodeId>,
}

impl Iterator for ChildIter<'_> {
  type Item = NodeId;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next().copied()
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl ExactSizeIterator for ChildIter<'_> {}

impl LayoutTree<'_> {
  /// Runs the solver over the whole tree
  ///
  /// With `pixel_snapping` the final layouts are rounded to whole pixels;
  /// otherwise the unrounded layouts are used as is.
  pub fn compute(&mut self, containing_block: crate::geometry::Size, pixel_snapping: bool) {
    let available = Size {
      width: AvailableSpace::Definite(containing_block.width),
      height: AvailableSpace::Definite(containing_block.height),
    };
    compute_root_layout(self, Self::CONTAINING_BLOCK, available);
    if pixel_snapping {
      round_layout(self, Self::CONTAINING_BLOCK);
    } else {
      for node in &mut self.nodes {
        node.final_layout = node.unrounded_layout;
      }
    }
  }

  fn measure_leaf(
    &self,
    leaf: LeafMeasure,
    known: Size<Option<f32>>,
    available: Size<AvailableSpace>,
  ) -> Size<f32> {
    let width = constraint_from_taffy(known.width, available.width);
    let height = constraint_from_taffy(known.height, available.height);
    let size = match leaf {
      LeafMeasure::Text(id) => {
        record_measure(MeasureKind::Text);
        match self.elements.get(id).and_then(|e| e.text()) {
          Some(content) => measure_text(
            self.fonts,
            &content.text,
            content.font_face,
            width,
            height,
          ),
          None => crate::geometry::Size::ZERO,
        }
      }
      LeafMeasure::Replaced(id) => {
        record_measure(MeasureKind::Replaced);
        match self.elements.get(id).and_then(|e| e.intrinsic_dimensions()) {
          Some(intrinsic) => measure_replaced(intrinsic, width, height),
          None => crate::geometry::Size::ZERO,
        }
      }
    };
    Size {
      width: size.width,
      height: size.height,
    }
  }

  /// Baseline of a leaf: text reports its first line's baseline, anything
  /// else its full height
  fn leaf_baseline(&self, leaf: LeafMeasure, height: f32) -> f32 {
    let LeafMeasure::Text(id) = leaf else {
      return height;
    };
    let Some(element) = self.elements.get(id) else {
      return height;
    };
    match element.kind() {
      ElementKind::Text(content) => text_baseline(
        face_metrics(self.fonts, content.font_face),
        element.style().line_height,
      ),
      _ => height,
    }
  }
}

impl TraversePartialTree for LayoutTree<'_> {
  type ChildIter<'a>
    = ChildIter<'a>
  where
    Self: 'a;

  fn child_ids(&self, parent_node_id: NodeId) -> Self::ChildIter<'_> {
    let children = self
      .nodes
      .get(usize::from(parent_node_id))
      .map(|node| node.children.as_slice())
      .unwrap_or(&[]);
    ChildIter {
      inner: children.iter(),
    }
  }

  fn child_count(&self, parent_node_id: NodeId) -> usize {
    self
      .nodes
      .get(usize::from(parent_node_id))
      .map_or(0, |node| node.children.len())
  }

  fn get_child_id(&self, parent_node_id: NodeId, child_index: usize) -> NodeId {
    self.nodes[usize::from(parent_node_id)].children[child_index]
  }
}

impl TraverseTree for LayoutTree<'_> {}

impl LayoutPartialTree for LayoutTree<'_> {
  type CoreContainerStyle<'a>
    = &'a Style
  where
    Self: 'a;

  fn get_core_container_style(&self, node_id: NodeId) -> Self::CoreContainerStyle<'_> {
    &self.nodes[usize::from(node_id)].style
  }

  fn set_unrounded_layout(&mut self, node_id: NodeId, layout: &Layout) {
    if let Some(node) = self.nodes.get_mut(usize::from(node_id)) {
      node.unrounded_layout = *layout;
    }
  }

  fn compute_child_layout(&mut self, node_id: NodeId, inputs: LayoutInput) -> LayoutOutput {
    compute_cached_layout(self, node_id, inputs, |tree, node_id, inputs| {
      let idx = usize::from(node_id);
      if tree.nodes[idx].style.display == Display::None {
        return compute_hidden_layout(tree, node_id);
      }

      let measure = tree.nodes[idx].measure;
      let has_children = !tree.nodes[idx].children.is_empty();
      match measure {
        Some(leaf) => {
          let style = &tree.nodes[idx].style;
          let mut output = compute_leaf_layout(inputs, style, |known, available| {
            tree.measure_leaf(leaf, known, available)
          });
          if matches!(leaf, LeafMeasure::Text(_)) {
            output.first_baselines.y = Some(tree.leaf_baseline(leaf, output.size.height));
          }
          output
        }
        None if has_children => {
          record_flex_pass();
          compute_flexbox_layout(tree, node_id, inputs)
        }
        None => compute_leaf_layout(inputs, &tree.nodes[idx].style, |_, _| Size::ZERO),
      }
    })
  }
}

impl CacheTree for LayoutTree<'_> {
  fn cache_get(
    &self,
    node_id: NodeId,
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    run_mode: RunMode,
  ) -> Option<LayoutOutput> {
    self
      .nodes
      .get(usize::from(node_id))
      .and_then(|node| node.cache.get(known_dimensions, available_space, run_mode))
  }

  fn cache_store(
    &mut self,
    node_id: NodeId,
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    run_mode: RunMode,
    layout_output: LayoutOutput,
  ) {
    if let Some(node) = self.nodes.get_mut(usize::from(node_id)) {
      node
        .cache
        .store(known_dimensions, available_space, run_mode, layout_output);
    }
  }

  fn cache_clear(&mut self, node_id: NodeId) {
    if let Some(node) = self.nodes.get_mut(usize::from(node_id)) {
      node.cache.clear();
    }
  }
}

impl LayoutFlexboxContainer for LayoutTree<'_> {
  type FlexboxContainerStyle<'a>
    = &'a Style
  where
    Self: 'a;
  type FlexboxItemStyle<'a>
    = &'a Style
  where
    Self: 'a;

  fn get_flexbox_container_style(&self, node_id: NodeId) -> Self::FlexboxContainerStyle<'_> {
    &self.nodes[usize::from(node_id)].style
  }

  fn get_flexbox_child_style(&self, child_node_id: NodeId) -> Self::FlexboxItemStyle<'_> {
    &self.nodes[usize::from(child_node_id)].style
  }
}

impl RoundTree for LayoutTree<'_> {
  fn get_unrounded_layout(&self, node_id: NodeId) -> &Layout {
    &self.nodes[usize::from(node_id)].unrounded_layout
  }

  fn set_final_layout(&mut self, node_id: NodeId, layout: &Layout) {
    if let Some(node) = self.nodes.get_mut(usize::from(node_id)) {
      node.final_layout = *layout;
    }
  }
}
