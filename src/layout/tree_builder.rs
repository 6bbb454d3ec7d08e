//! Pass-scoped solver tree
//!
//! [`LayoutTree`] mirrors the element subtree being formatted as a flat arena
//! of [`LayoutNode`]s indexed by position. Node 0 is a synthetic flex box the
//! size of the containing block; the formatted element hangs under it. The
//! arena borrows the element tree and font engine for the duration of one
//! pass and is dropped when the pass ends.

use crate::error::{LayoutError, Result};
use crate::geometry::Size;
use crate::layout::measure::LeafMeasure;
use crate::layout::style_adapter::{
  computed_style_to_taffy, containing_block_style, to_layout_direction, ContainerAxes,
  LayoutDirection,
};
use crate::text::FontEngine;
use crate::tree::{Element, ElementId, ElementKind, ElementTree};
use taffy::{Cache, Layout, NodeId};

/// One node of the solver tree
#[derive(Debug, Clone)]
pub struct LayoutNode {
  pub(crate) style: taffy::Style,
  /// Element this node mirrors; `None` only for the synthetic root
  pub(crate) element: Option<ElementId>,
  pub(crate) measure: Option<LeafMeasure>,
  pub(crate) children: Vec<NodeId>,
  /// The element's own direction, before inheritance
  pub(crate) direction: LayoutDirection,
  pub(crate) cache: Cache,
  pub(crate) unrounded_layout: Layout,
  pub(crate) final_layout: Layout,
}

impl LayoutNode {
  fn new(style: taffy::Style, element: Option<ElementId>) -> Self {
    Self {
      style,
      element,
      measure: None,
      children: Vec::new(),
      direction: LayoutDirection::Inherit,
      cache: Cache::new(),
      unrounded_layout: Layout::with_order(0),
      final_layout: Layout::with_order(0),
    }
  }

  pub fn element(&self) -> Option<ElementId> {
    self.element
  }

  pub fn measure(&self) -> Option<LeafMeasure> {
    self.measure
  }

  pub fn children(&self) -> &[NodeId] {
    &self.children
  }

  pub fn direction(&self) -> LayoutDirection {
    self.direction
  }

  pub fn style(&self) -> &taffy::Style {
    &self.style
  }
}

/// Solver tree for one layout pass
pub struct LayoutTree<'a> {
  pub(crate) nodes: Vec<LayoutNode>,
  pub(crate) elements: &'a ElementTree,
  pub(crate) fonts: &'a dyn FontEngine,
  root_element_node: NodeId,
  pass_direction: LayoutDirection,
}

/// Live children of `id` in document order; removed ids are skipped
pub(crate) fn live_children<'t>(
  elements: &'t ElementTree,
  element: &'t Element,
) -> impl Iterator<Item = ElementId> + 't {
  element
    .children()
    .iter()
    .copied()
    .filter(move |&child| elements.contains(child))
}

/// Leaf strategy of an element, or `None` when its children are laid out
///
/// Only childless text and childless replaced content with valid intrinsic
/// dimensions are leaves.
fn leaf_measure(elements: &ElementTree, id: ElementId, element: &Element) -> Option<LeafMeasure> {
  if live_children(elements, element).next().is_some() {
    return None;
  }
  match element.kind() {
    ElementKind::Text(_) => Some(LeafMeasure::Text(id)),
    ElementKind::Replaced(_) if element.intrinsic_dimensions().is_some() => {
      Some(LeafMeasure::Replaced(id))
    }
    _ => None,
  }
}

impl<'a> LayoutTree<'a> {
  /// Index of the synthetic containing-block node
  pub const CONTAINING_BLOCK: NodeId = NodeId::new(0);

  /// Builds the solver tree for `root` inside a containing block
  pub fn build(
    elements: &'a ElementTree,
    fonts: &'a dyn FontEngine,
    root: ElementId,
    containing_block: Size,
  ) -> Result<Self> {
    let root_element = elements
      .get(root)
      .ok_or(LayoutError::MissingElement { id: root.index() })?;
    let pass_direction = to_layout_direction(root_element.style().direction).or_ltr();

    let mut wrapper = LayoutNode::new(
      containing_block_style(containing_block.width, containing_block.height, pass_direction),
      None,
    );
    wrapper.direction = pass_direction;

    let mut tree = Self {
      nodes: vec![wrapper],
      elements,
      fonts,
      root_element_node: Self::CONTAINING_BLOCK,
      pass_direction,
    };
    let root_node = tree.build_node(root, root_element, pass_direction, None);
    tree.nodes[0].children.push(root_node);
    tree.root_element_node = root_node;
    Ok(tree)
  }

  fn build_node(
    &mut self,
    id: ElementId,
    element: &'a Element,
    inherited: LayoutDirection,
    parent: Option<ContainerAxes>,
  ) -> NodeId {
    let own_direction = to_layout_direction(element.style().direction);
    let resolved = own_direction.resolve(inherited);

    let node_id = NodeId::from(self.nodes.len());
    self.nodes.push(LayoutNode::new(
      computed_style_to_taffy(element.style(), resolved, parent),
      Some(id),
    ));

    let measure = leaf_measure(self.elements, id, element);
    if measure.is_none() {
      let axes = ContainerAxes {
        flex_direction: element.style().flex_direction,
        direction: resolved,
      };
      let elements = self.elements;
      for child in live_children(elements, element) {
        if let Some(child_element) = elements.get(child) {
          let child_node = self.build_node(child, child_element, resolved, Some(axes));
          self.nodes[usize::from(node_id)].children.push(child_node);
        }
      }
    }

    let node = &mut self.nodes[usize::from(node_id)];
    node.measure = measure;
    node.direction = own_direction;
    node_id
  }

  /// Node mirroring the formatted element
  pub fn root_element_node(&self) -> NodeId {
    self.root_element_node
  }

  /// Direction the pass runs in
  pub fn pass_direction(&self) -> LayoutDirection {
    self.pass_direction
  }

  pub fn node(&self, id: NodeId) -> Option<&LayoutNode> {
    self.nodes.get(usize::from(id))
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Solved geometry of a node after [`LayoutTree::compute`]
  pub fn layout(&self, id: NodeId) -> Option<&Layout> {
    self.node(id).map(|node| &node.final_layout)
  }
}
