//! Element tree
//!
//! The long-lived tree the layout pass reads styles and children from and
//! writes geometry back onto:
//! - [`ElementTree`]: arena owning every [`Element`]
//! - [`ElementBox`]: margin/border/padding/content geometry of one element
//!
//! ```text
//! ElementTree ──format_element──▶ boxes, offsets, overflow, text lines
//! ```

pub mod element;
pub mod element_box;
pub mod element_tree;

pub use element::{
  Element, ElementId, ElementKind, IntrinsicDimensions, TextContent, TextLine,
};
pub use element_box::{BoxArea, BoxEdge, ElementBox};
pub use element_tree::ElementTree;
