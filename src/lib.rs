//! Flex-based box layout for an embeddable HTML/CSS UI toolkit
//!
//! Elements live in an [`ElementTree`] and carry an immutable computed style.
//! A [`LayoutEngine`] lays out any element's subtree inside a containing
//! block and writes the resulting geometry back onto the elements: a box per
//! element, its border-box offset from its offset parent, its scrollable
//! overflow, and the wrapped lines of text elements.
//!
//! Text is measured through the [`FontEngine`](text::FontEngine) trait so
//! embedders can plug in their own shaper.

pub mod debug;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod style;
pub mod text;
pub mod tree;

pub use error::{Error, LayoutError, Result, TreeError};
pub use geometry::{EdgeOffsets, Point, Size};
pub use layout::{build_box, BuildBoxMode, LayoutConfig, LayoutEngine};
pub use style::ComputedStyle;
pub use text::{FixedAdvanceFontEngine, FontEngine, FontFaceHandle, FontMetrics};
pub use tree::{BoxArea, BoxEdge, ElementBox, ElementId, ElementTree};
