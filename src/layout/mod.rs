//! Layout algorithms
//!
//! This module turns a styled element subtree into pixel geometry. Flex
//! layout itself is delegated to Taffy; this module owns everything around
//! it.
//!
//! # Architecture
//!
//! A pass run by [`LayoutEngine::format_element`]:
//!
//! 1. **Tree building**: mirror the live element subtree as a pass-scoped
//!    solver tree under a node standing in for the containing block
//! 2. **Style adaptation**: translate each element's computed style into a
//!    Taffy style, resolving direction
//! 3. **Solving**: run Taffy, which calls back into leaf measurement for
//!    text and replaced content
//! 4. **Application**: write boxes, offsets, overflow and text lines back
//!    onto the elements
//!
//! # Module Organization
//!
//! - `style_adapter.rs` - Computed style to Taffy style
//! - `measure.rs` - Text and replaced leaf measurement
//! - `tree_builder.rs` - Pass-scoped solver tree
//! - `solver.rs` - Taffy tree traits for the solver tree
//! - `apply.rs` - Solved geometry back onto elements
//! - `engine.rs` - Pass orchestration and configuration
//! - `box_builder.rs` - Box resolution outside a pass
//! - `taffy_integration.rs` - Solver callback counters
//!
//! # Example
//!
//! ```
//! use boxlayout::layout::LayoutEngine;
//! use boxlayout::style::ComputedStyle;
//! use boxlayout::text::FixedAdvanceFontEngine;
//! use boxlayout::tree::ElementTree;
//! use boxlayout::Size;
//! use std::sync::Arc;
//!
//! let mut elements = ElementTree::new();
//! let root = elements.create_element(ComputedStyle::default());
//! let engine = LayoutEngine::new(Arc::new(FixedAdvanceFontEngine::new()));
//! engine.format_element(&mut elements, root, Size::new(1024.0, 768.0))?;
//! # Ok::<(), boxlayout::Error>(())
//! ```

pub mod apply;
pub mod box_builder;
pub mod engine;
pub mod measure;
pub mod solver;
pub mod style_adapter;
pub mod taffy_integration;
pub mod tree_builder;

pub use apply::{element_box_from_layout, generate_text_lines, LayoutApplier, SolvedLayout};
pub use box_builder::{
  build_box, build_box_for_style, is_scroll_container, BuildBoxMode, AUTO_SIZE,
};
pub use engine::{LayoutConfig, LayoutEngine};
pub use measure::{measure_replaced, measure_text, text_baseline, MeasureConstraint, MeasureMode};
pub use style_adapter::{combine_overflow, computed_style_to_taffy, LayoutDirection};
pub use taffy_integration::{reset_solver_counters, solver_counters, SolverCounters};
pub use tree_builder::{LayoutNode, LayoutTree};
