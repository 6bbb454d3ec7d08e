//! Text measurement
//!
//! - [`font`]: the font service interface and a fixed-advance implementation
//! - [`line_break`]: UAX #14 break opportunities

pub mod font;
pub mod line_break;

pub use font::{
  FixedAdvanceFontEngine, FixedFace, FontEngine, FontFaceHandle, FontMetrics, GeneratedLine,
};
