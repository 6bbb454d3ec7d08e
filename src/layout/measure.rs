//! Leaf measurement
//!
//! The solver asks leaves for their size under a width and a height
//! constraint, each in one of three modes. Text leaves run trial line
//! breaking; replaced leaves resolve their intrinsic size and aspect ratio.
//! Text leaves also report a first baseline so `align-items: baseline` lines
//! up glyphs rather than box bottoms.

use crate::geometry::Size;
use crate::text::{FontEngine, FontFaceHandle, FontMetrics};
use crate::tree::{ElementId, IntrinsicDimensions};
use taffy::style::AvailableSpace;

/// Upper bound on lines requested from the font engine for one element
pub const MAX_LINE_ITERATIONS: usize = 4096;

/// How a measurement constraint must be honored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureMode {
  /// The size is exactly the constraint
  Exactly,
  /// The size may not exceed the constraint
  AtMost,
  /// No constraint
  Undefined,
}

/// One axis of a measurement request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureConstraint {
  pub value: f32,
  pub mode: MeasureMode,
}

impl MeasureConstraint {
  pub const UNDEFINED: Self = Self {
    value: f32::NAN,
    mode: MeasureMode::Undefined,
  };

  pub fn exactly(value: f32) -> Self {
    Self {
      value,
      mode: MeasureMode::Exactly,
    }
  }

  pub fn at_most(value: f32) -> Self {
    Self {
      value,
      mode: MeasureMode::AtMost,
    }
  }

  /// Exactly and at-most constraints bound the axis
  pub fn is_definite(self) -> bool {
    matches!(self.mode, MeasureMode::Exactly | MeasureMode::AtMost)
  }

  /// Applies the constraint to a natural size
  ///
  /// # Examples
  ///
  /// ```
  /// use boxlayout::layout::measure::MeasureConstraint;
  ///
  /// assert_eq!(MeasureConstraint::exactly(40.0).clamp(100.0), 40.0);
  /// assert_eq!(MeasureConstraint::at_most(40.0).clamp(30.0), 30.0);
  /// assert_eq!(MeasureConstraint::UNDEFINED.clamp(100.0), 100.0);
  /// ```
  pub fn clamp(self, natural: f32) -> f32 {
    match self.mode {
      MeasureMode::Exactly => self.value.max(0.0),
      MeasureMode::AtMost => natural.min(self.value.max(0.0)),
      MeasureMode::Undefined => natural,
    }
  }

  /// Width available for line breaking: unbounded unless definite
  pub fn wrap_width(self) -> f32 {
    if self.is_definite() {
      self.value.max(0.0)
    } else {
      f32::INFINITY
    }
  }
}

/// Maps one axis of a Taffy measure request to a measure constraint
///
/// A known dimension is exact, a definite available space is an upper bound,
/// max-content is unconstrained. Min-content is an upper bound of zero, so
/// leaves never impose an automatic minimum size on flex items.
pub fn constraint_from_taffy(known: Option<f32>, available: AvailableSpace) -> MeasureConstraint {
  match (known, available) {
    (Some(value), _) => MeasureConstraint::exactly(value),
    (None, AvailableSpace::Definite(value)) => MeasureConstraint::at_most(value),
    (None, AvailableSpace::MinContent) => MeasureConstraint::at_most(0.0),
    (None, AvailableSpace::MaxContent) => MeasureConstraint::UNDEFINED,
  }
}

/// Measurement strategy of a solver leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafMeasure {
  /// Wrapped text; also reports a baseline
  Text(ElementId),
  /// Replaced content with intrinsic dimensions
  Replaced(ElementId),
}

/// Metrics of `face`, zero when the face is missing or unknown
pub fn face_metrics(fonts: &dyn FontEngine, face: Option<FontFaceHandle>) -> FontMetrics {
  face
    .and_then(|face| fonts.font_metrics(face))
    .unwrap_or(FontMetrics::ZERO)
}

/// Offset from the top of a line box to its baseline
///
/// Half the leading goes above the glyphs: `ascent + (line_height -
/// font_height) / 2`, with both heights floored at 0 and negative leading
/// treated as none.
pub fn text_baseline(metrics: FontMetrics, line_height: f32) -> f32 {
  let leading = (line_height.max(0.0) - metrics.font_height()).max(0.0);
  leading * 0.5 + metrics.ascent
}

/// Natural size of wrapped text under the given constraints
///
/// Lines are requested until the text is exhausted, a request consumes
/// nothing, or [`MAX_LINE_ITERATIONS`] is reached. Empty text still measures
/// one line tall.
pub fn measure_text(
  fonts: &dyn FontEngine,
  text: &str,
  face: Option<FontFaceHandle>,
  width: MeasureConstraint,
  height: MeasureConstraint,
) -> Size {
  let metrics = face_metrics(fonts, face);
  let wrap_width = width.wrap_width();

  let mut max_line_width: f32 = 0.0;
  let mut num_lines: usize = 0;
  if let Some(face) = face {
    let mut begin = 0;
    for iteration in 0..MAX_LINE_ITERATIONS {
      let line = fonts.generate_line(face, text, begin, wrap_width);
      if line.consumed == 0 {
        break;
      }
      max_line_width = max_line_width.max(line.width);
      num_lines += 1;
      begin += line.consumed;
      if line.reached_end {
        break;
      }
      if iteration + 1 == MAX_LINE_ITERATIONS {
        log::warn!(
          "text measurement stopped after {} lines at byte {} of {}",
          MAX_LINE_ITERATIONS,
          begin,
          text.len()
        );
      }
    }
  }

  let natural = Size::new(
    max_line_width,
    num_lines.max(1) as f32 * metrics.font_height(),
  );
  Size::new(width.clamp(natural.width), height.clamp(natural.height)).floor_zero()
}

/// Size of replaced content under the given constraints
///
/// When exactly one axis is constrained and the content has an aspect
/// ratio, the other axis follows the constrained one through the ratio.
pub fn measure_replaced(
  intrinsic: IntrinsicDimensions,
  width: MeasureConstraint,
  height: MeasureConstraint,
) -> Size {
  let mut size = Size::new(width.clamp(intrinsic.width), height.clamp(intrinsic.height));

  let ratio = intrinsic.ratio;
  if ratio > 0.0 {
    match (width.is_definite(), height.is_definite()) {
      (true, false) => size.height = size.width / ratio,
      (false, true) => size.width = size.height * ratio,
      _ => {}
    }
  }

  size.floor_zero()
}
