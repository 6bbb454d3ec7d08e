//! Font service consumed by layout
//!
//! Layout never shapes text itself. It asks a [`FontEngine`] for vertical
//! metrics and for one line at a time, starting from an advancing byte
//! offset, until the text is exhausted.
//!
//! [`FixedAdvanceFontEngine`] is a deterministic implementation where every
//! column of text advances by the same amount. It is what tests and benches
//! use, and is good enough for embedders that render monospace glyph atlases.

use crate::text::line_break::{break_opportunities, visible_len};
use rustc_hash::FxHashMap;
use unicode_width::UnicodeWidthStr;

/// Opaque identifier of a loaded font face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontFaceHandle(pub u32);

/// Vertical metrics of a font face
///
/// Some backends report descent as a negative number. Layout always uses
/// its magnitude.
///
/// # Examples
///
/// ```
/// use boxlayout::text::FontMetrics;
///
/// let metrics = FontMetrics::new(12.0, -4.0);
/// assert_eq!(metrics.font_height(), 16.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
  pub ascent: f32,
  pub descent: f32,
}

impl FontMetrics {
  /// Metrics used when a face is missing
  pub const ZERO: Self = Self {
    ascent: 0.0,
    descent: 0.0,
  };

  pub const fn new(ascent: f32, descent: f32) -> Self {
    Self { ascent, descent }
  }

  /// Tight line box height: ascent plus descent magnitude, floored at 0
  pub fn font_height(&self) -> f32 {
    (self.ascent + self.descent.abs()).max(0.0)
  }
}

/// One line produced by [`FontEngine::generate_line`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratedLine {
  /// Visible text of the line, without hanging whitespace or terminators
  pub text: String,
  /// Bytes of source text consumed, including hanging whitespace
  pub consumed: usize,
  /// Advance width of `text`
  pub width: f32,
  /// True when the source text is exhausted after this line
  pub reached_end: bool,
}

/// Text measurement interface
///
/// Implementations must be usable from the solver's measure callback, which
/// holds only a shared reference.
pub trait FontEngine: Send + Sync {
  /// Vertical metrics of `face`, or `None` if the face is unknown
  fn font_metrics(&self, face: FontFaceHandle) -> Option<FontMetrics>;

  /// Advance width of `text` set in `face`
  fn string_width(&self, face: FontFaceHandle, text: &str) -> f32;

  /// Lays out the next line of `text` starting at byte offset `begin`
  ///
  /// The line takes as many UAX #14 segments as fit in `max_width`, and
  /// always at least one while text remains, so an overlong word overflows
  /// instead of stalling. A mandatory break always ends the line.
  ///
  /// Segment widths are summed, so `string_width` must be additive across
  /// break opportunities.
  fn generate_line(
    &self,
    face: FontFaceHandle,
    text: &str,
    begin: usize,
    max_width: f32,
  ) -> GeneratedLine {
    let rest = match text.get(begin..) {
      Some(rest) if !rest.is_empty() => rest,
      _ => {
        return GeneratedLine {
          reached_end: true,
          ..GeneratedLine::default()
        }
      }
    };

    // Each segment is measured once. `consumed_width` covers the consumed
    // prefix including hanging whitespace, `width` only its visible text.
    let mut consumed = 0;
    let mut visible_end = 0;
    let mut width = 0.0;
    let mut consumed_width = 0.0;
    for brk in break_opportunities(rest) {
      let segment = &rest[consumed..brk.byte_offset];
      let segment_visible = visible_len(segment);
      let (candidate_end, candidate_width, visible_width) = if segment_visible == 0 {
        (visible_end, width, 0.0)
      } else {
        let visible_width = self.string_width(face, &segment[..segment_visible]);
        (
          consumed + segment_visible,
          consumed_width + visible_width,
          visible_width,
        )
      };
      if consumed > 0 && candidate_width > max_width {
        break;
      }
      consumed_width += visible_width + self.string_width(face, &segment[segment_visible..]);
      consumed = brk.byte_offset;
      visible_end = candidate_end;
      width = candidate_width;
      if brk.is_mandatory() {
        break;
      }
    }

    GeneratedLine {
      text: rest[..visible_end].to_string(),
      consumed,
      width,
      reached_end: consumed >= rest.len(),
    }
  }
}

/// Metrics of one face registered with [`FixedAdvanceFontEngine`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFace {
  pub metrics: FontMetrics,
  /// Advance per text column; wide CJK characters take two columns
  pub advance: f32,
}

/// Font engine with a constant advance per column
///
/// # Examples
///
/// ```
/// use boxlayout::text::{FixedAdvanceFontEngine, FixedFace, FontEngine, FontMetrics};
///
/// let mut fonts = FixedAdvanceFontEngine::new();
/// let face = fonts.add_face(FixedFace {
///   metrics: FontMetrics::new(8.0, -2.0),
///   advance: 5.0,
/// });
/// assert_eq!(fonts.string_width(face, "abcd"), 20.0);
/// let line = fonts.generate_line(face, "aa bb cc", 0, 26.0);
/// assert_eq!(line.text, "aa bb");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedAdvanceFontEngine {
  faces: FxHashMap<FontFaceHandle, FixedFace>,
  next_id: u32,
}

impl FixedAdvanceFontEngine {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a face and returns its handle
  pub fn add_face(&mut self, face: FixedFace) -> FontFaceHandle {
    let handle = FontFaceHandle(self.next_id);
    self.next_id += 1;
    self.faces.insert(handle, face);
    handle
  }

  pub fn face(&self, handle: FontFaceHandle) -> Option<&FixedFace> {
    self.faces.get(&handle)
  }
}

impl FontEngine for FixedAdvanceFontEngine {
  fn font_metrics(&self, face: FontFaceHandle) -> Option<FontMetrics> {
    self.faces.get(&face).map(|f| f.metrics)
  }

  fn string_width(&self, face: FontFaceHandle, text: &str) -> f32 {
    match self.faces.get(&face) {
      Some(f) => f.advance * text.width() as f32,
      None => 0.0,
    }
  }
}
