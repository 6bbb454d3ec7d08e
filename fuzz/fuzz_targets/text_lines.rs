#![no_main]

use arbitrary::Arbitrary;
use boxlayout::layout::generate_text_lines;
use boxlayout::layout::measure::{measure_text, MeasureConstraint, MAX_LINE_ITERATIONS};
use boxlayout::text::{FixedAdvanceFontEngine, FixedFace, FontMetrics};
use libfuzzer_sys::fuzz_target;

const MAX_LEN: usize = 16 * 1024;

#[derive(Arbitrary, Debug)]
struct TextCase {
  text: String,
  ascent: f32,
  descent: f32,
  advance: f32,
  line_height: f32,
  available_width: f32,
  with_face: bool,
}

fuzz_target!(|case: TextCase| {
  let text: String = case.text.chars().take(MAX_LEN).collect();
  let mut fonts = FixedAdvanceFontEngine::new();
  let face = fonts.add_face(FixedFace {
    metrics: FontMetrics::new(case.ascent, case.descent),
    advance: case.advance,
  });
  let face = case.with_face.then_some(face);

  let lines = generate_text_lines(&fonts, &text, face, case.line_height, case.available_width);
  assert!(!lines.is_empty());
  assert!(lines.len() <= MAX_LINE_ITERATIONS);

  let size = measure_text(
    &fonts,
    &text,
    face,
    MeasureConstraint::at_most(case.available_width),
    MeasureConstraint::UNDEFINED,
  );
  assert!(!(size.width < 0.0) && !(size.height < 0.0));
});
