//! Line break opportunity detection using Unicode Line Breaking Algorithm (UAX #14)
//!
//! Thin wrapper over the `unicode-linebreak` crate used by
//! [`FontEngine::generate_line`](crate::text::FontEngine::generate_line) to
//! find where a line may end.
//!
//! # Break Types
//!
//! - **Mandatory**: The line MUST break here (newline, paragraph separator,
//!   end of text)
//! - **Allowed**: The line CAN break here (soft wrap opportunity)
//!
//! # Example
//!
//! ```rust
//! use boxlayout::text::line_break::break_opportunities;
//!
//! assert!(break_opportunities("Hello world").any(|b| b.byte_offset == 6));
//! ```
//!
//! # References
//!
//! - Unicode Standard Annex #14: <https://www.unicode.org/reports/tr14/>

use unicode_linebreak::{linebreaks, BreakOpportunity as UnicodeBreakOpportunity};

/// Type of line break opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakType {
  /// The line must break here
  Mandatory,
  /// The line may break here if needed
  Allowed,
}

/// A break opportunity in text
///
/// `byte_offset` is the position AFTER the character that allows the break,
/// so in "Hello world" the break after the space sits at 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakOpportunity {
  pub byte_offset: usize,
  pub break_type: BreakType,
}

impl BreakOpportunity {
  #[inline]
  pub fn new(byte_offset: usize, break_type: BreakType) -> Self {
    Self {
      byte_offset,
      break_type,
    }
  }

  #[inline]
  pub fn is_mandatory(&self) -> bool {
    self.break_type == BreakType::Mandatory
  }
}

/// Break opportunities in `text` in byte offset order
///
/// The iterator is lazy: a caller that stops at the first overflowing break
/// only pays for the text scanned so far. Non-empty text always ends with a
/// mandatory break at `text.len()`.
pub fn break_opportunities(text: &str) -> impl Iterator<Item = BreakOpportunity> + '_ {
  linebreaks(text).map(|(byte_offset, opportunity)| {
    let break_type = match opportunity {
      UnicodeBreakOpportunity::Mandatory => BreakType::Mandatory,
      UnicodeBreakOpportunity::Allowed => BreakType::Allowed,
    };
    BreakOpportunity::new(byte_offset, break_type)
  })
}

/// Byte length of `segment` once trailing whitespace and line terminators are
/// dropped. Hanging whitespace never contributes to a line's width
pub fn visible_len(segment: &str) -> usize {
  segment.trim_end_matches(char::is_whitespace).len()
}
