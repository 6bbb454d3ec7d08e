//! Length values in computed styles
//!
//! By the time a style reaches layout every relative unit (em, vw, calc with
//! absolute terms) has been converted to pixels. What remains is either a
//! pixel length, a percentage of some base the layout pass picks, or `auto`.
//!
//! Percentages are stored as percent values: `Percent(50.0)` means 50%.

/// Max-size values at or above this are CSS `none`
///
/// The cascade writes `f32::MAX` for `max-width: none`; anything this large is
/// never a meaningful constraint.
pub const MAX_SIZE_NONE_THRESHOLD: f32 = 1.0e20;

/// A length or percentage
///
/// # Examples
///
/// ```
/// use boxlayout::style::LengthPercentage;
///
/// assert_eq!(LengthPercentage::Length(12.0).resolve(200.0), 12.0);
/// assert_eq!(LengthPercentage::Percent(25.0).resolve(200.0), 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthPercentage {
  Length(f32),
  Percent(f32),
}

impl LengthPercentage {
  /// Zero pixels
  pub const ZERO: Self = LengthPercentage::Length(0.0);

  /// Maximum-size initial value (`none`)
  pub const NONE: Self = LengthPercentage::Length(f32::MAX);

  pub const fn px(value: f32) -> Self {
    LengthPercentage::Length(value)
  }

  pub const fn percent(value: f32) -> Self {
    LengthPercentage::Percent(value)
  }

  /// Resolves against a percentage base
  pub fn resolve(self, base: f32) -> f32 {
    match self {
      LengthPercentage::Length(v) => v,
      LengthPercentage::Percent(p) => p / 100.0 * base,
    }
  }

  /// True for a pixel length at or above [`MAX_SIZE_NONE_THRESHOLD`]
  pub fn is_none_sentinel(self) -> bool {
    matches!(self, LengthPercentage::Length(v) if v >= MAX_SIZE_NONE_THRESHOLD)
  }
}

impl Default for LengthPercentage {
  fn default() -> Self {
    Self::ZERO
  }
}

/// A length, percentage or `auto`
///
/// # Examples
///
/// ```
/// use boxlayout::style::LengthPercentageAuto;
///
/// assert_eq!(LengthPercentageAuto::Percent(10.0).resolve_or(300.0, -1.0), 30.0);
/// assert_eq!(LengthPercentageAuto::Auto.resolve_or(300.0, -1.0), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LengthPercentageAuto {
  Length(f32),
  Percent(f32),
  #[default]
  Auto,
}

impl LengthPercentageAuto {
  pub const ZERO: Self = LengthPercentageAuto::Length(0.0);

  pub const fn px(value: f32) -> Self {
    LengthPercentageAuto::Length(value)
  }

  pub const fn percent(value: f32) -> Self {
    LengthPercentageAuto::Percent(value)
  }

  pub fn is_auto(self) -> bool {
    matches!(self, LengthPercentageAuto::Auto)
  }

  /// Resolves against a percentage base, returning `None` for `auto`
  pub fn resolve(self, base: f32) -> Option<f32> {
    match self {
      LengthPercentageAuto::Length(v) => Some(v),
      LengthPercentageAuto::Percent(p) => Some(p / 100.0 * base),
      LengthPercentageAuto::Auto => None,
    }
  }

  /// Resolves this value, substituting a default for `auto`
  pub fn resolve_or(self, base: f32, default: f32) -> f32 {
    self.resolve(base).unwrap_or(default)
  }
}

impl From<LengthPercentage> for LengthPercentageAuto {
  fn from(value: LengthPercentage) -> Self {
    match value {
      LengthPercentage::Length(v) => LengthPercentageAuto::Length(v),
      LengthPercentage::Percent(p) => LengthPercentageAuto::Percent(p),
    }
  }
}
