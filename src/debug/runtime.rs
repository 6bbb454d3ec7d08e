use std::collections::HashMap;
use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::PoisonError;
use std::sync::RwLock;

/// Prefix of every environment variable read by [`RuntimeToggles::from_env`]
pub const ENV_PREFIX: &str = "BOXLAYOUT_";

/// Snap solved geometry to whole pixels (default on)
pub const PIXEL_SNAPPING: &str = "BOXLAYOUT_PIXEL_SNAPPING";
/// Log per-element geometry at `trace` level while applying layout
pub const TRACE_LAYOUT: &str = "BOXLAYOUT_TRACE_LAYOUT";

/// Parsed runtime toggles sourced from `BOXLAYOUT_*` environment variables
///
/// Values are captured once (via [`RuntimeToggles::from_env`]) and then reused
/// for every layout pass. Embedders can also construct instances manually to
/// override environment-derived behavior.
#[derive(Debug, Clone, Default)]
pub struct RuntimeToggles {
  raw: HashMap<String, String>,
}

impl RuntimeToggles {
  /// Parse all `BOXLAYOUT_*` environment variables into a toggle map
  pub fn from_env() -> Self {
    let raw = std::env::vars()
      .filter(|(k, _)| k.starts_with(ENV_PREFIX))
      .collect::<HashMap<_, _>>();
    Self { raw }
  }

  /// Construct a toggle set from a provided map of key/value pairs
  pub fn from_map(raw: HashMap<String, String>) -> Self {
    Self { raw }
  }

  /// Returns the raw string value for a toggle, if set
  pub fn get(&self, key: &str) -> Option<&str> {
    self.raw.get(key).map(String::as_str)
  }

  /// Returns true when the toggle is present and truthy (`!= 0`/`false`/`off`)
  pub fn truthy(&self, key: &str) -> bool {
    self.truthy_with_default(key, false)
  }

  /// Returns true when the toggle is present and truthy, otherwise the provided default
  pub fn truthy_with_default(&self, key: &str, default: bool) -> bool {
    self
      .get(key)
      .map(|v| !matches_ignore_case(v, &["0", "false", "off", "no"]))
      .unwrap_or(default)
  }
}

fn matches_ignore_case(value: &str, candidates: &[&str]) -> bool {
  let lower = value.trim().to_ascii_lowercase();
  candidates.iter().any(|c| lower == *c)
}

static ACTIVE_TOGGLES: OnceLock<RwLock<Arc<RuntimeToggles>>> = OnceLock::new();

fn active() -> &'static RwLock<Arc<RuntimeToggles>> {
  ACTIVE_TOGGLES.get_or_init(|| RwLock::new(Arc::new(RuntimeToggles::from_env())))
}

/// Returns the currently active runtime toggles
///
/// Defaults to `RuntimeToggles::from_env()` if no overrides are installed.
pub fn runtime_toggles() -> Arc<RuntimeToggles> {
  active()
    .read()
    .unwrap_or_else(PoisonError::into_inner)
    .clone()
}

/// Guard that restores the previous active toggles when dropped
pub struct RuntimeTogglesGuard {
  previous: Arc<RuntimeToggles>,
}

impl Drop for RuntimeTogglesGuard {
  fn drop(&mut self) {
    let mut guard = active().write().unwrap_or_else(PoisonError::into_inner);
    *guard = self.previous.clone();
  }
}

/// Installs `toggles` as the active set until the returned guard is dropped.
pub fn set_runtime_toggles(toggles: Arc<RuntimeToggles>) -> RuntimeTogglesGuard {
  let mut guard = active().write().unwrap_or_else(PoisonError::into_inner);
  let previous = std::mem::replace(&mut *guard, toggles);
  RuntimeTogglesGuard { previous }
}
