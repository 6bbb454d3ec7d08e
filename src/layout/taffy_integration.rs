//! Instrumentation hooks for Taffy-backed layout
//!
//! Lightweight counters that track how often the solver calls back into
//! leaf measurement and how many flex containers it lays out. The counters
//! are compiled only in debug/test builds to avoid any release overhead.
//! Tests use them to check that text is measured through the leaf callback
//! and that repeated queries hit Taffy's cache.

#[cfg(any(test, debug_assertions))]
use std::cell::RefCell;

/// Count of solver callbacks on the current thread
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolverCounters {
  /// Text leaf measurements
  pub text_measures: u64,
  /// Replaced leaf measurements
  pub replaced_measures: u64,
  /// Flex container layouts that missed the cache
  pub flex_passes: u64,
}

/// Which leaf kind was measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MeasureKind {
  Text,
  Replaced,
}

#[cfg(any(test, debug_assertions))]
thread_local! {
  static COUNTERS: RefCell<SolverCounters> = RefCell::new(SolverCounters::default());
}

/// Records a leaf measurement. No-ops in release builds.
#[inline]
pub(crate) fn record_measure(_kind: MeasureKind) {
  #[cfg(any(test, debug_assertions))]
  COUNTERS.with(|counts| {
    let mut counts = counts.borrow_mut();
    match _kind {
      MeasureKind::Text => counts.text_measures += 1,
      MeasureKind::Replaced => counts.replaced_measures += 1,
    }
  });
}

/// Records a flex container layout. No-ops in release builds.
#[inline]
pub(crate) fn record_flex_pass() {
  #[cfg(any(test, debug_assertions))]
  COUNTERS.with(|counts| counts.borrow_mut().flex_passes += 1);
}

/// Resets counters for the current thread. No-ops in release builds.
#[inline]
pub fn reset_solver_counters() {
  #[cfg(any(test, debug_assertions))]
  COUNTERS.with(|counts| *counts.borrow_mut() = SolverCounters::default());
}

/// Returns the current counters for the current thread
#[inline]
pub fn solver_counters() -> SolverCounters {
  #[cfg(any(test, debug_assertions))]
  return COUNTERS.with(|counts| *counts.borrow());

  #[allow(unreachable_code)]
  SolverCounters::default()
}

/// Total leaf measurements observed on this thread
#[inline]
pub fn total_measures() -> u64 {
  let counts = solver_counters();
  counts.text_measures + counts.replaced_measures
}
