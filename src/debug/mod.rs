//! Runtime diagnostics and configuration toggles

pub mod runtime;
