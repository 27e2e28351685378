//! Observability
//!
//! Structured JSON logging with deterministic output. Read-only: no side
//! effects on the operations being observed, no async, no background
//! threads. Compiler diagnostics (unknown variants, duplicate field names)
//! are logged here at WARN and are never failure paths.

mod logger;

pub use logger::{Logger, Severity};
