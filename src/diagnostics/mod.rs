//! Diagnostic sinks.
//!
//! The core never prints on its own; every diagnostic is handed to a
//! `DiagnosticSink` as `(source name, line, column, message)`. Deciding
//! whether the accumulated diagnostics abort compilation is left to the
//! driver.

pub mod diagnostics;
