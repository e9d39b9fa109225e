//! Driver-facing facade.
//!
//! A `Compilation` owns everything one translation unit needs: its symbol
//! table, the current source position, the diagnostic sink and the
//! collected diagnostics. The parser calls it in construction order.

pub mod compilation;
