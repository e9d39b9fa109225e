//! Error types and error handling for the semantic core.
//!
//! This module defines the diagnostics raised while building the tree:
//!
//! - Error structures with source position information
//! - The four diagnostic kinds (duplicate declaration, undeclared variable,
//!   type mismatch, reserved identifier)
//! - Message formatting with optional ANSI highlighting

pub mod errors;
