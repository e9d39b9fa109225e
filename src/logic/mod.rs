//! Declaration and assignment logic.
//!
//! This module enforces the variable lifecycle rules:
//!
//! - A variable is declared exactly once
//! - A variable is declared before it is assigned
//! - An assigned expression has the variable's type
//! - Reserved words and numbers are never assignment targets
//!
//! Values are produced by an `ExpressionResolver`, the boundary to the
//! evaluator.

pub mod logic;
pub mod reserved;
pub mod resolver;
