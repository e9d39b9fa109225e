//! Type checking module.
//!
//! Holds the operand rules run while operation nodes are constructed:
//!
//! - Subtraction, multiplication and division accept integers only, with one
//!   diagnostic per offending side
//! - Addition accepts two integers or two strings
//! - Logical and relational operators are classified but unconstrained
//!
//! The rules only read node types; they never reject a node.

pub mod type_checker;
