//! Boundary to the expression evaluator.

use crate::{
    ast::ast::Node,
    symbols::symbols::{SymbolTable, SymbolType, Value},
};

/// Produces the value stored by an assignment.
///
/// Implementations must return a value whose variant matches `target`.
/// No folding behaviour is required.
pub trait ExpressionResolver {
    fn resolve(&mut self, expression: &Node, symbols: &SymbolTable, target: SymbolType) -> Value;
}

/// Resolver that does not evaluate anything and yields the zero value of the
/// target type.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroResolver;

impl ExpressionResolver for ZeroResolver {
    fn resolve(&mut self, _expression: &Node, _symbols: &SymbolTable, target: SymbolType) -> Value {
        target.zero_value()
    }
}
