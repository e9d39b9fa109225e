//! Expression node constructors.
//!
//! Operation constructors run the type checker before returning; any
//! diagnostics travel back in the `Checked` result next to the node.

use crate::{
    symbols::symbols::{SymbolId, SymbolTable, Value},
    type_checker::type_checker::{check_binary, check_unary},
    Position,
};

use super::{
    ast::{Checked, Node, NodeKind},
    operators::Operator,
};

/// Literal value. The node type follows the value's variant.
pub fn constant(value: Value, position: &Position) -> Node {
    let node_type = value.get_type();
    Node::new(NodeKind::Constant { value }, node_type, position.clone())
}

/// Use of a variable inside an expression.
pub fn reference(symbol: SymbolId, symbols: &SymbolTable, position: &Position) -> Node {
    Node::new(
        NodeKind::Reference { symbol },
        symbols.type_of(symbol),
        position.clone(),
    )
}

/// Binary operation, e.g. `3 - a` or `a < b`.
pub fn binary(
    left: Node,
    operator: Operator,
    right: Node,
    symbols: &SymbolTable,
    position: &Position,
) -> Checked<Node> {
    let diagnostics = check_binary(Some(&left), operator, Some(&right), symbols, position);
    let node_type = operator.result_type(left.resolved_type(symbols), right.resolved_type(symbols));

    Checked::new(
        Node::new(
            NodeKind::BinaryOp {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            },
            node_type,
            position.clone(),
        ),
        diagnostics,
    )
}

/// Prefix operation, e.g. `!done` or `-x`.
pub fn unary(
    operator: Operator,
    right: Node,
    symbols: &SymbolTable,
    position: &Position,
) -> Checked<Node> {
    let diagnostics = check_unary(operator, &right, symbols, position);
    let right_type = right.resolved_type(symbols);
    let node_type = operator.result_type(right_type, right_type);

    Checked::new(
        Node::new(
            NodeKind::UnaryOp {
                operator,
                right: Box::new(right),
            },
            node_type,
            position.clone(),
        ),
        diagnostics,
    )
}

/// Expression wrapped in parentheses, e.g. `( 2 + 4 )`.
pub fn parenthesized(inner: Node, symbols: &SymbolTable, position: &Position) -> Node {
    let node_type = inner.resolved_type(symbols);
    Node::new(
        NodeKind::Parenthesized {
            inner: Box::new(inner),
        },
        node_type,
        position.clone(),
    )
}
