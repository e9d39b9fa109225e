//! Statement node constructors.
//!
//! Statements carry no type and are built without checks; the rules that
//! apply to assignments live in `logic`.

use crate::{
    symbols::symbols::{SymbolId, SymbolType},
    Position,
};

use super::ast::{Node, NodeKind};

pub fn root(declarations: Vec<Node>, statements: Vec<Node>, position: &Position) -> Node {
    statement(
        NodeKind::Root {
            declarations,
            statements,
        },
        position,
    )
}

pub fn assignment(symbol: SymbolId, expression: Node, position: &Position) -> Node {
    statement(
        NodeKind::Assignment {
            symbol,
            expression: Box::new(expression),
        },
        position,
    )
}

pub fn for_loop(
    variable: SymbolId,
    start: Node,
    end: Node,
    body: Vec<Node>,
    position: &Position,
) -> Node {
    statement(
        NodeKind::ForLoop {
            variable,
            start: Box::new(start),
            end: Box::new(end),
            body,
        },
        position,
    )
}

pub fn while_loop(condition: Node, body: Vec<Node>, position: &Position) -> Node {
    statement(
        NodeKind::WhileLoop {
            condition: Box::new(condition),
            body,
        },
        position,
    )
}

pub fn if_else(condition: Node, then_body: Vec<Node>, else_body: Vec<Node>, position: &Position) -> Node {
    statement(
        NodeKind::IfElse {
            condition: Box::new(condition),
            then_body,
            else_body,
        },
        position,
    )
}

pub fn print(expression: Node, position: &Position) -> Node {
    statement(
        NodeKind::Print {
            expression: Box::new(expression),
        },
        position,
    )
}

pub fn input(symbol: SymbolId, position: &Position) -> Node {
    statement(NodeKind::Input { symbol }, position)
}

/// Starts an identifier list with a single element.
pub fn list_element(symbol: SymbolId, position: &Position) -> Node {
    statement(NodeKind::ListElement { symbol, next: None }, position)
}

/// Appends `next` at the tail of the list that starts at `node`.
///
/// Returns false, leaving both untouched, when `node` is not a list element.
pub fn link_list_elements(node: &mut Node, next: Node) -> bool {
    match node.kind_mut() {
        NodeKind::ListElement { next: slot, .. } => match slot {
            Some(tail) => link_list_elements(tail, next),
            None => {
                *slot = Some(Box::new(next));
                true
            }
        },
        _ => false,
    }
}

fn statement(kind: NodeKind, position: &Position) -> Node {
    Node::new(kind, SymbolType::Undetermined, position.clone())
}
