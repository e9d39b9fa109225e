use std::fmt::Write;

use crate::{
    errors::errors::Error,
    symbols::symbols::{SymbolId, SymbolTable, SymbolType, Value},
    Position,
};

use super::operators::Operator;

/// Node Kinds
///
/// The closed set of constructs the parser can build. Composite variants own
/// their children; symbol-carrying variants hold a `SymbolId` handle.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Constant {
        value: Value,
    },
    Reference {
        symbol: SymbolId,
    },
    Assignment {
        symbol: SymbolId,
        expression: Box<Node>,
    },
    Root {
        declarations: Vec<Node>,
        statements: Vec<Node>,
    },
    ForLoop {
        variable: SymbolId,
        start: Box<Node>,
        end: Box<Node>,
        body: Vec<Node>,
    },
    WhileLoop {
        condition: Box<Node>,
        body: Vec<Node>,
    },
    IfElse {
        condition: Box<Node>,
        then_body: Vec<Node>,
        else_body: Vec<Node>,
    },
    Print {
        expression: Box<Node>,
    },
    Input {
        symbol: SymbolId,
    },
    BinaryOp {
        left: Box<Node>,
        operator: Operator,
        right: Box<Node>,
    },
    UnaryOp {
        operator: Operator,
        right: Box<Node>,
    },
    Parenthesized {
        inner: Box<Node>,
    },
    /// One identifier of a declaration list, e.g. `a` in `var a, b: integer`.
    ListElement {
        symbol: SymbolId,
        next: Option<Box<Node>>,
    },
}

/// Node
///
/// Generic envelope around a variant: the variant itself, the type resolved
/// at construction and the position it was built at. Nodes are not mutated
/// after construction except for the `next` link of list elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    node_type: SymbolType,
    position: Position,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, node_type: SymbolType, position: Position) -> Self {
        Node {
            kind,
            node_type,
            position,
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn is_expression(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Constant { .. }
                | NodeKind::Reference { .. }
                | NodeKind::BinaryOp { .. }
                | NodeKind::UnaryOp { .. }
                | NodeKind::Parenthesized { .. }
        )
    }

    /// Resolved semantic type of the node.
    ///
    /// Constants and operations report the type stored at construction,
    /// references report the current type of their symbol and parentheses
    /// report their inner expression. Statements have no type.
    pub fn resolved_type(&self, symbols: &SymbolTable) -> SymbolType {
        match &self.kind {
            NodeKind::Constant { .. } | NodeKind::BinaryOp { .. } | NodeKind::UnaryOp { .. } => {
                self.node_type
            }
            NodeKind::Reference { symbol } => symbols.type_of(*symbol),
            NodeKind::Parenthesized { inner } => inner.resolved_type(symbols),
            NodeKind::Assignment { .. }
            | NodeKind::Root { .. }
            | NodeKind::ForLoop { .. }
            | NodeKind::WhileLoop { .. }
            | NodeKind::IfElse { .. }
            | NodeKind::Print { .. }
            | NodeKind::Input { .. }
            | NodeKind::ListElement { .. } => SymbolType::Undetermined,
        }
    }

    /// Symbols of an identifier list, starting at this element.
    pub fn list_symbols(&self) -> Vec<SymbolId> {
        let mut symbols = vec![];
        let mut current = Some(self);

        while let Some(node) = current {
            match &node.kind {
                NodeKind::ListElement { symbol, next } => {
                    symbols.push(*symbol);
                    current = next.as_deref();
                }
                _ => break,
            }
        }

        symbols
    }

    /// Indented dump of the tree, one node per line.
    pub fn pretty(&self, symbols: &SymbolTable) -> String {
        let mut out = String::new();
        self.write_tree(symbols, 0, &mut out);
        out
    }

    fn write_tree(&self, symbols: &SymbolTable, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);

        match &self.kind {
            NodeKind::Constant { value } => {
                let _ = writeln!(out, "{}Constant {} : {}", indent, value, self.node_type);
            }
            NodeKind::Reference { symbol } => {
                let _ = writeln!(
                    out,
                    "{}Reference {} : {}",
                    indent,
                    symbols.name_of(*symbol),
                    symbols.type_of(*symbol)
                );
            }
            NodeKind::Assignment { symbol, expression } => {
                let _ = writeln!(out, "{}Assignment {}", indent, symbols.name_of(*symbol));
                expression.write_tree(symbols, depth + 1, out);
            }
            NodeKind::Root {
                declarations,
                statements,
            } => {
                let _ = writeln!(out, "{}Root", indent);
                let _ = writeln!(out, "{}  Declarations", indent);
                for declaration in declarations {
                    declaration.write_tree(symbols, depth + 2, out);
                }
                let _ = writeln!(out, "{}  Statements", indent);
                for statement in statements {
                    statement.write_tree(symbols, depth + 2, out);
                }
            }
            NodeKind::ForLoop {
                variable,
                start,
                end,
                body,
            } => {
                let _ = writeln!(out, "{}For {}", indent, symbols.name_of(*variable));
                start.write_tree(symbols, depth + 1, out);
                end.write_tree(symbols, depth + 1, out);
                write_body(symbols, "Do", body, depth + 1, out);
            }
            NodeKind::WhileLoop { condition, body } => {
                let _ = writeln!(out, "{}While", indent);
                condition.write_tree(symbols, depth + 1, out);
                write_body(symbols, "Do", body, depth + 1, out);
            }
            NodeKind::IfElse {
                condition,
                then_body,
                else_body,
            } => {
                let _ = writeln!(out, "{}If", indent);
                condition.write_tree(symbols, depth + 1, out);
                write_body(symbols, "Then", then_body, depth + 1, out);
                write_body(symbols, "Else", else_body, depth + 1, out);
            }
            NodeKind::Print { expression } => {
                let _ = writeln!(out, "{}Print", indent);
                expression.write_tree(symbols, depth + 1, out);
            }
            NodeKind::Input { symbol } => {
                let _ = writeln!(out, "{}Input {}", indent, symbols.name_of(*symbol));
            }
            NodeKind::BinaryOp {
                left,
                operator,
                right,
            } => {
                let _ = writeln!(out, "{}BinaryOp {} : {}", indent, operator, self.node_type);
                left.write_tree(symbols, depth + 1, out);
                right.write_tree(symbols, depth + 1, out);
            }
            NodeKind::UnaryOp { operator, right } => {
                let _ = writeln!(out, "{}UnaryOp {} : {}", indent, operator, self.node_type);
                right.write_tree(symbols, depth + 1, out);
            }
            NodeKind::Parenthesized { inner } => {
                let _ = writeln!(out, "{}Parenthesized", indent);
                inner.write_tree(symbols, depth + 1, out);
            }
            NodeKind::ListElement { .. } => {
                let names: Vec<&str> = self
                    .list_symbols()
                    .into_iter()
                    .map(|symbol| symbols.name_of(symbol))
                    .collect();
                let _ = writeln!(out, "{}List {}", indent, names.join(", "));
            }
        }
    }
}

fn write_body(symbols: &SymbolTable, label: &str, body: &[Node], depth: usize, out: &mut String) {
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), label);
    for statement in body {
        statement.write_tree(symbols, depth + 1, out);
    }
}

/// A constructed value paired with the diagnostics raised while building it.
///
/// Construction never fails: the value is always usable, even when
/// `diagnostics` is not empty.
#[derive(Debug, Clone)]
pub struct Checked<T> {
    pub value: T,
    pub diagnostics: Vec<Error>,
}

impl<T> Checked<T> {
    pub fn new(value: T, diagnostics: Vec<Error>) -> Self {
        Checked { value, diagnostics }
    }

    pub fn clean(value: T) -> Self {
        Checked::new(value, vec![])
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_parts(self) -> (T, Vec<Error>) {
        (self.value, self.diagnostics)
    }
}
