use std::rc::Rc;

use crate::{
    ast::{
        ast::{Checked, Node},
        expressions, statements,
        operators::Operator,
    },
    diagnostics::diagnostics::{DiagnosticSink, TracingSink},
    errors::errors::Error,
    logic::{
        logic,
        reserved::check_assignment_target,
        resolver::{ExpressionResolver, ZeroResolver},
    },
    symbols::symbols::{SymbolId, SymbolTable, SymbolType, Value},
    Position,
};

/// Settings for one compilation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Wrap names and types in ANSI markers in reported messages.
    pub highlight: bool,
    /// File name diagnostics point at.
    pub source_name: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            highlight: true,
            source_name: String::from("shell"),
        }
    }
}

pub struct Compilation {
    symbols: SymbolTable,
    diagnostics: Vec<Error>,
    position: Position,
    options: Options,
    sink: Box<dyn DiagnosticSink>,
    resolver: Box<dyn ExpressionResolver>,
}

impl Compilation {
    pub fn new(options: Options) -> Self {
        Compilation {
            symbols: SymbolTable::new(),
            diagnostics: vec![],
            position: Position::new(1, 0, Rc::new(options.source_name.clone())),
            options,
            sink: Box::new(TracingSink),
            resolver: Box::new(ZeroResolver),
        }
    }

    pub fn with_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_resolver(mut self, resolver: Box<dyn ExpressionResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Moves the current position; constructs built afterwards point here.
    pub fn set_position(&mut self, line: u32, column: u32) {
        self.position.line = line;
        self.position.column = column;
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Ends the compilation, handing back the symbol table and everything
    /// that was reported.
    pub fn finish(self) -> (SymbolTable, Vec<Error>) {
        (self.symbols, self.diagnostics)
    }

    /// Symbol for `name`, created undeclared on first reference.
    pub fn symbol(&mut self, name: &str) -> SymbolId {
        self.symbols.intern(name)
    }

    // Declarations

    /// Declares `name`. Returns `None`, after reporting, when it was already
    /// declared.
    pub fn declare(&mut self, name: &str) -> Option<SymbolId> {
        let symbol = self.symbols.intern(name);
        match logic::declare(&mut self.symbols, symbol, &self.position) {
            Ok(()) => Some(symbol),
            Err(error) => {
                self.record(vec![error]);
                None
            }
        }
    }

    /// Binds the type of a symbol; false when it is already declared with
    /// another type.
    pub fn bind_type(&mut self, symbol: SymbolId, symbol_type: SymbolType) -> bool {
        logic::bind_type(&mut self.symbols, symbol, symbol_type)
    }

    pub fn list_element(&mut self, name: &str) -> Node {
        let symbol = self.symbols.intern(name);
        statements::list_element(symbol, &self.position)
    }

    pub fn link_list_elements(&self, node: &mut Node, next: Node) -> bool {
        statements::link_list_elements(node, next)
    }

    pub fn declare_list(&mut self, head: &Node, symbol_type: SymbolType) {
        let diagnostics = logic::declare_list(&mut self.symbols, head, symbol_type, &self.position);
        self.record(diagnostics);
    }

    // Expressions

    pub fn constant(&self, value: Value) -> Node {
        expressions::constant(value, &self.position)
    }

    pub fn reference(&mut self, name: &str) -> Node {
        let symbol = self.symbols.intern(name);
        expressions::reference(symbol, &self.symbols, &self.position)
    }

    pub fn binary(&mut self, left: Node, operator: Operator, right: Node) -> Node {
        let checked = expressions::binary(left, operator, right, &self.symbols, &self.position);
        self.take(checked)
    }

    pub fn unary(&mut self, operator: Operator, right: Node) -> Node {
        let checked = expressions::unary(operator, right, &self.symbols, &self.position);
        self.take(checked)
    }

    pub fn parenthesized(&self, inner: Node) -> Node {
        expressions::parenthesized(inner, &self.symbols, &self.position)
    }

    // Statements

    /// Assignment `target := expression`.
    ///
    /// Reserved words and numbers are rejected before anything else; an
    /// assignment node is returned in every case.
    pub fn assign(&mut self, target: &str, expression: Node) -> Node {
        if let Err(error) = check_assignment_target(target, &self.position) {
            self.record(vec![error]);
            return statements::assignment(SymbolId::INVALID, expression, &self.position);
        }

        let symbol = self.symbols.intern(target);
        let result = logic::assign(
            &mut self.symbols,
            symbol,
            &expression,
            self.resolver.as_mut(),
            &self.position,
        );
        if let Err(error) = result {
            self.record(vec![error]);
        }

        statements::assignment(symbol, expression, &self.position)
    }

    pub fn print(&self, expression: Node) -> Node {
        statements::print(expression, &self.position)
    }

    pub fn input(&mut self, name: &str) -> Node {
        let symbol = self.symbols.intern(name);
        statements::input(symbol, &self.position)
    }

    pub fn for_loop(&mut self, variable: &str, start: Node, end: Node, body: Vec<Node>) -> Node {
        let symbol = self.symbols.intern(variable);
        statements::for_loop(symbol, start, end, body, &self.position)
    }

    pub fn while_loop(&self, condition: Node, body: Vec<Node>) -> Node {
        statements::while_loop(condition, body, &self.position)
    }

    pub fn if_else(&self, condition: Node, then_body: Vec<Node>, else_body: Vec<Node>) -> Node {
        statements::if_else(condition, then_body, else_body, &self.position)
    }

    pub fn root(&self, declarations: Vec<Node>, body: Vec<Node>) -> Node {
        statements::root(declarations, body, &self.position)
    }

    fn take(&mut self, checked: Checked<Node>) -> Node {
        let (node, diagnostics) = checked.into_parts();
        self.record(diagnostics);
        node
    }

    fn record(&mut self, diagnostics: Vec<Error>) {
        for error in diagnostics {
            self.sink.report_error(&error, self.options.highlight);
            self.diagnostics.push(error);
        }
    }
}
