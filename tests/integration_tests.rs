//! Integration tests for building whole programs.
//!
//! These tests drive the public facade the way a parser would: declarations
//! first, then statements bottom-up, and check the resulting tree, symbol
//! table and diagnostics.

use semantic_core::{
    ast::{ast::{Node, NodeKind}, operators::Operator},
    compilation::compilation::{Compilation, Options},
    diagnostics::diagnostics::NullSink,
    display_error,
    logic::resolver::ExpressionResolver,
    symbols::symbols::{SymbolTable, SymbolType, Value},
};

fn compilation() -> Compilation {
    Compilation::new(Options {
        highlight: false,
        source_name: "program.prog".to_string(),
    })
    .with_sink(Box::new(NullSink))
}

/// Folds integer constants and additions; everything else is zero.
struct FoldingResolver;

impl FoldingResolver {
    fn fold(node: &Node) -> Option<i64> {
        match node.kind() {
            NodeKind::Constant {
                value: Value::Integer(value),
            } => Some(*value),
            NodeKind::Parenthesized { inner } => Self::fold(inner),
            NodeKind::BinaryOp {
                left,
                operator: Operator::Addition,
                right,
            } => Some(Self::fold(left)? + Self::fold(right)?),
            _ => None,
        }
    }
}

impl ExpressionResolver for FoldingResolver {
    fn resolve(&mut self, expression: &Node, _symbols: &SymbolTable, target: SymbolType) -> Value {
        match (target, Self::fold(expression)) {
            (SymbolType::Integer, Some(value)) => Value::Integer(value),
            _ => target.zero_value(),
        }
    }
}

#[test]
fn test_clean_program() {
    // var i, total: integer; var name: string;
    // total := (1 + 2); for i := 1 to 10 do print total + i;
    // while total < 100 do input name;
    let mut compilation = compilation().with_resolver(Box::new(FoldingResolver));

    compilation.set_position(1, 0);
    let mut integers = compilation.list_element("i");
    let total = compilation.list_element("total");
    compilation.link_list_elements(&mut integers, total);
    compilation.declare_list(&integers, SymbolType::Integer);
    let name = compilation.list_element("name");
    compilation.declare_list(&name, SymbolType::String);

    compilation.set_position(2, 0);
    let one = compilation.constant(Value::Integer(1));
    let two = compilation.constant(Value::Integer(2));
    let sum = compilation.binary(one, Operator::Addition, two);
    let sum = compilation.parenthesized(sum);
    let assignment = compilation.assign("total", sum);

    compilation.set_position(3, 0);
    let start = compilation.constant(Value::Integer(1));
    let end = compilation.constant(Value::Integer(10));
    let total_ref = compilation.reference("total");
    let i_ref = compilation.reference("i");
    let printed = compilation.binary(total_ref, Operator::Addition, i_ref);
    let print = compilation.print(printed);
    let for_loop = compilation.for_loop("i", start, end, vec![print]);

    compilation.set_position(4, 0);
    let total_ref = compilation.reference("total");
    let hundred = compilation.constant(Value::Integer(100));
    let condition = compilation.binary(total_ref, Operator::LessThan, hundred);
    let input = compilation.input("name");
    let while_loop = compilation.while_loop(condition, vec![input]);

    let program = compilation.root(vec![integers, name], vec![assignment, for_loop, while_loop]);

    assert!(!compilation.has_errors(), "{:?}", compilation.diagnostics());
    assert!(matches!(program.kind(), NodeKind::Root { statements, .. } if statements.len() == 3));

    let total = compilation.symbols().lookup("total").unwrap();
    assert_eq!(
        compilation.symbols().get(total).unwrap().value,
        Some(Value::Integer(3))
    );
}

#[test]
fn test_errors_are_all_reported() {
    // var x: integer; var x: integer; x := "a" * true; y := 1; if := 2;
    let mut compilation = compilation();

    compilation.set_position(1, 0);
    let x = compilation.declare("x").unwrap();
    compilation.bind_type(x, SymbolType::Integer);
    compilation.set_position(2, 0);
    compilation.declare("x");

    compilation.set_position(3, 0);
    let text = compilation.constant(Value::String("a".to_string()));
    let flag = compilation.constant(Value::Boolean(true));
    let product = compilation.binary(text, Operator::Multiplication, flag);
    compilation.assign("x", product);

    compilation.set_position(4, 0);
    let one = compilation.constant(Value::Integer(1));
    compilation.assign("y", one);

    compilation.set_position(5, 0);
    let two = compilation.constant(Value::Integer(2));
    compilation.assign("if", two);

    let summary: Vec<(u32, &str)> = compilation
        .diagnostics()
        .iter()
        .map(|error| (error.get_position().line, error.get_error_name()))
        .collect();

    assert_eq!(
        summary,
        vec![
            (2, "DuplicateDeclarationError"),
            (3, "TypeMismatchError"),
            (3, "TypeMismatchError"),
            (4, "UndeclaredVariableError"),
            (5, "ReservedIdentifierError"),
        ]
    );

    let x = compilation.symbols().lookup("x").unwrap();
    assert_eq!(
        compilation.symbols().get(x).unwrap().value,
        Some(Value::Integer(0))
    );
}

#[test]
fn test_mixed_addition_reports_once() {
    let mut compilation = compilation();
    let number = compilation.constant(Value::Integer(1));
    let text = compilation.constant(Value::String("a".to_string()));

    compilation.binary(number, Operator::Addition, text);

    assert_eq!(compilation.diagnostics().len(), 1);
    assert_eq!(
        compilation.diagnostics()[0].message(false),
        "Operands on the left and right of operation ‘addition (+)’ must both be of type ‘integer’ or ‘string’"
    );
}

#[test]
fn test_string_concatenation_assignment() {
    let mut compilation = compilation();
    let greeting = compilation.declare("greeting").unwrap();
    compilation.bind_type(greeting, SymbolType::String);

    let left = compilation.constant(Value::String("hello, ".to_string()));
    let right = compilation.constant(Value::String("world".to_string()));
    let joined = compilation.binary(left, Operator::Addition, right);
    compilation.assign("greeting", joined);

    assert!(!compilation.has_errors());
    assert_eq!(
        compilation.symbols().get(greeting).unwrap().value,
        Some(Value::String(String::new()))
    );
}

#[test]
fn test_rendered_error() {
    let mut compilation = compilation();
    compilation.set_position(6, 0);
    let one = compilation.constant(Value::Integer(1));
    compilation.assign("y", one);

    let rendered = display_error(&compilation.diagnostics()[0], false);

    assert!(rendered.starts_with("Error: UndeclaredVariableError"));
    assert!(rendered.contains("-> program.prog:6:0"));
    assert!(rendered.ends_with("Variable ‘y’ is not declared"));
}
