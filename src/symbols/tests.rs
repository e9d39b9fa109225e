//! Unit tests for the symbol table.

use super::symbols::{Symbol, SymbolId, SymbolTable, SymbolType, Value};

#[test]
fn test_new_symbol_is_undeclared() {
    let symbol = Symbol::new("x".to_string());

    assert!(!symbol.declared);
    assert_eq!(symbol.symbol_type, SymbolType::Undetermined);
    assert_eq!(symbol.value, None);
}

#[test]
fn test_intern_returns_same_handle() {
    let mut table = SymbolTable::new();
    let first = table.intern("x");
    let second = table.intern("x");
    let other = table.intern("y");

    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup("y"), Some(other));
    assert_eq!(table.lookup("z"), None);
}

#[test]
fn test_handles_survive_growth() {
    let mut table = SymbolTable::new();
    let x = table.intern("x");

    for index in 0..100 {
        table.intern(&format!("v{}", index));
    }

    assert_eq!(table.name_of(x), "x");
}

#[test]
fn test_unknown_handle() {
    let table = SymbolTable::new();

    assert!(table.get(SymbolId::from_raw(3)).is_none());
    assert_eq!(table.type_of(SymbolId::from_raw(3)), SymbolType::Undetermined);
    assert_eq!(table.name_of(SymbolId::from_raw(3)), "<unknown>");
}

#[test]
fn test_zero_values() {
    assert_eq!(SymbolType::Undetermined.zero_value(), Value::Integer(0));
    assert_eq!(SymbolType::Integer.zero_value(), Value::Integer(0));
    assert_eq!(SymbolType::Boolean.zero_value(), Value::Boolean(false));
    assert_eq!(SymbolType::String.zero_value(), Value::String(String::new()));
}

#[test]
fn test_value_type() {
    assert_eq!(Value::Integer(4).get_type(), SymbolType::Integer);
    assert_eq!(Value::Boolean(true).get_type(), SymbolType::Boolean);
    assert_eq!(Value::String("a".to_string()).get_type(), SymbolType::String);
}

#[test]
fn test_iter_in_creation_order() {
    let mut table = SymbolTable::new();
    table.intern("b");
    table.intern("a");

    let names: Vec<&str> = table.iter().map(|(_, symbol)| symbol.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
}
