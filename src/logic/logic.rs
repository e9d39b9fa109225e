use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    symbols::symbols::{SymbolId, SymbolTable, SymbolType},
    Position, MK_ERROR,
};

use super::resolver::ExpressionResolver;

/// Marks a symbol as declared and gives it the zero value of its type.
///
/// Declaring a symbol twice is an error and leaves it untouched.
pub fn declare(symbols: &mut SymbolTable, symbol: SymbolId, position: &Position) -> Result<(), Error> {
    let Some(entry) = symbols.get_mut(symbol) else {
        return Err(unknown_symbol(position));
    };

    if entry.declared {
        tracing::debug!(name = %entry.name, line = position.line, "duplicate declaration");
        return Err(MK_ERROR!(
            ErrorImpl::VariableAlreadyDeclared {
                variable: entry.name.clone(),
            },
            position
        ));
    }

    entry.declared = true;
    entry.value = Some(entry.symbol_type.zero_value());
    tracing::debug!(name = %entry.name, "variable declared");

    Ok(())
}

/// Sets the type of a symbol.
///
/// A declared symbol gets the zero value of the new type so its value keeps
/// matching the type. Once a declared symbol has a type it keeps it; later
/// calls leave it untouched and return false.
pub fn bind_type(symbols: &mut SymbolTable, symbol: SymbolId, symbol_type: SymbolType) -> bool {
    let Some(entry) = symbols.get_mut(symbol) else {
        return false;
    };

    if entry.declared && entry.symbol_type != SymbolType::Undetermined {
        if entry.symbol_type != symbol_type {
            tracing::debug!(
                name = %entry.name,
                bound = %entry.symbol_type,
                requested = %symbol_type,
                "type of a declared variable is fixed"
            );
        }
        return entry.symbol_type == symbol_type;
    }

    entry.symbol_type = symbol_type;
    if entry.declared
        && entry.value.as_ref().map(|value| value.get_type()) != Some(symbol_type)
    {
        entry.value = Some(symbol_type.zero_value());
    }
    tracing::trace!(name = %entry.name, symbol_type = %symbol_type, "type bound");

    true
}

/// Declares and types every symbol of an identifier list, e.g. the
/// `a, b, c` of `var a, b, c: integer`.
///
/// Symbols that were already declared are reported and left as they are.
pub fn declare_list(
    symbols: &mut SymbolTable,
    head: &Node,
    symbol_type: SymbolType,
    position: &Position,
) -> Vec<Error> {
    let mut diagnostics = vec![];

    for symbol in head.list_symbols() {
        match declare(symbols, symbol, position) {
            Ok(()) => {
                bind_type(symbols, symbol, symbol_type);
            }
            Err(error) => diagnostics.push(error),
        }
    }

    diagnostics
}

/// Stores the value of `expression` into `symbol`.
///
/// Fails when the symbol is undeclared or when the expression's type differs
/// from the symbol's; the stored value is unchanged in both cases.
pub fn assign(
    symbols: &mut SymbolTable,
    symbol: SymbolId,
    expression: &Node,
    resolver: &mut dyn ExpressionResolver,
    position: &Position,
) -> Result<(), Error> {
    let Some(entry) = symbols.get(symbol) else {
        return Err(unknown_symbol(position));
    };

    if !entry.declared {
        tracing::debug!(name = %entry.name, line = position.line, "assignment to undeclared variable");
        return Err(MK_ERROR!(
            ErrorImpl::VariableNotDeclared {
                variable: entry.name.clone(),
            },
            position
        ));
    }

    let expected = entry.symbol_type;
    let received = expression.resolved_type(symbols);

    if expected != received {
        return Err(MK_ERROR!(
            ErrorImpl::AssignmentTypeMismatch {
                variable: entry.name.clone(),
                expected: expected.to_string(),
                received: received.to_string(),
            },
            position
        ));
    }

    let value = resolver.resolve(expression, symbols, expected);

    if let Some(entry) = symbols.get_mut(symbol) {
        if value.get_type() == expected {
            entry.value = Some(value);
        } else {
            tracing::warn!(
                name = %entry.name,
                expected = %expected,
                received = %value.get_type(),
                "resolver returned a value of the wrong type, keeping previous value"
            );
        }
    }

    Ok(())
}

/// A handle from another table is treated as a symbol that was never
/// declared.
fn unknown_symbol(position: &Position) -> Error {
    MK_ERROR!(
        ErrorImpl::VariableNotDeclared {
            variable: String::from("<unknown>"),
        },
        position
    )
}
