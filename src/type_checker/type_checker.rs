use crate::{
    ast::{ast::Node, operators::Operator},
    errors::errors::{Error, ErrorImpl, Side},
    symbols::symbols::{SymbolTable, SymbolType},
    Position, MK_ERROR,
};

/// Operators whose operands must all be integers.
pub const INTEGER_OPERATORS: [Operator; 3] = [
    Operator::Subtraction,
    Operator::Multiplication,
    Operator::Division,
];

/// Description of addition used in its diagnostic.
const ADDITION_DESCRIPTION: &str = "addition (+)";

/// Runs every operand rule that applies to a binary operation.
///
/// A missing operand (`None`) is skipped. Logical and relational operators
/// have no operand rule.
pub fn check_binary(
    left: Option<&Node>,
    operator: Operator,
    right: Option<&Node>,
    symbols: &SymbolTable,
    position: &Position,
) -> Vec<Error> {
    let mut diagnostics = check_integer_operands(left, operator, right, symbols, position);
    diagnostics.extend(check_addition_operands(left, operator, right, symbols, position));

    if !diagnostics.is_empty() {
        tracing::debug!(
            operator = operator.as_str(),
            count = diagnostics.len(),
            line = position.line,
            "operand type mismatch"
        );
    }

    diagnostics
}

/// Runs the operand rules for a prefix operation; only the right operand
/// exists.
pub fn check_unary(operator: Operator, right: &Node, symbols: &SymbolTable, position: &Position) -> Vec<Error> {
    check_binary(None, operator, Some(right), symbols, position)
}

/// Subtraction, multiplication and division accept integers only.
///
/// Each offending side gets its own diagnostic; the right side is checked
/// even when the left one already failed.
pub fn check_integer_operands(
    left: Option<&Node>,
    operator: Operator,
    right: Option<&Node>,
    symbols: &SymbolTable,
    position: &Position,
) -> Vec<Error> {
    if !INTEGER_OPERATORS.contains(&operator) {
        return vec![];
    }

    [(Side::Left, left), (Side::Right, right)]
        .into_iter()
        .filter_map(|(side, operand)| {
            let received = operand?.resolved_type(symbols);
            if received == SymbolType::Integer {
                return None;
            }

            Some(MK_ERROR!(
                ErrorImpl::OperandTypeMismatch {
                    side,
                    operator: operator.as_str().to_string(),
                    expected: SymbolType::Integer.to_string(),
                    received: received.to_string(),
                },
                position
            ))
        })
        .collect()
}

/// Addition is the only operator that accepts strings: both operands must
/// be integers or both strings. A prefix `+` accepts either type.
pub fn check_addition_operands(
    left: Option<&Node>,
    operator: Operator,
    right: Option<&Node>,
    symbols: &SymbolTable,
    position: &Position,
) -> Vec<Error> {
    if operator != Operator::Addition {
        return vec![];
    }

    let accepted = |ty: SymbolType| ty == SymbolType::Integer || ty == SymbolType::String;

    let valid = match (left, right) {
        (Some(left), Some(right)) => {
            let left_type = left.resolved_type(symbols);
            left_type == right.resolved_type(symbols) && accepted(left_type)
        }
        (Some(operand), None) | (None, Some(operand)) => accepted(operand.resolved_type(symbols)),
        (None, None) => true,
    };

    if valid {
        return vec![];
    }

    vec![MK_ERROR!(
        ErrorImpl::AdditionTypeMismatch {
            operator: ADDITION_DESCRIPTION.to_string(),
            first: SymbolType::Integer.to_string(),
            second: SymbolType::String.to_string(),
        },
        position
    )]
}
