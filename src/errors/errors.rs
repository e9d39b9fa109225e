use std::fmt::Display;

use thiserror::Error;

use crate::{Position, MK_HIGHLIGHT};

/// Which operand of an operation a diagnostic points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::VariableAlreadyDeclared { .. } => "DuplicateDeclarationError",
            ErrorImpl::VariableNotDeclared { .. } => "UndeclaredVariableError",
            ErrorImpl::AssignmentTypeMismatch { .. } => "TypeMismatchError",
            ErrorImpl::OperandTypeMismatch { .. } => "TypeMismatchError",
            ErrorImpl::AdditionTypeMismatch { .. } => "TypeMismatchError",
            ErrorImpl::ReservedIdentifier { .. } => "ReservedIdentifierError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::VariableAlreadyDeclared { variable } => ErrorTip::Suggestion(format!(
                "Remove the second declaration of `{}`",
                variable
            )),
            ErrorImpl::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "Declare `{}` before assigning to it",
                variable
            )),
            ErrorImpl::AssignmentTypeMismatch {
                expected, received, ..
            } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::OperandTypeMismatch {
                expected, received, ..
            } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::AdditionTypeMismatch { .. } => ErrorTip::None,
            ErrorImpl::ReservedIdentifier { .. } => ErrorTip::None,
        }
    }

    /// User-facing message. With `highlight` set, names and type
    /// descriptions are wrapped in ANSI bold markers.
    pub fn message(&self, highlight: bool) -> String {
        match &self.internal_error {
            ErrorImpl::VariableAlreadyDeclared { variable } => format!(
                "Variable {} was already declared",
                MK_HIGHLIGHT!(highlight, variable)
            ),
            ErrorImpl::VariableNotDeclared { variable } => format!(
                "Variable {} is not declared",
                MK_HIGHLIGHT!(highlight, variable)
            ),
            ErrorImpl::AssignmentTypeMismatch {
                variable,
                expected,
                received,
            } => format!(
                "Variable {} has type {}, but a value of type {} is being assigned",
                MK_HIGHLIGHT!(highlight, variable),
                MK_HIGHLIGHT!(highlight, expected),
                MK_HIGHLIGHT!(highlight, received)
            ),
            ErrorImpl::OperandTypeMismatch {
                side,
                operator,
                expected,
                received,
            } => format!(
                "Operand on the {} of operation {} has type {}, but the operation only accepts {}",
                side,
                MK_HIGHLIGHT!(highlight, operator),
                MK_HIGHLIGHT!(highlight, received),
                MK_HIGHLIGHT!(highlight, expected)
            ),
            ErrorImpl::AdditionTypeMismatch {
                operator,
                first,
                second,
            } => format!(
                "Operands on the left and right of operation {} must both be of type {} or {}",
                MK_HIGHLIGHT!(highlight, operator),
                MK_HIGHLIGHT!(highlight, first),
                MK_HIGHLIGHT!(highlight, second)
            ),
            ErrorImpl::ReservedIdentifier { .. } => {
                String::from("Reserved words and numbers are invalid variable names")
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("variable {variable:?} has type {expected}, assigned a value of type {received}")]
    AssignmentTypeMismatch {
        variable: String,
        expected: String,
        received: String,
    },
    #[error("{side} operand of {operator:?} has type {received}, expected {expected}")]
    OperandTypeMismatch {
        side: Side,
        operator: String,
        expected: String,
        received: String,
    },
    #[error("operands of {operator:?} must both be {first} or {second}")]
    AdditionTypeMismatch {
        operator: String,
        first: String,
        second: String,
    },
    #[error("reserved word or number {identifier:?} used as a variable name")]
    ReservedIdentifier { identifier: String },
}
