//! Operator tags carried by expression nodes.
//!
//! The tag set keeps the two operand markers (`Constant`, `Variable`) next to
//! the thirteen real operators, and the classification predicates split it
//! into disjoint groups.

use std::fmt::Display;

use crate::symbols::symbols::SymbolType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Constant,
    Variable,

    Addition,
    Subtraction,
    Multiplication,
    Division,

    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    Equal,
    NotEqual,

    Or,
    And,
    Not,
}

impl Operator {
    pub const ALL: [Operator; 15] = [
        Operator::Constant,
        Operator::Variable,
        Operator::Addition,
        Operator::Subtraction,
        Operator::Multiplication,
        Operator::Division,
        Operator::GreaterThan,
        Operator::GreaterOrEqual,
        Operator::LessThan,
        Operator::LessOrEqual,
        Operator::Equal,
        Operator::NotEqual,
        Operator::Or,
        Operator::And,
        Operator::Not,
    ];

    /// Display symbol used in diagnostics and tree dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Constant => "constant",
            Operator::Variable => "variable",
            Operator::Addition => "+",
            Operator::Subtraction => "-",
            Operator::Multiplication => "*",
            Operator::Division => "/",
            Operator::GreaterThan => ">",
            Operator::GreaterOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessOrEqual => "<=",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Or => "||",
            Operator::And => "&&",
            Operator::Not => "!",
        }
    }

    pub fn is_operand(self) -> bool {
        matches!(self, Operator::Constant | Operator::Variable)
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Operator::Addition
                | Operator::Subtraction
                | Operator::Multiplication
                | Operator::Division
        )
    }

    pub fn is_logical(self) -> bool {
        matches!(self, Operator::Or | Operator::And | Operator::Not)
    }

    pub fn is_relational(self) -> bool {
        matches!(
            self,
            Operator::Equal
                | Operator::NotEqual
                | Operator::LessThan
                | Operator::LessOrEqual
                | Operator::GreaterThan
                | Operator::GreaterOrEqual
        )
    }

    /// Type of the value an operation produces.
    ///
    /// Addition yields a string only when both operands are strings; every
    /// other arithmetic form yields an integer. Comparisons and logical
    /// operators yield booleans. Operand markers have no result of their own.
    pub fn result_type(self, left: SymbolType, right: SymbolType) -> SymbolType {
        if self == Operator::Addition && left == SymbolType::String && right == SymbolType::String {
            SymbolType::String
        } else if self.is_arithmetic() {
            SymbolType::Integer
        } else if self.is_relational() || self.is_logical() {
            SymbolType::Boolean
        } else {
            SymbolType::Undetermined
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
