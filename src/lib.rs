#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod compilation;
pub mod diagnostics;
pub mod errors;
pub mod logic;
pub mod macros;
pub mod symbols;
pub mod type_checker;

extern crate regex;

/// Source position of a construct: line, column and file name.
///
/// The driver owns position tracking; every constructor and check receives
/// the position explicitly and nodes keep it as provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Renders a diagnostic the way it is shown to the user.
///
/// ```text
/// Error: TypeMismatchError (Expected type `integer`, received `string`)
/// -> main.prog:12:0
///    | Operand on the right of operation ‘-’ ...
/// ```
pub fn display_error(error: &Error, highlight: bool) -> String {
    let mut rendered = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };

    rendered.push_str(&format!("-> {}\n", error.get_position()));
    rendered.push_str(&format!("   | {}", error.message(highlight)));

    rendered
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_position_display() {
        let position = Position::new(4, 2, Rc::new("main.prog".to_string()));
        assert_eq!(position.to_string(), "main.prog:4:2");
    }

    #[test]
    fn test_display_error() {
        let error = Error::new(
            ErrorImpl::VariableNotDeclared {
                variable: "y".to_string(),
            },
            Position::new(3, 0, Rc::new("main.prog".to_string())),
        );

        let rendered = super::display_error(&error, false);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: UndeclaredVariableError (Declare `y` before assigning to it)"
        );
        assert_eq!(lines[1], "-> main.prog:3:0");
        assert_eq!(lines[2], "   | Variable ‘y’ is not declared");
    }
}
