use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_ERROR,
};

lazy_static! {
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("program");
        set.insert("var");
        set.insert("begin");
        set.insert("end");
        set.insert("integer");
        set.insert("boolean");
        set.insert("string");
        set.insert("if");
        set.insert("then");
        set.insert("else");
        set.insert("while");
        set.insert("do");
        set.insert("for");
        set.insert("to");
        set.insert("print");
        set.insert("input");
        set.insert("true");
        set.insert("false");
        set.insert("and");
        set.insert("or");
        set.insert("not");
        set
    };
    static ref NUMBER_LITERAL: Regex = Regex::new("^[0-9]+(\\.[0-9]+)?$").unwrap();
}

pub fn is_reserved_word(identifier: &str) -> bool {
    RESERVED_WORDS.contains(identifier)
}

pub fn is_number_literal(identifier: &str) -> bool {
    NUMBER_LITERAL.is_match(identifier)
}

/// Rejects reserved words and numeric literals as assignment targets.
///
/// Runs before any other assignment rule and does not look at the symbol
/// table.
pub fn check_assignment_target(identifier: &str, position: &Position) -> Result<(), Error> {
    if is_reserved_word(identifier) || is_number_literal(identifier) {
        return Err(MK_ERROR!(
            ErrorImpl::ReservedIdentifier {
                identifier: identifier.to_string(),
            },
            position
        ));
    }

    Ok(())
}
