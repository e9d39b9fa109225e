//! Symbol table module.
//!
//! Holds the variables of one compilation unit. Symbols are stored in an
//! arena and referred to by `SymbolId` handles, so tree nodes never borrow
//! from the table and the table can grow while nodes are alive.
//!
//! Submodules:
//! - symbols: Symbol entries, semantic types, values and the table itself

pub mod symbols;

#[cfg(test)]
mod tests;
