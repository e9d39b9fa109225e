use std::{collections::HashMap, fmt::Display};

/// Handle to a symbol stored in a `SymbolTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Placeholder for targets that can never name a variable. No table
    /// holds it.
    pub const INVALID: SymbolId = SymbolId(u32::MAX);

    pub const fn from_raw(raw: u32) -> Self {
        SymbolId(raw)
    }

    pub const fn to_raw(self) -> u32 {
        self.0
    }
}

/// Semantic type of a symbol or expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymbolType {
    #[default]
    Undetermined,
    Integer,
    Boolean,
    String,
}

impl SymbolType {
    /// Human-readable description used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolType::Undetermined => "undetermined",
            SymbolType::Integer => "integer",
            SymbolType::Boolean => "boolean",
            SymbolType::String => "string",
        }
    }

    /// Zero value stored when a symbol of this type is declared.
    ///
    /// Undetermined falls back to an integer zero.
    pub fn zero_value(self) -> Value {
        match self {
            SymbolType::Undetermined | SymbolType::Integer => Value::Integer(0),
            SymbolType::Boolean => Value::Boolean(false),
            SymbolType::String => Value::String(String::new()),
        }
    }
}

impl Display for SymbolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runtime payload of a symbol or constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(String),
}

impl Value {
    pub fn get_type(&self) -> SymbolType {
        match self {
            Value::Integer(_) => SymbolType::Integer,
            Value::Boolean(_) => SymbolType::Boolean,
            Value::String(_) => SymbolType::String,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::String(value) => write!(f, "{:?}", value),
        }
    }
}

/// A named storage slot.
///
/// `value` is `None` until the symbol is declared; afterwards its variant
/// always matches `symbol_type` (or is an integer while the type is still
/// undetermined).
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub declared: bool,
    pub symbol_type: SymbolType,
    pub value: Option<Value>,
}

impl Symbol {
    pub fn new(name: String) -> Self {
        Symbol {
            name,
            declared: false,
            symbol_type: SymbolType::Undetermined,
            value: None,
        }
    }
}

/// Arena of symbols for a single compilation unit, indexed by name.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    lookup: HashMap<String, SymbolId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Returns the symbol named `name`, creating an undeclared one on first
    /// reference.
    pub fn intern(&mut self, name: &str) -> SymbolId {
        if let Some(id) = self.lookup.get(name) {
            return *id;
        }

        let id = SymbolId::from_raw(self.symbols.len() as u32);
        self.symbols.push(Symbol::new(name.to_string()));
        self.lookup.insert(name.to_string(), id);
        tracing::trace!(name, id = id.to_raw(), "symbol created");

        id
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.lookup.get(name).copied()
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.to_raw() as usize)
    }

    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.symbols.get_mut(id.to_raw() as usize)
    }

    /// Current type of the symbol; unknown handles are undetermined.
    pub fn type_of(&self, id: SymbolId) -> SymbolType {
        self.get(id)
            .map(|symbol| symbol.symbol_type)
            .unwrap_or_default()
    }

    /// Name of the symbol, or `"<unknown>"` for a handle from another table.
    pub fn name_of(&self, id: SymbolId) -> &str {
        self.get(id)
            .map(|symbol| symbol.name.as_str())
            .unwrap_or("<unknown>")
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| (SymbolId::from_raw(index as u32), symbol))
    }
}
