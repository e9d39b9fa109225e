/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the tree built by the parser
///
/// Submodules:
/// - ast: Node envelope, node variants and tree queries
/// - expressions: Constructors for expression nodes (type checked)
/// - operators: Operator tags and their classification
/// - statements: Constructors for statement nodes and identifier lists
pub mod ast;
pub mod expressions;
pub mod operators;
pub mod statements;
