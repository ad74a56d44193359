/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: the `Node` trait, traversal and the structural nodes
/// - expressions: expression nodes and operators
/// - statements: statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;
