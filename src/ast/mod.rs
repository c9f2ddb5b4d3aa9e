/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The `Node` sum type and its helpers
/// - visitor: The `Visitor` trait used for double dispatch, plus a printer
pub mod ast;
pub mod visitor;

#[cfg(test)]
mod tests;
