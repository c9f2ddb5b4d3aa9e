//! Double dispatch over the closed set of node variants.
//!
//! `Node::accept` matches on the variant and calls the one method here that
//! handles it. Adding a variant breaks every visitor at compile time.

use super::ast::Node;

pub trait Visitor {
    type Output;

    fn visit_number(&self, value: f64) -> Self::Output;
    fn visit_variable(&self, name: &str) -> Self::Output;
    fn visit_unary(&self, operator: &str, operand: &Node) -> Self::Output;
    fn visit_binary(&self, operator: &str, left: &Node, right: &Node) -> Self::Output;
    fn visit_call(&self, name: &str, arguments: &[Node]) -> Self::Output;
}

/// Renders a tree as fully parenthesised infix, e.g. `((8 - 3) - 2)`.
pub struct Printer;

impl Visitor for Printer {
    type Output = String;

    fn visit_number(&self, value: f64) -> String {
        value.to_string()
    }

    fn visit_variable(&self, name: &str) -> String {
        name.to_string()
    }

    fn visit_unary(&self, operator: &str, operand: &Node) -> String {
        format!("({}{})", operator, operand.accept(self))
    }

    fn visit_binary(&self, operator: &str, left: &Node, right: &Node) -> String {
        format!("({} {} {})", left.accept(self), operator, right.accept(self))
    }

    fn visit_call(&self, name: &str, arguments: &[Node]) -> String {
        let arguments: Vec<String> = arguments.iter().map(|argument| argument.accept(self)).collect();
        format!("{}({})", name, arguments.join(", "))
    }
}
