use std::fmt::Display;

use super::visitor::{Printer, Visitor};

/// Expression Node
///
/// Every parent owns its children outright; a tree is built once by the
/// parser and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    NumberLiteral {
        value: f64,
    },
    /// Resolved against the environment at evaluation time, not parse time.
    VariableRef {
        name: String,
    },
    UnaryOp {
        operator: String,
        operand: Box<Node>,
    },
    BinaryOp {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Arity is checked by the evaluator, not here.
    FunctionCall {
        name: String,
        arguments: Vec<Node>,
    },
}

impl Node {
    pub fn number(value: f64) -> Self {
        Node::NumberLiteral { value }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Node::VariableRef { name: name.into() }
    }

    pub fn unary(operator: impl Into<String>, operand: Node) -> Self {
        Node::UnaryOp {
            operator: operator.into(),
            operand: Box::new(operand),
        }
    }

    pub fn binary(operator: impl Into<String>, left: Node, right: Node) -> Self {
        Node::BinaryOp {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(name: impl Into<String>, arguments: Vec<Node>) -> Self {
        Node::FunctionCall {
            name: name.into(),
            arguments,
        }
    }

    /// Ordered children: none for leaves, one for unary operations, left
    /// then right for binary operations, and the arguments of a call.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::NumberLiteral { .. } | Node::VariableRef { .. } => vec![],
            Node::UnaryOp { operand, .. } => vec![operand.as_ref()],
            Node::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Node::FunctionCall { arguments, .. } => arguments.iter().collect(),
        }
    }

    /// Routes this node to the visitor method for its variant.
    pub fn accept<V: Visitor>(&self, visitor: &V) -> V::Output {
        match self {
            Node::NumberLiteral { value } => visitor.visit_number(*value),
            Node::VariableRef { name } => visitor.visit_variable(name),
            Node::UnaryOp { operator, operand } => visitor.visit_unary(operator, operand),
            Node::BinaryOp {
                operator,
                left,
                right,
            } => visitor.visit_binary(operator, left, right),
            Node::FunctionCall { name, arguments } => visitor.visit_call(name, arguments),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.accept(&Printer))
    }
}
