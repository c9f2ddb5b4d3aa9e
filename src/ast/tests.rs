//! Unit tests for the AST module.

use pretty_assertions::assert_eq;

use super::ast::Node;

#[test]
fn test_children_counts() {
    let leaf = Node::number(1.0);
    let unary = Node::unary("-", Node::variable("x"));
    let binary = Node::binary("+", Node::number(1.0), Node::number(2.0));
    let call = Node::call("pow", vec![Node::number(2.0), Node::number(3.0)]);

    assert_eq!(leaf.children().len(), 0);
    assert_eq!(Node::variable("x").children().len(), 0);
    assert_eq!(unary.children().len(), 1);
    assert_eq!(binary.children().len(), 2);
    assert_eq!(call.children().len(), 2);
}

#[test]
fn test_binary_children_are_ordered() {
    let node = Node::binary("-", Node::number(8.0), Node::number(3.0));

    assert_eq!(node.children(), vec![&Node::number(8.0), &Node::number(3.0)]);
}

#[test]
fn test_display_is_fully_parenthesised() {
    let node = Node::binary(
        "-",
        Node::binary("-", Node::number(8.0), Node::number(3.0)),
        Node::unary("-", Node::variable("x")),
    );

    assert_eq!(node.to_string(), "((8 - 3) - (-x))");
}

#[test]
fn test_display_function_call() {
    let node = Node::call(
        "pow",
        vec![Node::number(2.5), Node::call("sin", vec![Node::variable("y")])],
    );

    assert_eq!(node.to_string(), "pow(2.5, sin(y))");
}
