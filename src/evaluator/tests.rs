//! Unit tests for the evaluator module.

use super::{
    environment::Environment,
    evaluator::{evaluate, Evaluator},
};
use crate::{ast::ast::Node, errors::errors::EvalError};

#[test]
fn test_evaluate_number() {
    assert_eq!(evaluate(&Node::number(2.5), &Environment::new()), Ok(2.5));
}

#[test]
fn test_evaluate_variable() {
    let mut environment = Environment::new();
    environment.set("x", 4.0);

    assert_eq!(evaluate(&Node::variable("x"), &environment), Ok(4.0));
}

#[test]
fn test_evaluate_undefined_variable() {
    assert_eq!(
        evaluate(&Node::variable("x"), &Environment::new()),
        Err(EvalError::UndefinedVariable {
            name: "x".to_string()
        })
    );
}

#[test]
fn test_same_tree_sees_environment_changes() {
    let tree = Node::binary("+", Node::variable("x"), Node::number(1.0));
    let mut environment = Environment::new();

    assert!(evaluate(&tree, &environment).is_err());

    environment.set("x", 2.0);
    assert_eq!(evaluate(&tree, &environment), Ok(3.0));

    environment.set("x", 10.0);
    assert_eq!(evaluate(&tree, &environment), Ok(11.0));
}

#[test]
fn test_evaluate_binary_operators() {
    let environment = Environment::new();
    let cases = [("+", 9.0), ("-", 5.0), ("*", 14.0), ("/", 3.5), ("^", 49.0)];

    for (operator, expected) in cases {
        let tree = Node::binary(operator, Node::number(7.0), Node::number(2.0));
        assert_eq!(evaluate(&tree, &environment), Ok(expected), "operator {}", operator);
    }
}

#[test]
fn test_evaluate_subtraction_order() {
    let tree = Node::binary(
        "-",
        Node::binary("-", Node::number(8.0), Node::number(3.0)),
        Node::number(2.0),
    );

    assert_eq!(evaluate(&tree, &Environment::new()), Ok(3.0));
}

#[test]
fn test_evaluate_unary_negation() {
    let tree = Node::unary("-", Node::unary("-", Node::number(3.0)));

    assert_eq!(evaluate(&tree, &Environment::new()), Ok(3.0));
}

#[test]
fn test_evaluate_unknown_operator() {
    let environment = Environment::new();

    assert_eq!(
        evaluate(&Node::binary("%", Node::number(1.0), Node::number(2.0)), &environment),
        Err(EvalError::UnknownOperator {
            operator: "%".to_string()
        })
    );
    assert_eq!(
        evaluate(&Node::unary("!", Node::number(1.0)), &environment),
        Err(EvalError::UnknownOperator {
            operator: "!".to_string()
        })
    );
}

#[test]
fn test_evaluate_division_by_zero() {
    let environment = Environment::new();

    for divisor in [0.0, -0.0] {
        let tree = Node::binary("/", Node::number(5.0), Node::number(divisor));
        assert_eq!(evaluate(&tree, &environment), Err(EvalError::DivisionByZero));
    }

    let tree = Node::binary("/", Node::number(0.0), Node::number(0.0));
    assert_eq!(evaluate(&tree, &environment), Err(EvalError::DivisionByZero));
}

#[test]
fn test_division_by_zero_checks_evaluated_divisor() {
    let mut environment = Environment::new();
    environment.set("n", 3.0);
    let tree = Node::binary(
        "/",
        Node::number(1.0),
        Node::binary("-", Node::variable("n"), Node::number(3.0)),
    );

    assert_eq!(evaluate(&tree, &environment), Err(EvalError::DivisionByZero));
}

#[test]
fn test_evaluate_function_calls() {
    let environment = Environment::new();

    assert_eq!(
        evaluate(&Node::call("sqrt", vec![Node::number(16.0)]), &environment),
        Ok(4.0)
    );
    assert_eq!(
        evaluate(
            &Node::call("pow", vec![Node::number(2.0), Node::number(8.0)]),
            &environment
        ),
        Ok(256.0)
    );
    assert_eq!(
        evaluate(
            &Node::call("min", vec![Node::number(2.0), Node::number(-8.0)]),
            &environment
        ),
        Ok(-8.0)
    );
}

#[test]
fn test_evaluate_arity_mismatch() {
    let environment = Environment::new();

    assert_eq!(
        evaluate(
            &Node::call("sin", vec![Node::number(1.0), Node::number(2.0)]),
            &environment
        ),
        Err(EvalError::ArityMismatch {
            name: "sin".to_string(),
            expected: 1,
            received: 2,
        })
    );
    assert_eq!(
        evaluate(&Node::call("pow", vec![Node::number(1.0)]), &environment),
        Err(EvalError::ArityMismatch {
            name: "pow".to_string(),
            expected: 2,
            received: 1,
        })
    );
}

#[test]
fn test_evaluate_unknown_function() {
    let environment = Environment::new();

    assert_eq!(
        evaluate(&Node::call("foo", vec![Node::number(1.0)]), &environment),
        Err(EvalError::UnknownFunction {
            name: "foo".to_string()
        })
    );
    // Operators are not callable by name
    assert_eq!(
        evaluate(&Node::call("-", vec![Node::number(1.0)]), &environment),
        Err(EvalError::UnknownFunction {
            name: "-".to_string()
        })
    );
}

#[test]
fn test_arguments_evaluate_before_arity_check() {
    let tree = Node::call("sin", vec![Node::variable("a"), Node::variable("b")]);

    assert_eq!(
        evaluate(&tree, &Environment::new()),
        Err(EvalError::UndefinedVariable {
            name: "a".to_string()
        })
    );
}

#[test]
fn test_left_operand_errors_first() {
    let tree = Node::binary("+", Node::variable("left"), Node::variable("right"));

    assert_eq!(
        evaluate(&tree, &Environment::new()),
        Err(EvalError::UndefinedVariable {
            name: "left".to_string()
        })
    );
}

#[test]
fn test_ieee_edge_cases_pass_through() {
    let environment = Environment::new();

    let root = evaluate(&Node::call("sqrt", vec![Node::number(-1.0)]), &environment).unwrap();
    assert!(root.is_nan());

    let huge = evaluate(
        &Node::binary("^", Node::number(10.0), Node::number(400.0)),
        &environment,
    )
    .unwrap();
    assert!(huge.is_infinite());
}

#[test]
fn test_evaluator_instance_reuses_environment() {
    let mut environment = Environment::new();
    environment.set("r", 2.0);
    let evaluator = Evaluator::new(&environment);

    assert_eq!(evaluator.environment().get("r"), Some(2.0));
    assert_eq!(
        evaluator.evaluate(&Node::binary("*", Node::variable("r"), Node::variable("r"))),
        Ok(4.0)
    );
    assert_eq!(evaluator.evaluate(&Node::variable("r")), Ok(2.0));
}

#[test]
fn test_environment_operations() {
    let mut environment = Environment::new();
    assert!(environment.is_empty());

    assert_eq!(environment.set("x", 1.0), None);
    assert_eq!(environment.set("x", 2.0), Some(1.0));
    environment.set("y", 3.0);

    assert_eq!(environment.len(), 2);
    assert!(environment.contains("y"));
    assert_eq!(environment.get("x"), Some(2.0));

    let mut names: Vec<&str> = environment.iter().map(|(name, _)| name).collect();
    names.sort();
    assert_eq!(names, vec!["x", "y"]);

    assert_eq!(environment.remove("x"), Some(2.0));
    assert_eq!(environment.get("x"), None);

    environment.clear();
    assert!(environment.is_empty());
}
