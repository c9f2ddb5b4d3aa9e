use crate::{
    ast::{ast::Node, visitor::Visitor},
    builtins::{binary_function, unary_function, BinaryFn, UnaryFn, FUNCTION_NAMES},
    errors::errors::EvalError,
};

use super::environment::Environment;

/// A named function resolved from the built-in tables.
#[derive(Clone, Copy)]
enum Callable {
    Unary(UnaryFn),
    Binary(BinaryFn),
}

impl Callable {
    fn resolve(name: &str) -> Option<Callable> {
        if !FUNCTION_NAMES.contains(name) {
            return None;
        }

        unary_function(name)
            .map(Callable::Unary)
            .or_else(|| binary_function(name).map(Callable::Binary))
    }

    fn arity(&self) -> usize {
        match self {
            Callable::Unary(_) => 1,
            Callable::Binary(_) => 2,
        }
    }
}

/// Reduces a tree to a single value.
///
/// Every call walks the whole tree again; variables are looked up each time
/// they are reached and nothing is cached between evaluations.
pub struct Evaluator<'env> {
    environment: &'env Environment,
}

impl<'env> Evaluator<'env> {
    pub fn new(environment: &'env Environment) -> Self {
        Evaluator { environment }
    }

    pub fn environment(&self) -> &Environment {
        self.environment
    }

    pub fn evaluate(&self, node: &Node) -> Result<f64, EvalError> {
        node.accept(self)
    }
}

impl Visitor for Evaluator<'_> {
    type Output = Result<f64, EvalError>;

    fn visit_number(&self, value: f64) -> Self::Output {
        Ok(value)
    }

    fn visit_variable(&self, name: &str) -> Self::Output {
        self.environment
            .get(name)
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: name.to_string(),
            })
    }

    fn visit_unary(&self, operator: &str, operand: &Node) -> Self::Output {
        let operand = operand.accept(self)?;
        let function = unary_function(operator).ok_or_else(|| EvalError::UnknownOperator {
            operator: operator.to_string(),
        })?;

        Ok(function(operand))
    }

    /// Left is always evaluated before right.
    fn visit_binary(&self, operator: &str, left: &Node, right: &Node) -> Self::Output {
        let left = left.accept(self)?;
        let right = right.accept(self)?;
        let function = binary_function(operator).ok_or_else(|| EvalError::UnknownOperator {
            operator: operator.to_string(),
        })?;

        // Also catches -0.0 and 0 / 0
        if operator == "/" && right == 0.0 {
            return Err(EvalError::DivisionByZero);
        }

        Ok(function(left, right))
    }

    fn visit_call(&self, name: &str, arguments: &[Node]) -> Self::Output {
        let values = arguments
            .iter()
            .map(|argument| argument.accept(self))
            .collect::<Result<Vec<f64>, EvalError>>()?;

        let callable = Callable::resolve(name).ok_or_else(|| EvalError::UnknownFunction {
            name: name.to_string(),
        })?;

        match (callable, values.as_slice()) {
            (Callable::Unary(function), [x]) => Ok(function(*x)),
            (Callable::Binary(function), [a, b]) => Ok(function(*a, *b)),
            _ => Err(EvalError::ArityMismatch {
                name: name.to_string(),
                expected: callable.arity(),
                received: values.len(),
            }),
        }
    }
}

/// Evaluates `node` against `environment`.
pub fn evaluate(node: &Node, environment: &Environment) -> Result<f64, EvalError> {
    Evaluator::new(environment).evaluate(node)
}
