//! Built-in functions, operators and constants.
//!
//! The tables are built once, on first use, and never mutated afterwards.
//! The lexer derives its function-name set from the same tables the
//! evaluator dispatches through, so a name is a function to every stage or
//! to none.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

pub type UnaryFn = fn(f64) -> f64;
pub type BinaryFn = fn(f64, f64) -> f64;

lazy_static! {
    pub static ref UNARY_FUNCTIONS: HashMap<&'static str, UnaryFn> = {
        let mut map: HashMap<&'static str, UnaryFn> = HashMap::new();
        map.insert("-", |x| -x);
        map.insert("sin", f64::sin);
        map.insert("cos", f64::cos);
        map.insert("tan", f64::tan);
        map.insert("sec", |x| 1.0 / x.cos());
        map.insert("csc", |x| 1.0 / x.sin());
        map.insert("cot", |x| 1.0 / x.tan());
        map.insert("asin", f64::asin);
        map.insert("acos", f64::acos);
        map.insert("atan", f64::atan);
        map.insert("sqrt", f64::sqrt);
        map.insert("ln", f64::ln);
        map.insert("log", f64::log10);
        map.insert("abs", f64::abs);
        map.insert("exp", f64::exp);
        map
    };

    pub static ref BINARY_FUNCTIONS: HashMap<&'static str, BinaryFn> = {
        let mut map: HashMap<&'static str, BinaryFn> = HashMap::new();
        map.insert("+", |a, b| a + b);
        map.insert("-", |a, b| a - b);
        map.insert("*", |a, b| a * b);
        // Zero divisors are rejected by the evaluator before this runs
        map.insert("/", |a, b| a / b);
        map.insert("^", f64::powf);
        map.insert("pow", f64::powf);
        map.insert("min", f64::min);
        map.insert("max", f64::max);
        map
    };

    pub static ref CONSTANTS: HashMap<&'static str, f64> = {
        let mut map = HashMap::new();
        map.insert("pi", std::f64::consts::PI);
        map.insert("e", std::f64::consts::E);
        map
    };

    /// Names callable with `name(...)` syntax: the alphabetic entries of
    /// both function tables.
    pub static ref FUNCTION_NAMES: HashSet<&'static str> = UNARY_FUNCTIONS
        .keys()
        .chain(BINARY_FUNCTIONS.keys())
        .filter(|name| name.chars().all(|c| c.is_ascii_alphabetic()))
        .copied()
        .collect();
}

/// Function names match case-insensitively.
pub fn is_function_name(name: &str) -> bool {
    FUNCTION_NAMES.contains(name.to_ascii_lowercase().as_str())
}

/// Constant names match case-insensitively.
pub fn constant_value(name: &str) -> Option<f64> {
    CONSTANTS.get(name.to_ascii_lowercase().as_str()).copied()
}

pub fn unary_function(name: &str) -> Option<UnaryFn> {
    UNARY_FUNCTIONS.get(name).copied()
}

pub fn binary_function(name: &str) -> Option<BinaryFn> {
    BINARY_FUNCTIONS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_names_exclude_operators() {
        assert!(is_function_name("sin"));
        assert!(is_function_name("pow"));
        assert!(is_function_name("SQRT"));
        assert!(!is_function_name("-"));
        assert!(!is_function_name("^"));
        assert!(!is_function_name("x"));
    }

    #[test]
    fn test_constants() {
        assert_eq!(constant_value("pi"), Some(std::f64::consts::PI));
        assert_eq!(constant_value("E"), Some(std::f64::consts::E));
        assert_eq!(constant_value("tau"), None);
    }

    #[test]
    fn test_table_lookups() {
        assert_eq!(unary_function("-").map(|f| f(2.0)), Some(-2.0));
        assert_eq!(unary_function("log").map(|f| f(100.0)), Some(2.0));
        assert_eq!(binary_function("^").map(|f| f(2.0, 10.0)), Some(1024.0));
        assert_eq!(binary_function("max").map(|f| f(2.0, 3.0)), Some(3.0));
        assert!(unary_function("pow").is_none());
        assert!(binary_function("sin").is_none());
    }
}
