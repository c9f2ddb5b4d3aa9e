//! Lexical analysis.
//!
//! Converts an expression string into tokens using longest-match scanning:
//!
//! - Numbers, identifiers, function names and constant names
//! - Single-character operators, parentheses and commas
//! - Span tracking for error reporting

pub mod lexer;
pub mod tokens;
