//! Parser module for building the expression tree.
//!
//! This module contains a recursive-descent parser that transforms a stream
//! of tokens into a `Node` tree. Each precedence level is one function that
//! calls the next level for its operands:
//!
//! - `expression` handles `+` and `-` (lowest, left-associative)
//! - `term` handles `*` and `/` (left-associative)
//! - `power` handles `^` (right-associative)
//! - `factor` handles literals, variables, constants, calls, groups and
//!   unary minus (highest)

pub mod expr;
pub mod parser;
