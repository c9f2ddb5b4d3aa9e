//! Error types for every pipeline stage.
//!
//! - `LexError`, `ParseError` and `EvalError` for the three stages
//! - `Error`, which wraps all three so the stages compose with `?`
//! - Error names, positions and suggestions for the shell's diagnostics

pub mod errors;
