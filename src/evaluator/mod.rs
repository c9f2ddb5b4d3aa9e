//! Tree-walking evaluation.
//!
//! - `Environment`, the mutable name to value mapping
//! - `Evaluator`, a `Visitor` that reduces a tree to one `f64`

pub mod environment;
pub mod evaluator;

#[cfg(test)]
mod tests;
