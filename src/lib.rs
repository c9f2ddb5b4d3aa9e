#![allow(clippy::module_inception)]

use crate::{
    errors::errors::{Error, ErrorTip},
    evaluator::{environment::Environment, evaluator::Evaluator},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod builtins;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Character offset into the source expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub usize);

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole pipeline on `source`: tokenize, parse, then evaluate
/// against `environment`.
pub fn evaluate_str(source: &str, environment: &Environment) -> Result<f64, Error> {
    let tokens = tokenize(source)?;
    let ast = parse(tokens)?;
    let value = Evaluator::new(environment).evaluate(&ast)?;

    Ok(value)
}

/// Finds the line containing the character at `position`.
///
/// Returns the 1-based line number, the line's text and the column of
/// `position` within it. A position one past the end of the source maps to
/// the end of the last line, which is where `EOF` tokens point.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in source.split_inclusive('\n') {
        let length = line.chars().count();
        let end = start + length;

        if (start..end).contains(&position) {
            return Some((line_number, line.to_string(), position - start));
        }

        last = Some((line_number, line.to_string(), length));
        start = end;
        line_number += 1;
    }

    if position == start {
        return Some(last.unwrap_or((1, String::new(), 0)));
    }

    None
}

/// Renders an error the way the shell prints it.
///
/// ```text
/// Error: UnexpectedCharacter (Remove the character `#`, it is not part of any token)
///   |
/// 1 | 3 + #
///   | ----^
/// ```
///
/// Errors without a position (evaluation errors) render as a single line.
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = match error.get_tip() {
        ErrorTip::None => format!("Error: {}\n", error.get_error_name()),
        tip => format!("Error: {} ({})\n", error.get_error_name(), tip),
    };

    let Some(position) = error.get_position() else {
        return out;
    };

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (string.chars().skip(start).collect(), start)
}
