use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// Any failure of the tokenize, parse, evaluate pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Evaluation errors have no position; the tree does not keep spans.
    pub fn get_position(&self) -> Option<&Position> {
        match self {
            Error::Lex(LexError::UnexpectedCharacter { position, .. })
            | Error::Lex(LexError::InvalidToken { position, .. })
            | Error::Lex(LexError::TokenTooLong { position, .. })
            | Error::Parse(ParseError::UnexpectedToken { position, .. })
            | Error::Parse(ParseError::UnexpectedEnd { position })
            | Error::Parse(ParseError::TrailingInput { position, .. })
            | Error::Parse(ParseError::NestingTooDeep { position, .. })
            | Error::Parse(ParseError::NumberParseError { position, .. }) => Some(position),
            Error::Eval(_) => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            Error::Lex(LexError::UnexpectedCharacter { .. }) => "UnexpectedCharacter",
            Error::Lex(LexError::InvalidToken { .. }) => "InvalidToken",
            Error::Lex(LexError::TokenTooLong { .. }) => "TokenTooLong",
            Error::Parse(ParseError::UnexpectedToken { .. }) => "UnexpectedToken",
            Error::Parse(ParseError::UnexpectedEnd { .. }) => "UnexpectedEnd",
            Error::Parse(ParseError::TrailingInput { .. }) => "TrailingInput",
            Error::Parse(ParseError::NestingTooDeep { .. }) => "NestingTooDeep",
            Error::Parse(ParseError::NumberParseError { .. }) => "NumberParseError",
            Error::Eval(EvalError::UndefinedVariable { .. }) => "UndefinedVariable",
            Error::Eval(EvalError::UnknownOperator { .. }) => "UnknownOperator",
            Error::Eval(EvalError::UnknownFunction { .. }) => "UnknownFunction",
            Error::Eval(EvalError::ArityMismatch { .. }) => "ArityMismatch",
            Error::Eval(EvalError::DivisionByZero) => "DivisionByZero",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::Lex(LexError::UnexpectedCharacter { character, .. }) => ErrorTip::Suggestion(
                format!("Remove the character `{}`, it is not part of any token", character),
            ),
            Error::Lex(LexError::InvalidToken { token, .. }) => ErrorTip::Suggestion(format!(
                "`{}` is not a complete token, is a digit missing after the decimal point?",
                token
            )),
            Error::Lex(LexError::TokenTooLong { limit, .. }) => ErrorTip::Suggestion(format!(
                "Numbers and names are limited to {} characters",
                limit
            )),
            Error::Parse(ParseError::UnexpectedToken { lexeme, found, .. }) => {
                if lexeme.is_empty() {
                    ErrorTip::Suggestion(format!("Unexpected {}", found))
                } else {
                    ErrorTip::Suggestion(format!("Unexpected {} `{}`", found, lexeme))
                }
            }
            Error::Parse(ParseError::UnexpectedEnd { .. }) => ErrorTip::Suggestion(String::from(
                "The expression ended early, is an operand or `)` missing?",
            )),
            Error::Parse(ParseError::TrailingInput { lexeme, .. }) => ErrorTip::Suggestion(
                format!("Unexpected `{}` after a complete expression, is an operator missing?", lexeme),
            ),
            Error::Parse(ParseError::NestingTooDeep { limit, .. }) => ErrorTip::Suggestion(format!(
                "The expression nests deeper than {} levels, split it into smaller assignments",
                limit
            )),
            Error::Parse(ParseError::NumberParseError { .. }) => ErrorTip::None,
            Error::Eval(EvalError::UndefinedVariable { name }) => ErrorTip::Suggestion(format!(
                "Variable `{}` is not defined, assign it with `{} = ...`",
                name, name
            )),
            Error::Eval(EvalError::UnknownOperator { operator }) => {
                ErrorTip::Suggestion(format!("Operator `{}` is not supported", operator))
            }
            Error::Eval(EvalError::UnknownFunction { name }) => {
                ErrorTip::Suggestion(format!("Function `{}` is not defined", name))
            }
            Error::Eval(EvalError::ArityMismatch { name, expected, received }) => {
                ErrorTip::Suggestion(format!(
                    "`{}` expects {} argument{}, received {}",
                    name,
                    expected,
                    if *expected == 1 { "" } else { "s" },
                    received
                ))
            }
            Error::Eval(EvalError::DivisionByZero) => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("unexpected character {character:?} at {position}")]
    UnexpectedCharacter { character: char, position: Position },
    #[error("invalid token {token:?} at {position}")]
    InvalidToken { token: String, position: Position },
    #[error("token longer than {limit} characters at {position}")]
    TokenTooLong { limit: usize, position: Position },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unexpected token {found} {lexeme:?} at {position}")]
    UnexpectedToken {
        found: TokenKind,
        lexeme: String,
        position: Position,
    },
    #[error("unexpected end of input at {position}")]
    UnexpectedEnd { position: Position },
    #[error("trailing input {found} {lexeme:?} at {position}")]
    TrailingInput {
        found: TokenKind,
        lexeme: String,
        position: Position,
    },
    #[error("expression nested deeper than {limit} levels at {position}")]
    NestingTooDeep { limit: usize, position: Position },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String, position: Position },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("undefined variable {name:?}")]
    UndefinedVariable { name: String },
    #[error("unknown operator {operator:?}")]
    UnknownOperator { operator: String },
    #[error("unknown function {name:?}")]
    UnknownFunction { name: String },
    #[error("function {name:?} expects {expected} arguments, received {received}")]
    ArityMismatch {
        name: String,
        expected: usize,
        received: usize,
    },
    #[error("division by zero")]
    DivisionByZero,
}
