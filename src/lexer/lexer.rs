use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    builtins::{constant_value, is_function_name},
    errors::errors::LexError,
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// Longest number or name the scanner will grow. Every matcher re-checks
/// the whole candidate on each character, so the bound also bounds that work.
pub const MAX_LEXEME_LENGTH: usize = 256;

lazy_static! {
    static ref NUMBER: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap();
    // Digits followed by a dangling `.` may still grow into a number
    static ref NUMBER_PREFIX: Regex = Regex::new(r"^[0-9]+(\.[0-9]*)?$").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

/// How well a candidate lexeme fits a token matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// Not this token, and no extension of the candidate will be.
    None,
    /// Not a token yet, but an extension of the candidate could be.
    Partial,
    Complete,
}

pub type MatchHandler = fn(&str) -> Match;

#[derive(Clone)]
pub struct TokenMatcher {
    kind: TokenKind,
    matcher: MatchHandler,
}

/// Longest-match scanner state.
///
/// `candidate` is the lexeme being grown; it starts at `candidate_start`
/// and ends just before `pos`.
#[derive(Clone)]
pub struct Lexer {
    matchers: Vec<TokenMatcher>,
    tokens: Vec<Token>,
    source: Vec<char>,
    pos: usize,
    candidate: String,
    candidate_start: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            matchers: vec![
                TokenMatcher { kind: TokenKind::Number, matcher: number_matcher },
                TokenMatcher { kind: TokenKind::Identifier, matcher: identifier_matcher },
                TokenMatcher { kind: TokenKind::Operator, matcher: operator_matcher },
                TokenMatcher { kind: TokenKind::Function, matcher: function_matcher },
                TokenMatcher { kind: TokenKind::Constant, matcher: constant_matcher },
                TokenMatcher { kind: TokenKind::LParen, matcher: |s| exact_matcher(s, "(") },
                TokenMatcher { kind: TokenKind::RParen, matcher: |s| exact_matcher(s, ")") },
                TokenMatcher { kind: TokenKind::Comma, matcher: |s| exact_matcher(s, ",") },
            ],
            tokens: vec![],
            source: source.chars().collect(),
            pos: 0,
            candidate: String::new(),
            candidate_start: 0,
        }
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source[self.pos]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// True if any matcher can still use `candidate`, fully or as a prefix.
    pub fn accepts(&self, candidate: &str) -> bool {
        self.matchers
            .iter()
            .any(|pattern| (pattern.matcher)(candidate) != Match::None)
    }

    /// Picks the kind for a finished lexeme.
    ///
    /// Function and constant names are also valid identifiers, so set
    /// membership decides before matcher order does.
    pub fn classify(&self, candidate: &str) -> Option<TokenKind> {
        let complete: Vec<TokenKind> = self
            .matchers
            .iter()
            .filter(|pattern| (pattern.matcher)(candidate) == Match::Complete)
            .map(|pattern| pattern.kind)
            .collect();

        [TokenKind::Function, TokenKind::Constant]
            .into_iter()
            .find(|kind| complete.contains(kind))
            .or_else(|| complete.first().copied())
    }

    /// Emits a token for the current candidate and clears it.
    pub fn commit(&mut self) -> Result<(), LexError> {
        if self.candidate.is_empty() {
            return Ok(());
        }

        let lexeme = std::mem::take(&mut self.candidate);
        let span = Span {
            start: Position(self.candidate_start),
            end: Position(self.candidate_start + lexeme.chars().count()),
        };

        let kind = self.classify(&lexeme).ok_or_else(|| LexError::InvalidToken {
            token: lexeme.clone(),
            position: span.start,
        })?;

        let value = match kind {
            TokenKind::Function | TokenKind::Constant => lexeme.to_ascii_lowercase(),
            _ => lexeme,
        };

        self.push(MK_TOKEN!(kind, value, span));
        Ok(())
    }
}

fn number_matcher(candidate: &str) -> Match {
    if NUMBER.is_match(candidate) {
        Match::Complete
    } else if NUMBER_PREFIX.is_match(candidate) {
        Match::Partial
    } else {
        Match::None
    }
}

fn identifier_matcher(candidate: &str) -> Match {
    if IDENTIFIER.is_match(candidate) {
        Match::Complete
    } else {
        Match::None
    }
}

fn operator_matcher(candidate: &str) -> Match {
    match candidate {
        "+" | "-" | "*" | "/" | "^" => Match::Complete,
        _ => Match::None,
    }
}

fn function_matcher(candidate: &str) -> Match {
    if IDENTIFIER.is_match(candidate) && is_function_name(candidate) {
        Match::Complete
    } else {
        Match::None
    }
}

fn constant_matcher(candidate: &str) -> Match {
    if IDENTIFIER.is_match(candidate) && constant_value(candidate).is_some() {
        Match::Complete
    } else {
        Match::None
    }
}

fn exact_matcher(candidate: &str, expected: &str) -> Match {
    if candidate == expected {
        Match::Complete
    } else {
        Match::None
    }
}

/// Scans `source` into tokens, always ending with a single `EOF`.
///
/// The candidate lexeme grows one character at a time for as long as some
/// matcher accepts it. When the next character would make every matcher
/// reject, the candidate so far is committed and scanning restarts at the
/// rejected character. Whitespace ends the candidate and is dropped.
/// A candidate may not grow past `MAX_LEXEME_LENGTH` characters.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let current = lex.at();

        if current.is_whitespace() {
            lex.commit()?;
            lex.advance();
            continue;
        }

        if lex.candidate.is_empty() {
            lex.candidate_start = lex.pos;
        }

        lex.candidate.push(current);
        if lex.accepts(&lex.candidate) {
            if lex.pos - lex.candidate_start >= MAX_LEXEME_LENGTH {
                return Err(LexError::TokenTooLong {
                    limit: MAX_LEXEME_LENGTH,
                    position: Position(lex.candidate_start),
                });
            }

            lex.advance();
            continue;
        }

        lex.candidate.pop();
        if lex.candidate.is_empty() {
            return Err(LexError::UnexpectedCharacter {
                character: current,
                position: Position(lex.pos),
            });
        }

        lex.commit()?;
    }

    lex.commit()?;

    let end = Position(lex.pos);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), Span { start: end, end }));
    Ok(lex.tokens)
}
