use crate::{
    ast::ast::Node,
    builtins::constant_value,
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// expression := term (('+' | '-') term)*
pub fn parse_expression(parser: &mut Parser) -> Result<Node, ParseError> {
    let mut left = parse_term(parser)?;

    let mut levels = 0;

    while let Some(operator) = parser.current_operator(&["+", "-"]) {
        parser.enter()?;
        levels += 1;

        parser.advance()?;
        let right = parse_term(parser)?;
        left = Node::binary(operator, left, right);
    }

    parser.leave(levels);
    Ok(left)
}

/// term := power (('*' | '/') power)*
pub fn parse_term(parser: &mut Parser) -> Result<Node, ParseError> {
    let mut left = parse_power(parser)?;

    let mut levels = 0;

    while let Some(operator) = parser.current_operator(&["*", "/"]) {
        parser.enter()?;
        levels += 1;

        parser.advance()?;
        let right = parse_power(parser)?;
        left = Node::binary(operator, left, right);
    }

    parser.leave(levels);
    Ok(left)
}

/// power := factor ('^' power)?
///
/// Recursing on the right makes `2 ^ 3 ^ 2` group as `2 ^ (3 ^ 2)`.
pub fn parse_power(parser: &mut Parser) -> Result<Node, ParseError> {
    let base = parse_factor(parser)?;

    if let Some(operator) = parser.current_operator(&["^"]) {
        parser.advance()?;
        let exponent = parser.nested(parse_power)?;
        return Ok(Node::binary(operator, base, exponent));
    }

    Ok(base)
}

/// Every recursive path through a factor goes through `Parser::nested`, so
/// nesting past `MAX_DEPTH` fails instead of exhausting the stack.
pub fn parse_factor(parser: &mut Parser) -> Result<Node, ParseError> {
    match parser.current_token_kind() {
        TokenKind::Number => parse_number_expr(parser),
        TokenKind::Identifier => Ok(Node::variable(parser.advance()?.value)),
        TokenKind::Constant => parse_constant_expr(parser),
        TokenKind::Function => parser.nested(parse_call_expr),
        TokenKind::LParen => parser.nested(parse_grouping_expr),
        TokenKind::Operator if parser.current_operator(&["-"]).is_some() => {
            parser.nested(parse_prefix_expr)
        }
        _ => Err(parser.unexpected()),
    }
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Node, ParseError> {
    let token = parser.advance()?;

    token
        .value
        .parse()
        .map(Node::number)
        .map_err(|_| ParseError::NumberParseError {
            token: token.value.clone(),
            position: token.span.start,
        })
}

/// Constants are folded to their value here; the tree never sees the name.
pub fn parse_constant_expr(parser: &mut Parser) -> Result<Node, ParseError> {
    let unexpected = parser.unexpected();
    let token = parser.advance()?;

    constant_value(&token.value)
        .map(Node::number)
        .ok_or(unexpected)
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Node, ParseError> {
    let operator_token = parser.advance()?;
    let operand = parse_factor(parser)?;

    Ok(Node::unary(operator_token.value, operand))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, ParseError> {
    parser.expect(TokenKind::LParen)?;
    let expr = parse_expression(parser)?;
    parser.expect(TokenKind::RParen)?;

    Ok(expr)
}

/// FUNCTION '(' expression (',' expression)* ')'
///
/// The number of arguments is not checked here.
pub fn parse_call_expr(parser: &mut Parser) -> Result<Node, ParseError> {
    let name = parser.expect(TokenKind::Function)?.value;
    parser.expect(TokenKind::LParen)?;

    let mut arguments = vec![parse_expression(parser)?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance()?;
        arguments.push(parse_expression(parser)?);
    }

    parser.expect(TokenKind::RParen)?;

    Ok(Node::call(name, arguments))
}
