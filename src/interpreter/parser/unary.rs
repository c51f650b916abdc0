use std::iter::Peekable;

use crate::{
    error::{Expectation, ParseError},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{peek_required, unexpected_token},
        },
    },
    tree::{ParseNode, Symbol},
};

/// Remaining stack below which a nested expression is parsed on a new
/// segment.
const STACK_RED_ZONE: usize = 128 * 1024;

/// Size of each stack segment allocated for deeply nested parentheses.
const STACK_SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Parses a factor.
///
/// Grammar: `factor := number | "-" number | "(" expression ")"`
///
/// Unary minus applies to a single number literal only, so `--1` and `-(1)`
/// are rejected at the token after the minus.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the factor.
///
/// # Returns
/// The factor node, holding the number or the parenthesized expression.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the input ends where a factor should start.
/// - `UnexpectedToken` if the next token cannot start a factor.
/// - Propagates errors from the number or the enclosed expression.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let first = peek_required(tokens, Expectation::Factor)?;
    log::trace!("factor at position {}", first.1);

    match first {
        (Token::Number(_), _) => {
            let number = parse_number(tokens)?;
            let value = number.value().clone();
            Ok(ParseNode::with_children(Symbol::Factor, Some(first.clone()), value, vec![number]))
        },
        (Token::Minus, _) => {
            tokens.next();
            let number = parse_number(tokens)?;
            let value = -number.value();
            Ok(ParseNode::with_children(Symbol::Factor, Some(first.clone()), value, vec![number]))
        },
        (Token::LParen, _) => parse_grouping(tokens, first),
        other => Err(unexpected_token(other, Expectation::Factor)),
    }
}

/// Parses a number literal.
///
/// # Errors
/// - `UnexpectedEndOfInput` if no token is left.
/// - `UnexpectedToken` if the next token is not a number.
fn parse_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let next = peek_required(tokens, Expectation::Number)?;
    match next {
        (Token::Number(value), _) => {
            tokens.next();
            Ok(ParseNode::new(Symbol::Number, Some(next.clone()), value.clone()))
        },
        other => Err(unexpected_token(other, Expectation::Number)),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `open`: The opening parenthesis and its position.
///
/// # Returns
/// A factor node wrapping the inner expression, with the same value.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the input ends before the `)`.
/// - `ExpectedClosingParen` if another token follows the inner expression.
/// - Propagates errors from the inner expression.
///
/// Each level of nesting re-enters [`parse_expression`], so the call stack
/// is grown on demand and nesting depth is bounded by memory only.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         open: &(Token, usize))
                         -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();
    let expression = stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT_SIZE, || {
                         parse_expression(tokens, Symbol::Expression)
                     })?;
    match tokens.next() {
        Some((Token::RParen, _)) => {
            let value = expression.value().clone();
            Ok(ParseNode::with_children(Symbol::Factor,
                                        Some(open.clone()),
                                        value,
                                        vec![expression]))
        },
        Some((token, position)) => {
            Err(ParseError::ExpectedClosingParen { token:    token.to_string(),
                                                   position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { expecting: Expectation::RightParen }),
    }
}
