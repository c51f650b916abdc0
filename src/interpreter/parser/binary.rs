use std::iter::Peekable;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::{
    error::{Expectation, ParseError},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::parse_factor,
            utils::{peek_required, unexpected_token},
        },
    },
    tree::{ParseNode, Symbol},
};

/// Parses the additive tail of an expression.
///
/// Grammar: `expression_suffix := ("+" | "-") term expression_suffix | ε`
///
/// The empty production is taken at end of input or before `*` or `)`, and
/// yields `0`. Otherwise the value is the nested suffix's value plus or minus
/// this suffix's term, according to this suffix's operator. Folding from the
/// innermost suffix outward keeps `+` and `-` left-associative:
/// `a - b - c` gives `a + ((0 - c) - b)`.
///
/// The operators and terms are read in a loop and the nested suffix nodes are
/// built afterwards from the rightmost operator back, so the length of the
/// chain does not grow the call stack.
///
/// # Parameters
/// - `tokens`: Token stream positioned after a term.
///
/// # Returns
/// The suffix node; childless for the empty production.
///
/// # Errors
/// Propagates errors from the terms of the chain.
///
/// # Panics
/// If the chain ends at any token other than `*` or `)`. The term before each
/// suffix has already rejected such tokens, so reaching that case is a parser
/// bug.
pub fn parse_expression_suffix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut links = Vec::new();

    while let Some(next) = tokens.peek().copied() {
        match next {
            (Token::Plus | Token::Minus, position) => {
                log::trace!("expressionSuffix at position {position}");
                tokens.next();
                links.push((next, parse_term(tokens)?));
            },
            (Token::Times | Token::RParen, _) => break,
            (token, position) => {
                unreachable!("{token} at position {position} should have been rejected by the preceding term")
            },
        }
    }

    let empty = ParseNode::new(Symbol::ExpressionSuffix, None, BigInt::zero());
    Ok(links.into_iter().rev().fold(empty, |tail, (operator, term)| {
                                  let value = if matches!(operator.0, Token::Plus) {
                                      tail.value() + term.value()
                                  } else {
                                      tail.value() - term.value()
                                  };
                                  ParseNode::with_children(Symbol::ExpressionSuffix,
                                                           Some(operator.clone()),
                                                           value,
                                                           vec![term, tail])
                              }))
}

/// Parses a term.
///
/// Grammar: `term := factor term_suffix`
///
/// The value is the factor's value times the suffix's value.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the term.
///
/// # Returns
/// The term node with its factor and suffix as children.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the input ends where a term should start.
/// - `UnexpectedToken` if the next token cannot start a factor.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let first = peek_required(tokens, Expectation::Term)?;
    log::trace!("term at position {}", first.1);

    match first {
        (Token::LParen | Token::Number(_) | Token::Minus, _) => {
            let factor = parse_factor(tokens)?;
            let suffix = parse_term_suffix(tokens, first)?;
            let value = factor.value() * suffix.value();
            Ok(ParseNode::with_children(Symbol::Term,
                                        Some(first.clone()),
                                        value,
                                        vec![factor, suffix]))
        },
        other => Err(unexpected_token(other, Expectation::Term)),
    }
}

/// Parses the multiplicative tail of a term.
///
/// Grammar: `term_suffix := "*" factor term_suffix | ε`
///
/// The empty production is taken at end of input or before `-`, `+` or `)`,
/// and yields `1`. Otherwise the value is the nested suffix's value times
/// this suffix's factor. Like [`parse_expression_suffix`], the chain is read
/// in a loop and nested afterwards.
///
/// # Parameters
/// - `tokens`: Token stream positioned after a factor.
/// - `head`: The first token of the enclosing term, for diagnostics.
///
/// # Returns
/// The suffix node; childless for the empty production.
///
/// # Errors
/// - `ExtraneousTokenInTerm` if the lookahead can neither continue nor end
///   the term (a number, `(`, `^` or an unrecognized character).
/// - Propagates errors from the factors of the chain.
pub fn parse_term_suffix<'a, I>(tokens: &mut Peekable<I>,
                                head: &(Token, usize))
                                -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut links = Vec::new();

    while let Some(next) = tokens.peek().copied() {
        match next {
            (Token::Times, position) => {
                log::trace!("termSuffix at position {position}");
                tokens.next();
                links.push((next, parse_factor(tokens)?));
            },
            (Token::Minus | Token::Plus | Token::RParen, _) => break,
            (token, position) => {
                let (term_token, term_position) = head;
                return Err(ParseError::ExtraneousTokenInTerm { token:         token.to_string(),
                                                               position:      *position,
                                                               term_token:    term_token.to_string(),
                                                               term_position: *term_position, });
            },
        }
    }

    let empty = ParseNode::new(Symbol::TermSuffix, None, BigInt::one());
    Ok(links.into_iter().rev().fold(empty, |tail, (operator, factor)| {
                                  let value = tail.value() * factor.value();
                                  ParseNode::with_children(Symbol::TermSuffix,
                                                           Some(operator.clone()),
                                                           value,
                                                           vec![factor, tail])
                              }))
}
