use std::iter::Peekable;

use crate::{
    error::{Expectation, ParseError},
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Returns the next token without consuming it, failing when the input is
/// exhausted.
///
/// This is the lookahead used wherever a production cannot take an empty
/// transition. The `expecting` argument selects the end-of-input message.
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput` if no token is left.
pub(in crate::interpreter::parser) fn peek_required<'a, I>(tokens: &mut Peekable<I>,
                                                           expecting: Expectation)
                                                           -> ParseResult<&'a (Token, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek()
          .copied()
          .ok_or(ParseError::UnexpectedEndOfInput { expecting })
}

/// Builds the error for a token that cannot begin the expected construct.
pub(in crate::interpreter::parser) fn unexpected_token((token, position): &(Token, usize),
                                                       expecting: Expectation)
                                                       -> ParseError {
    ParseError::UnexpectedToken { token: token.to_string(),
                                  position: *position,
                                  expecting }
}
