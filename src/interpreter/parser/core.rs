use std::iter::Peekable;

use crate::{
    error::{Expectation, ParseError},
    interpreter::{
        lexer::Token,
        parser::{
            binary::{parse_expression_suffix, parse_term},
            utils::{peek_required, unexpected_token},
        },
    },
    tree::{ParseNode, ParseTree, Symbol},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses and evaluates a complete token sequence.
///
/// The whole sequence must form exactly one expression. The first failure
/// aborts the parse and is returned unchanged; there is no recovery and no
/// partial tree.
///
/// # Parameters
/// - `tokens`: Tokens paired with their code point positions, as produced by
///   [`scan`](crate::interpreter::lexer::scan).
///
/// # Returns
/// The parse tree, rooted at a [`Symbol::Root`] node holding the value of the
/// whole expression.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the sequence ends before the expression is
///   complete (including an empty sequence).
/// - `UnexpectedToken`, `ExpectedClosingParen` or `ExtraneousTokenInTerm` from
///   the productions.
/// - `ExtraneousToken` if tokens remain after a complete expression.
///
/// # Example
/// ```
/// use bigarith::interpreter::{lexer::scan, parser::core::parse_tokens};
/// use num_bigint::BigInt;
///
/// let tree = parse_tokens(&scan("5 + 6 * 7")).unwrap();
/// assert_eq!(tree.value(), &BigInt::from(47));
/// ```
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<ParseTree> {
    let mut iter = tokens.iter().peekable();
    let root = parse_expression(&mut iter, Symbol::Root)?;

    if let Some((token, position)) = iter.peek() {
        log::debug!("rejecting leftover {token} at position {position}");
        return Err(ParseError::ExtraneousToken { token:    token.to_string(),
                                                 position: *position, });
    }

    log::debug!("parsed {} tokens into {} nodes, value {}",
                tokens.len(),
                root.node_count(),
                root.value());
    Ok(ParseTree::new(root))
}

/// Parses an expression.
///
/// Grammar: `expression := term expression_suffix`
///
/// The value is the term's value plus the suffix's value. The node is
/// labelled with `symbol`, which is [`Symbol::Root`] at the top level and
/// [`Symbol::Expression`] inside parentheses.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the expression.
/// - `symbol`: Label for the returned node.
///
/// # Returns
/// The expression node with its term and suffix as children.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, symbol: Symbol) -> ParseResult<ParseNode>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let first = peek_required(tokens, Expectation::Expression)?;
    log::trace!("{symbol} at position {}", first.1);

    match first {
        (Token::LParen | Token::Number(_) | Token::Minus, _) => {
            let term = parse_term(tokens)?;
            let suffix = parse_expression_suffix(tokens)?;
            let value = term.value() + suffix.value();
            Ok(ParseNode::with_children(symbol, Some(first.clone()), value, vec![term, suffix]))
        },
        other => Err(unexpected_token(other, Expectation::Expression)),
    }
}
