//! # bigarith
//!
//! bigarith evaluates arithmetic expressions over arbitrary-precision signed
//! integers. Expressions use `+`, `-`, `*`, parentheses and unary minus on
//! number literals; results are exact regardless of magnitude. Malformed input
//! yields a single error naming what was expected and where.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use num_bigint::BigInt;

use crate::interpreter::{lexer::scan, parser::core::parse_tokens};

/// Provides the error type for parsing.
///
/// This module defines every error that can be raised while parsing an
/// expression. Lexing cannot fail and arithmetic cannot overflow, so parse
/// errors are the only failures.
///
/// # Responsibilities
/// - Distinguishes premature end of input, unexpected tokens, missing closing
///   parentheses and leftover tokens.
/// - Carries the code point position of the offending token.
/// - Renders human-readable messages through `Display`.
pub mod error;
/// Orchestrates scanning and parsing.
///
/// This module ties the lexer and the parser together. The lexer turns text
/// into positioned tokens; the parser consumes them with one token of
/// lookahead and evaluates as it goes.
pub mod interpreter;
/// Defines the parse tree.
///
/// Each node records its grammar symbol, the token it started at, its
/// children and the exact value computed for its subtree. The tree can be
/// rendered for diagnostics.
pub mod tree;

pub use crate::{
    error::{Expectation, ParseError},
    tree::{ParseNode, ParseTree, Symbol},
};

/// Parses `source` and returns its parse tree.
///
/// The whole string is scanned, then parsed as a single expression.
///
/// # Errors
/// Returns the first syntax error encountered, including premature end of
/// input and tokens left over after a complete expression.
///
/// # Examples
/// ```
/// use bigarith::parse;
/// use num_bigint::BigInt;
///
/// let tree = parse("(5 + 6) * 7").unwrap();
/// assert_eq!(tree.value(), &BigInt::from(77));
///
/// let err = parse("((1)").unwrap_err();
/// assert_eq!(err.to_string(),
///            "Unexpected end-of-input. Expecting a right parenthesis.");
/// ```
pub fn parse(source: &str) -> Result<ParseTree, ParseError> {
    let tokens = scan(source);
    parse_tokens(&tokens)
}

/// Evaluates `source` and returns its exact value.
///
/// # Errors
/// Returns the same errors as [`parse`].
///
/// # Examples
/// ```
/// use bigarith::evaluate;
/// use num_bigint::BigInt;
///
/// let value = evaluate("11111111111111111111 * -5").unwrap();
/// assert_eq!(value, "-55555555555555555555".parse::<BigInt>().unwrap());
///
/// assert!(evaluate("--1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<BigInt, ParseError> {
    parse(source).map(ParseTree::into_value)
}

/// Parses every non-blank line of `source` as an independent expression.
///
/// Lines consisting only of whitespace are skipped. Results keep the order of
/// the input and are tagged with their 1-based line number. An error on one
/// line does not affect the others.
///
/// # Examples
/// ```
/// use bigarith::parse_lines;
/// use num_bigint::BigInt;
///
/// let trees = parse_lines("\n(2)\n3 3");
/// assert_eq!(trees.len(), 2);
/// assert_eq!(trees[0].0, 2);
/// assert_eq!(trees[0].1.as_ref().unwrap().value(), &BigInt::from(2));
/// assert_eq!(trees[1].0, 3);
/// assert_eq!(trees[1].1.as_ref().unwrap_err().position(), Some(2));
/// ```
#[must_use]
pub fn parse_lines(source: &str) -> Vec<(usize, Result<ParseTree, ParseError>)> {
    source.lines()
          .enumerate()
          .filter(|(_, line)| !line.chars().all(interpreter::lexer::is_space))
          .map(|(index, line)| (index + 1, parse(line)))
          .collect()
}

/// Evaluates every non-blank line of `source` as an independent expression.
///
/// Lines are selected and numbered as in [`parse_lines`].
///
/// # Examples
/// ```
/// use bigarith::evaluate_lines;
/// use num_bigint::BigInt;
///
/// let results = evaluate_lines("1 + 1\n\n2 *\n3 * 3");
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].0, 1);
/// assert_eq!(results[0].1.as_ref().unwrap(), &BigInt::from(2));
/// assert_eq!(results[1].0, 3);
/// assert!(results[1].1.is_err());
/// assert_eq!(results[2].1.as_ref().unwrap(), &BigInt::from(9));
/// ```
#[must_use]
pub fn evaluate_lines(source: &str) -> Vec<(usize, Result<BigInt, ParseError>)> {
    parse_lines(source).into_iter()
                       .map(|(line, result)| (line, result.map(ParseTree::into_value)))
                       .collect()
}
