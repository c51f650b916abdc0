use std::fmt;

use thiserror::Error;

/// The construct the parser was looking for when it failed.
///
/// The same expectation is phrased differently depending on whether the input
/// ran out or a wrong token turned up: the end-of-input wording names the
/// construct, the wrong-token wording also lists what may start it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// A number literal, possibly after a unary minus.
    Number,
    /// A factor: a number, a negated number or a parenthesized expression.
    Factor,
    /// The `)` closing a parenthesized expression.
    RightParen,
    /// A whole expression, at the top level or after `(`.
    Expression,
    /// A term following `+` or `-`.
    Term,
}

impl Expectation {
    /// Wording used when the input ends where this construct was required.
    #[must_use]
    pub const fn at_end(self) -> &'static str {
        match self {
            Self::Number => "a number",
            Self::Factor => "something to multiply",
            Self::RightParen => "a right parenthesis",
            Self::Expression => "an expression",
            Self::Term => "a term",
        }
    }

    /// Wording used when a token that cannot start this construct is found.
    #[must_use]
    pub const fn instead_of_token(self) -> &'static str {
        match self {
            Self::Number => "a number here",
            Self::Factor => "something to multiply: a number or '('",
            Self::RightParen => "a closing paren ')'",
            Self::Expression => "a number or '('",
            Self::Term => "something to add or subtract: a number or '('",
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.at_end())
    }
}

/// Represents all errors that can occur while parsing an expression.
///
/// Tokens are stored in their rendered form (for example `MINUS` or
/// `UNKNOWN(a)`) together with their zero-based code point position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input ended where a token was still required.
    #[error("Unexpected end-of-input. Expecting {}.", .expecting.at_end())]
    UnexpectedEndOfInput {
        /// What the parser needed next.
        expecting: Expectation,
    },
    /// A token that cannot begin the construct being parsed.
    #[error("Unexpected token at position {position}: {token}. Expecting {}.",
            .expecting.instead_of_token())]
    UnexpectedToken {
        /// The token encountered.
        token:     String,
        /// Code point offset of the token.
        position:  usize,
        /// What the parser needed instead.
        expecting: Expectation,
    },
    /// A parenthesized expression was followed by something other than `)`.
    ///
    /// The term suffix rejects every token that cannot follow a term before
    /// the closing paren is checked, so well-formed token streams never
    /// produce this; it guards the grouping rule on its own.
    #[error("Expecting a closing paren ')' at position {position} and instead found {token}.")]
    ExpectedClosingParen {
        /// The token found where `)` belonged.
        token:    String,
        /// Code point offset of the token.
        position: usize,
    },
    /// A token that cannot continue the term that precedes it.
    #[error("Extraneous token at position {position}: {token}, while parsing the term that \
             begins with {term_token} at position {term_position}.")]
    ExtraneousTokenInTerm {
        /// The leftover token.
        token:         String,
        /// Code point offset of the leftover token.
        position:      usize,
        /// The first token of the enclosing term.
        term_token:    String,
        /// Code point offset of the enclosing term.
        term_position: usize,
    },
    /// A token remained after a complete top-level expression.
    #[error("Extraneous token at position {position}: {token}.")]
    ExtraneousToken {
        /// The leftover token.
        token:    String,
        /// Code point offset of the leftover token.
        position: usize,
    },
}

impl ParseError {
    /// Returns the code point offset the error points at, or `None` when the
    /// input ended prematurely.
    ///
    /// # Example
    /// ```
    /// use bigarith::evaluate;
    ///
    /// assert_eq!(evaluate("1 + )").unwrap_err().position(), Some(4));
    /// assert_eq!(evaluate("1 +").unwrap_err().position(), None);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEndOfInput { .. } => None,
            Self::UnexpectedToken { position, .. }
            | Self::ExpectedClosingParen { position, .. }
            | Self::ExtraneousTokenInTerm { position, .. }
            | Self::ExtraneousToken { position, .. } => Some(*position),
        }
    }

    /// Returns `true` when the error was caused by running out of input.
    #[must_use]
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self, Self::UnexpectedEndOfInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_input_messages_name_the_construct() {
        let cases = [(Expectation::Number, "Unexpected end-of-input. Expecting a number."),
                     (Expectation::Factor,
                      "Unexpected end-of-input. Expecting something to multiply."),
                     (Expectation::RightParen,
                      "Unexpected end-of-input. Expecting a right parenthesis."),
                     (Expectation::Expression, "Unexpected end-of-input. Expecting an expression."),
                     (Expectation::Term, "Unexpected end-of-input. Expecting a term.")];
        for (expecting, message) in cases {
            assert_eq!(ParseError::UnexpectedEndOfInput { expecting }.to_string(), message);
        }
    }

    #[test]
    fn unexpected_token_message_carries_position() {
        let err = ParseError::UnexpectedToken { token:     "MINUS".to_string(),
                                                position:  3,
                                                expecting: Expectation::Number, };
        assert_eq!(err.to_string(),
                   "Unexpected token at position 3: MINUS. Expecting a number here.");
        assert_eq!(err.position(), Some(3));
        assert!(!err.is_end_of_input());
    }

    #[test]
    fn extraneous_token_in_term_names_the_term() {
        let err = ParseError::ExtraneousTokenInTerm { token:         "NUMBER(2)".to_string(),
                                                      position:      2,
                                                      term_token:    "NUMBER(1)".to_string(),
                                                      term_position: 0, };
        assert_eq!(err.to_string(),
                   "Extraneous token at position 2: NUMBER(2), while parsing the term that \
                    begins with NUMBER(1) at position 0.");
    }

    #[test]
    fn closing_paren_message_names_the_found_token() {
        let err = ParseError::ExpectedClosingParen { token:    "TIMES".to_string(),
                                                     position: 6, };
        assert_eq!(err.to_string(),
                   "Expecting a closing paren ')' at position 6 and instead found TIMES.");
        assert_eq!(err.position(), Some(6));
        assert!(!err.is_end_of_input());
    }

    #[test]
    fn parse_error_is_send_sync_static() {
        fn assert_bounds<T: std::error::Error + Send + Sync + 'static>() {}
        assert_bounds::<ParseError>();
    }
}
