use std::fmt;

use logos::Logos;
use num_bigint::BigInt;
use num_traits::Zero;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Lexing is total: any character that is neither a digit, whitespace nor one
/// of the operator characters becomes an [`Token::Unknown`] carrying that
/// character, and the parser decides what to do with it.
///
/// Whitespace is ASCII space, tab, newline, vertical tab, form feed and
/// carriage return, NEL, NBSP, the ogham space mark, `U+2000`..=`U+200A`, the
/// line and paragraph separators, the narrow and medium mathematical spaces,
/// and the ideographic space. It separates tokens but produces none.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\n\x0B\x0C\r\u{85}\u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}]+")]
pub enum Token {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Times,
    /// `^`, recognized but never accepted by the grammar.
    #[token("^")]
    Power,
    /// Integer literal tokens of any length, such as `42` or
    /// `987654321098765432109876543210`.
    #[regex(r"[0-9]+", accumulate_digits)]
    Number(BigInt),
    /// Any other single character.
    #[regex(r"[^0-9()+\-*^ \t\n\x0B\x0C\r\u{85}\u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}]",
            |lex| lex.slice().chars().next())]
    Unknown(char),
}

/// The category of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    Plus,
    Minus,
    Times,
    Power,
    Number,
    Unknown,
}

impl TokenKind {
    /// The upper-case name used when rendering tokens in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Times => "TIMES",
            Self::Power => "POWER",
            Self::Number => "NUMBER",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Token {
    /// Returns the category of this token.
    ///
    /// # Example
    /// ```
    /// use bigarith::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Times.kind(), TokenKind::Times);
    /// assert_eq!(Token::Unknown('a').kind(), TokenKind::Unknown);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Times => TokenKind::Times,
            Self::Power => TokenKind::Power,
            Self::Number(_) => TokenKind::Number,
            Self::Unknown(_) => TokenKind::Unknown,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}({value})", self.kind()),
            Self::Unknown(raw) => write!(f, "{}({raw})", self.kind()),
            other => write!(f, "{}", other.kind()),
        }
    }
}

/// Builds the value of a digit run as `acc * 10 + digit`, with no bound on
/// the number of digits.
fn accumulate_digits(lex: &logos::Lexer<Token>) -> BigInt {
    lex.slice()
       .bytes()
       .fold(BigInt::zero(), |acc, digit| acc * 10u32 + u32::from(digit - b'0'))
}

/// Reports whether `c` belongs to the whitespace set the lexer skips.
///
/// The set is ASCII space, tab, newline, vertical tab, form feed and carriage
/// return, plus NEL (`U+0085`), NBSP (`U+00A0`), the ogham space mark, the
/// en quad through hair space range (`U+2000`..=`U+200A`), the line and
/// paragraph separators, the narrow and medium mathematical spaces, and the
/// ideographic space.
///
/// # Example
/// ```
/// use bigarith::interpreter::lexer::is_space;
///
/// assert!(is_space(' '));
/// assert!(is_space('\u{3000}'));
/// assert!(!is_space('\u{200B}'));
/// ```
#[must_use]
pub const fn is_space(c: char) -> bool {
    matches!(c,
             ' ' | '\t'
             | '\n'
             | '\u{0B}'
             | '\u{0C}'
             | '\r'
             | '\u{85}'
             | '\u{A0}'
             | '\u{1680}'
             | '\u{2000}'..='\u{200A}'
             | '\u{2028}'
             | '\u{2029}'
             | '\u{202F}'
             | '\u{205F}'
             | '\u{3000}')
}

/// Splits `source` into tokens paired with their positions.
///
/// Positions are zero-based offsets counted in Unicode code points, not
/// bytes, so a caller can point at the offending character of the original
/// text. The whole input is tokenized before returning.
///
/// # Example
/// ```
/// use bigarith::interpreter::lexer::{Token, scan};
///
/// let tokens = scan("é 12+x");
/// assert_eq!(tokens[0], (Token::Unknown('é'), 0));
/// assert_eq!(tokens[1], (Token::Number(12.into()), 2));
/// assert_eq!(tokens[2], (Token::Plus, 4));
/// assert_eq!(tokens[3], (Token::Unknown('x'), 5));
/// ```
#[must_use]
pub fn scan(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    // Byte offset and code point offset of the last converted span start.
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        char_cursor += source[byte_cursor..span.start].chars().count();
        byte_cursor = span.start;

        match result {
            Ok(token) => {
                log::trace!("scanned {token} at position {char_cursor}");
                tokens.push((token, char_cursor));
            },
            Err(()) => {
                for (offset, raw) in lexer.slice().chars().enumerate() {
                    log::trace!("scanned unclassified {raw:?} at position {}",
                                char_cursor + offset);
                    tokens.push((Token::Unknown(raw), char_cursor + offset));
                }
            },
        }
    }

    log::trace!("scanned {} tokens", tokens.len());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).iter().map(|(token, _)| token.kind()).collect()
    }

    #[test]
    fn operators_map_to_their_kinds() {
        assert_eq!(kinds("()+-*^"),
                   vec![TokenKind::LParen,
                        TokenKind::RParen,
                        TokenKind::Plus,
                        TokenKind::Minus,
                        TokenKind::Times,
                        TokenKind::Power]);
    }

    #[test]
    fn digit_runs_become_one_number() {
        let tokens = scan("123");
        assert_eq!(tokens, vec![(Token::Number(BigInt::from(123)), 0)]);
    }

    #[test]
    fn long_literals_are_exact() {
        let literal = "987654321098765432109876543210";
        let tokens = scan(literal);
        let expected: BigInt = literal.parse().unwrap();
        assert_eq!(tokens, vec![(Token::Number(expected), 0)]);
    }

    #[test]
    fn whitespace_splits_numbers() {
        let tokens = scan("12 34");
        assert_eq!(tokens,
                   vec![(Token::Number(BigInt::from(12)), 0), (Token::Number(BigInt::from(34)), 3)]);
    }

    #[test]
    fn operators_split_numbers() {
        let tokens = scan("12*34");
        assert_eq!(tokens,
                   vec![(Token::Number(BigInt::from(12)), 0),
                        (Token::Times, 2),
                        (Token::Number(BigInt::from(34)), 3)]);
    }

    #[test]
    fn number_position_is_its_first_digit() {
        let tokens = scan("   (4096)");
        assert_eq!(tokens[1], (Token::Number(BigInt::from(4096)), 4));
        assert_eq!(tokens[2], (Token::RParen, 8));
    }

    #[test]
    fn unicode_whitespace_is_skipped() {
        let source = "1\u{85}+\u{A0}2\u{1680}*\u{2003}3\u{2028}-\u{202F}4\u{205F}+\u{3000}5\u{0B}\u{0C}";
        assert_eq!(kinds(source),
                   vec![TokenKind::Number,
                        TokenKind::Plus,
                        TokenKind::Number,
                        TokenKind::Times,
                        TokenKind::Number,
                        TokenKind::Minus,
                        TokenKind::Number,
                        TokenKind::Plus,
                        TokenKind::Number]);
    }

    #[test]
    fn positions_count_code_points_not_bytes() {
        let tokens = scan("\u{3000}\u{3000}7 ü+");
        assert_eq!(tokens,
                   vec![(Token::Number(BigInt::from(7)), 2),
                        (Token::Unknown('ü'), 4),
                        (Token::Plus, 5)]);
    }

    #[test]
    fn unclassified_characters_are_kept_one_at_a_time() {
        let tokens = scan("ab");
        assert_eq!(tokens, vec![(Token::Unknown('a'), 0), (Token::Unknown('b'), 1)]);
    }

    #[test]
    fn non_ascii_digits_are_not_numbers() {
        assert_eq!(kinds("١"), vec![TokenKind::Unknown]);
    }

    #[test]
    fn zero_width_space_is_not_whitespace() {
        assert_eq!(kinds("1\u{200B}2"),
                   vec![TokenKind::Number, TokenKind::Unknown, TokenKind::Number]);
    }

    #[test]
    fn empty_and_blank_inputs_have_no_tokens() {
        assert!(scan("").is_empty());
        assert!(scan(" \t\r\n").is_empty());
    }

    #[test]
    fn is_space_agrees_with_the_lexer() {
        for c in ['\t', '\n', '\u{0B}', '\u{0C}', '\r', ' ', '\u{85}', '\u{A0}', '\u{1680}',
                  '\u{2000}', '\u{200A}', '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}',
                  '\u{3000}']
        {
            assert!(is_space(c), "{c:?}");
            assert!(scan(&c.to_string()).is_empty(), "{c:?}");
        }
        for c in ['a', '\u{200B}', '\u{1F600}', '_'] {
            assert!(!is_space(c), "{c:?}");
        }
    }

    #[test]
    fn tokens_render_with_payloads() {
        assert_eq!(Token::Number(BigInt::from(-5)).to_string(), "NUMBER(-5)");
        assert_eq!(Token::Unknown('a').to_string(), "UNKNOWN(a)");
        assert_eq!(Token::RParen.to_string(), "RPAREN");
        assert_eq!(Token::Power.to_string(), "POWER");
    }
}
