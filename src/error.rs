/// Parsing errors.
///
/// Defines every error the parser can report: premature end of input, tokens
/// that cannot start or continue the construct being parsed, unclosed
/// parentheses and tokens left over after a complete expression. Each error
/// that involves a token carries that token's code point offset in the
/// original text.
pub mod parse_error;

pub use parse_error::{Expectation, ParseError};
