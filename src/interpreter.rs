/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw text and produces the complete sequence of
/// tokens, each paired with the code point offset of its first character.
/// Lexing never fails: characters it does not recognize become `Unknown`
/// tokens and are rejected later by the parser.
///
/// # Responsibilities
/// - Classifies operators and parentheses, and accumulates digit runs into
///   arbitrary-precision integers.
/// - Skips ASCII and Unicode whitespace.
/// - Converts byte spans into code point positions.
pub mod lexer;
/// The parser module evaluates the token sequence while building a parse
/// tree.
///
/// The parser is a recursive-descent parser over a grammar with left
/// recursion eliminated, driven by a single token of lookahead with no
/// backtracking. Every production returns its node together with the value
/// synthesized for it, so evaluation needs no separate pass.
///
/// # Responsibilities
/// - Implements the `expression`, `term`, `factor` and suffix productions.
/// - Computes exact sums, differences, products and negations.
/// - Reports the first syntax error with the offending token's position.
pub mod parser;
