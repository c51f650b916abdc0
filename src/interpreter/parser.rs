/// Entry points and the top-level `EXPRESSION` production.
///
/// Drives a parse over a complete token sequence, checks that no token is
/// left over afterwards and defines the shared `ParseResult` alias.
pub mod core;

/// The left-recursion-free additive and multiplicative productions.
///
/// `EXPRSUFFIX`, `TERM` and `TERMSUFFIX` live here. The suffix productions are
/// right-recursive, and their values are folded from the innermost suffix
/// outward so that chains such as `a - b - c` still evaluate left to right.
pub mod binary;

/// The `FACTOR` and `NUMBER` productions.
///
/// Handles number literals, unary minus (which binds to a single number only)
/// and parenthesized sub-expressions.
pub mod unary;

/// Lookahead helpers shared by the productions.
pub mod utils;
