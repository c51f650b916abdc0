use std::{fmt, mem};

use num_bigint::BigInt;

use crate::interpreter::lexer::Token;

/// The grammar symbol a [`ParseNode`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// The top-level expression returned to the caller.
    Root,
    /// `EXPRESSION -> TERM EXPRSUFFIX`
    Expression,
    /// `EXPRSUFFIX -> (+|-) TERM EXPRSUFFIX | ε`
    ExpressionSuffix,
    /// `TERM -> FACTOR TERMSUFFIX`
    Term,
    /// `TERMSUFFIX -> * FACTOR TERMSUFFIX | ε`
    TermSuffix,
    /// `FACTOR -> NUMBER | - NUMBER | ( EXPRESSION )`
    Factor,
    /// A number literal.
    Number,
}

impl Symbol {
    /// The name shown for this symbol in a rendered tree.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Root => "root expression",
            Self::Expression => "expression",
            Self::ExpressionSuffix => "expressionSuffix",
            Self::Term => "term",
            Self::TermSuffix => "termSuffix",
            Self::Factor => "factor",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the parse tree.
///
/// Every node records the grammar symbol it was built for, the token that
/// started it (absent for suffixes that took the empty production), the value
/// synthesized for its subtree and its children in production order. A
/// parent exclusively owns its children.
///
/// Dropping, counting, measuring and rendering walk the subtree with an
/// explicit worklist, so a tree may be arbitrarily deep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    symbol:      Symbol,
    first_token: Option<(Token, usize)>,
    value:       BigInt,
    children:    Vec<Self>,
}

impl ParseNode {
    /// Creates a childless node.
    #[must_use]
    pub const fn new(symbol: Symbol, first_token: Option<(Token, usize)>, value: BigInt) -> Self {
        Self { symbol,
               first_token,
               value,
               children: Vec::new() }
    }

    /// Creates a node with the given children, in production order.
    #[must_use]
    pub const fn with_children(symbol: Symbol,
                               first_token: Option<(Token, usize)>,
                               value: BigInt,
                               children: Vec<Self>)
                               -> Self {
        Self { symbol,
               first_token,
               value,
               children }
    }

    /// The grammar symbol this node was built for.
    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The value synthesized for this subtree.
    #[must_use]
    pub const fn value(&self) -> &BigInt {
        &self.value
    }

    /// The children of this node, in production order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// The token this node started at, with its position.
    #[must_use]
    pub const fn first_token(&self) -> Option<&(Token, usize)> {
        self.first_token.as_ref()
    }

    /// Code point offset of the token this node started at.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.first_token.as_ref().map(|(_, position)| *position)
    }

    /// Converts the node into its synthesized value.
    #[must_use]
    pub fn into_value(mut self) -> BigInt {
        mem::take(&mut self.value)
    }

    /// Number of nodes in this subtree, this node included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    /// Length of the longest path from this node to a leaf, counted in
    /// nodes.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    fn render_line(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        let indent = ".".repeat(level * 3);
        write!(f, "{indent}^{}(", self.symbol)?;
        if let Some((token, position)) = &self.first_token {
            write!(f, "{{{position}}}{token}")?;
        }
        writeln!(f, ")[{}]", self.value)
    }
}

impl Drop for ParseNode {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Renders the subtree one node per line, children indented three dots
/// deeper than their parent.
///
/// # Example
/// ```
/// use bigarith::parse;
///
/// let tree = parse("-7").unwrap();
/// let rendered = tree.to_string();
/// let mut lines = rendered.lines();
/// assert_eq!(lines.next(), Some("^root expression({0}MINUS)[-7]"));
/// assert_eq!(lines.next(), Some("...^term({0}MINUS)[-7]"));
/// assert_eq!(lines.next(), Some("......^factor({0}MINUS)[-7]"));
/// assert_eq!(lines.next(), Some(".........^number({1}NUMBER(7))[7]"));
/// assert_eq!(lines.next(), Some("......^termSuffix()[1]"));
/// assert_eq!(lines.next(), Some("...^expressionSuffix()[0]"));
/// assert_eq!(lines.next(), None);
/// ```
impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![(self, 0)];
        while let Some((node, level)) = pending.pop() {
            node.render_line(f, level)?;
            pending.extend(node.children.iter().rev().map(|child| (child, level + 1)));
        }
        Ok(())
    }
}

/// The outcome of a successful parse: the root expression node whose value
/// is the result of the whole input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    root: ParseNode,
}

impl ParseTree {
    /// Wraps a finished root node.
    #[must_use]
    pub const fn new(root: ParseNode) -> Self {
        Self { root }
    }

    /// The root expression node.
    #[must_use]
    pub const fn root(&self) -> &ParseNode {
        &self.root
    }

    /// The exact value of the parsed expression.
    #[must_use]
    pub const fn value(&self) -> &BigInt {
        self.root.value()
    }

    /// Converts the tree into the value of the whole expression.
    #[must_use]
    pub fn into_value(self) -> BigInt {
        self.root.into_value()
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: i64, position: usize) -> ParseNode {
        ParseNode::new(Symbol::Number,
                       Some((Token::Number(BigInt::from(value)), position)),
                       BigInt::from(value))
    }

    #[test]
    fn counts_and_depth_cover_the_subtree() {
        let factor = ParseNode::with_children(Symbol::Factor,
                                              Some((Token::Number(BigInt::from(3)), 0)),
                                              BigInt::from(3),
                                              vec![number(3, 0)]);
        let suffix = ParseNode::new(Symbol::TermSuffix, None, BigInt::from(1));
        let term = ParseNode::with_children(Symbol::Term,
                                            Some((Token::Number(BigInt::from(3)), 0)),
                                            BigInt::from(3),
                                            vec![factor, suffix]);
        assert_eq!(term.node_count(), 4);
        assert_eq!(term.depth(), 3);
        assert_eq!(term.children()[1].position(), None);
        assert_eq!(term.position(), Some(0));
    }

    #[test]
    fn epsilon_nodes_render_without_a_token() {
        let suffix = ParseNode::new(Symbol::ExpressionSuffix, None, BigInt::from(0));
        assert_eq!(suffix.to_string(), "^expressionSuffix()[0]\n");
    }

    #[test]
    fn values_render_in_full() {
        let big: BigInt = "-55555555555555555555".parse().unwrap();
        let node = ParseNode::new(Symbol::Term, None, big);
        assert_eq!(node.to_string(), "^term()[-55555555555555555555]\n");
    }

    #[test]
    fn children_are_indented_under_their_parent() {
        let root = ParseNode::with_children(Symbol::Factor,
                                            Some((Token::LParen, 4)),
                                            BigInt::from(12),
                                            vec![number(12, 5)]);
        assert_eq!(root.to_string(),
                   "^factor({4}LPAREN)[12]\n...^number({5}NUMBER(12))[12]\n");
    }

    #[test]
    fn tree_exposes_the_root_value() {
        let tree = ParseTree::new(number(8, 0));
        assert_eq!(tree.value(), &BigInt::from(8));
        assert_eq!(tree.root().symbol(), Symbol::Number);
        assert_eq!(tree.into_value(), BigInt::from(8));
    }

    fn factor_chain(levels: usize) -> ParseNode {
        (0..levels).fold(number(1, levels), |inner, level| {
                       ParseNode::with_children(Symbol::Factor,
                                                Some((Token::LParen, levels - 1 - level)),
                                                BigInt::from(1),
                                                vec![inner])
                   })
    }

    #[test]
    fn deep_chains_are_walked_without_recursion() {
        let chain = factor_chain(200_000);
        assert_eq!(chain.node_count(), 200_001);
        assert_eq!(chain.depth(), 200_001);
        assert_eq!(chain.position(), Some(0));
        drop(chain);
    }

    #[test]
    fn rendering_visits_children_in_order() {
        let root = ParseNode::with_children(Symbol::Term,
                                            Some((Token::Number(BigInt::from(2)), 0)),
                                            BigInt::from(6),
                                            vec![number(2, 0),
                                                 ParseNode::with_children(Symbol::TermSuffix,
                                                                          Some((Token::Times, 1)),
                                                                          BigInt::from(3),
                                                                          vec![number(3, 2)])]);
        assert_eq!(root.to_string(),
                   "^term({0}NUMBER(2))[6]\n\
                    ...^number({0}NUMBER(2))[2]\n\
                    ...^termSuffix({1}TIMES)[3]\n\
                    ......^number({2}NUMBER(3))[3]\n");
    }
}
