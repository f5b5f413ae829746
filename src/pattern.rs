use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use crate::matcher::matches;
use crate::tree::Tree;

/// One element of a flat pattern.
///
/// A `Leaf` must equal the next leaf of the walk exactly; a `Subtree` is
/// the wildcard, spanning one whole subtree (one or more leaves). The
/// wildcard is its own variant rather than a reserved label, so it can
/// never collide with a real token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<T> {
    Leaf(T),
    Subtree,
}

impl<T> From<T> for Token<T> {
    fn from(token: T) -> Self {
        Token::Leaf(token)
    }
}

impl<T> Display for Token<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Token::Leaf(token) => write!(f, "{}", token),
            Token::Subtree => write!(f, "$_"),
        }
    }
}

/// An owned, immutable sequence of pattern tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern<T> {
    tokens: Vec<Token<T>>,
}

impl<T> Pattern<T> {
    pub fn tokens(&self) -> &[Token<T>] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Does the pattern cover the tree's entire pre-order leaf sequence?
    pub fn is_match(&self, tree: &Tree<T>) -> bool
    where
        T: PartialEq,
    {
        matches(&self.tokens, Some(tree.cursor()))
    }
}

impl<T> FromIterator<Token<T>> for Pattern<T> {
    fn from_iter<I: IntoIterator<Item = Token<T>>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<Token<T>>> for Pattern<T> {
    fn from(tokens: Vec<Token<T>>) -> Self {
        Self { tokens }
    }
}

impl<T> Display for Pattern<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
