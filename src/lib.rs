//! Flat-pattern matching over the leaves of ordered, labeled trees.
//!
//! A pattern is a sequence of literal tokens and subtree wildcards. It
//! matches a tree when the tree's pre-order leaf sequence can be carved up
//! so that every literal equals its leaf and every wildcard covers one
//! whole subtree, with nothing left over on either side. Traversal state is
//! a [`Cursor`], a plain value holding the rest of the walk, so the matcher
//! can back up to earlier positions freely.
//!
//! ```
//! use stmatch::{matches, Token, Tree};
//!
//! let tree = Tree::new('r').with_children([
//!     Tree::new('a'),
//!     Tree::new('s').with_children([Tree::new('b'), Tree::new('c')]),
//! ]);
//!
//! // a, then some subtree, then c
//! let pattern = [Token::Leaf('a'), Token::Subtree, Token::Leaf('c')];
//! assert!(matches(&pattern, Some(tree.cursor())));
//!
//! // literals consume exactly one leaf each
//! assert!(!matches(&[Token::Leaf('a')], Some(tree.cursor())));
//! ```

pub mod cursor;
pub mod matcher;
pub mod pattern;
pub mod tree;

pub use cursor::{Cursor, Leaves};
pub use matcher::matches;
pub use pattern::{Pattern, Token};
pub use tree::Tree;
