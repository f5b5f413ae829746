//! The backtracking matcher: consumes a [`Cursor`] against a flat pattern.
//!
//! A literal token consumes exactly the next leaf of the walk; if the leaf
//! differs, the current alignment fails on the spot. A wildcard consumes one
//! whole subtree, trying the coarsest candidate first (the entire subtree
//! under the cursor) and narrowing to its first child on failure, down to a
//! single leaf. Pattern and walk must run out at the same time.

use tracing::trace;

use crate::cursor::Cursor;
use crate::pattern::Token;

/// Match `pattern` against the rest of the walk at `cursor`.
///
/// `None` is the exhausted walk, so `matches(&[], None)` holds and a
/// wildcard against `None` does not (a wildcard needs at least one leaf).
///
/// The search runs as an explicit machine: a position in the pattern, the
/// current cursor, and a stack of wildcard choice points. Narrowing a
/// wildcard therefore never recurses, and call depth stays flat no matter
/// how deep the tree is.
pub fn matches<T: PartialEq>(pattern: &[Token<T>], cursor: Option<Cursor<'_, T>>) -> bool {
    // one choice point per wildcard currently in play: the wildcard's
    // pattern position and the candidate subtree it is consuming
    let mut pending: Vec<(usize, Cursor<T>)> = Vec::new();
    let mut pc = 0;
    let mut cur = cursor;

    loop {
        // run the pattern forward until it is spent or a step dead-ends
        loop {
            match pattern.get(pc) {
                None => {
                    if cur.is_none() {
                        return true;
                    }
                    // leaves left over: the walk must end with the pattern
                    break;
                }
                Some(token) => {
                    let Some(here) = cur.take() else {
                        break;
                    };
                    match token {
                        Token::Leaf(want) => {
                            let leaf = here.first_leaf();
                            if leaf.token() != want {
                                break;
                            }
                            cur = leaf.next_subtree();
                        }
                        Token::Subtree => {
                            trace!(at = pc, "wildcard consumes whole subtree");
                            pending.push((pc, here.clone()));
                            cur = here.next_subtree();
                        }
                    }
                    pc += 1;
                }
            }
        }

        // dead end: narrow the most recent wildcard, or give up
        loop {
            let Some((wild, candidate)) = pending.pop() else {
                return false;
            };
            if let Some(narrowed) = candidate.first_child() {
                trace!(at = wild, "wildcard narrows to first child");
                pending.push((wild, narrowed.clone()));
                cur = narrowed.next_subtree();
                pc = wild + 1;
                break;
            }
            trace!(at = wild, "wildcard exhausted at a leaf");
        }
    }
}
