//! # levtrie
//!
//! A string-to-string map over a Unicode trie that answers approximate-match
//! queries bounded by Levenshtein edit distance.
//!
//! Lookups walk the trie in parallel with a lazily simulated non-deterministic
//! Levenshtein automaton, in the spirit of:
//!
//! > Schulz, Klaus U., and Stoyan Mihov. "Fast string correction with
//! > Levenshtein automata." International Journal on Document Analysis and
//! > Recognition 5.1 (2002): 67-85.
//!
//! The automaton's active-state set is kept as a sliding window of per-diagonal
//! error minima, so each trie edge costs O(d) to process, and the traversal is
//! scheduled by minimum distance so that near matches surface first. That makes
//! `suggest` with a small result limit cheap even on large dictionaries.
//!
//! ## Example
//!
//! ```rust
//! use levtrie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("banana", "fruit");
//! trie.insert("bandana", "cloth");
//! trie.insert("cabana", "hut");
//!
//! // "bandana" is one insertion away from "banana"; "cabana" is two edits away.
//! let close = trie.suggest("banana", 1, 10);
//! assert_eq!(close.len(), 2);
//! let closer = trie.suggest("banana", 0, 10);
//! assert_eq!(closer[0].value, "fruit");
//! ```
//!
//! Distances are measured in Unicode scalar values, not bytes, so non-Latin
//! keys behave the way users expect.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod distance;
mod search;
pub mod trie;

pub use automaton::MAX_DISTANCE;
pub use trie::{Entry, Trie};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::levenshtein;
    pub use crate::trie::{Entry, Trie};
}
