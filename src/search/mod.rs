//! Edit-distance-guided trie traversal.
//!
//! The traversal walks trie nodes in parallel with an NFA active-state set
//! and schedules work with one LIFO stack per distance value. The automaton's
//! minimum distance never decreases along a transition chain, so while stack
//! `i` is being drained, new frames only land on stacks `i` or higher; lower
//! stacks are never revisited. Matches therefore surface in non-decreasing
//! order of minimum distance and a caller's result limit cuts the walk short
//! at the first opportunity.

use crate::automaton::{Automaton, State};
use crate::trie::{Entry, Node};

/// What to emit when the traversal reaches a node whose active-state set is
/// accepting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SuffixPolicy {
    /// Emit the accepted node's own entry, if any, and keep exploring.
    Exact,
    /// Emit every entry in the accepted node's subtree, then abandon that
    /// branch.
    Expand,
}

/// A unit of pending work: a trie node plus the NFA state that reached it.
struct Frame<'a> {
    node: &'a Node,
    state: State,
}

/// Collects up to `limit` entries reachable from `start` whose paths the
/// automaton for `(query, max_distance)` accepts.
pub(crate) fn traverse(
    start: &Node,
    query: Vec<char>,
    max_distance: u8,
    limit: usize,
    policy: SuffixPolicy,
) -> Vec<Entry> {
    if limit == 0 {
        return Vec::new();
    }
    let mut nfa = Automaton::new(query, max_distance);
    let mut stacks: Vec<Vec<Frame<'_>>> = (0..=max_distance).map(|_| Vec::new()).collect();
    stacks[0].push(Frame {
        node: start,
        state: nfa.start(),
    });

    let mut results = Vec::new();
    for stratum in 0..stacks.len() {
        while let Some(frame) = stacks[stratum].pop() {
            if nfa.is_accepting(&frame.state) {
                let halt = match policy {
                    SuffixPolicy::Exact => emit_node(frame.node, &mut results),
                    SuffixPolicy::Expand => emit_subtree(frame.node, limit, &mut results),
                };
                if results.len() >= limit {
                    results.truncate(limit);
                    return results;
                }
                if halt {
                    continue;
                }
            }
            for (label, child) in frame.node.edges() {
                let (state, min) = nfa.transition(&frame.state, label);
                if min <= max_distance {
                    stacks[min as usize].push(Frame { node: child, state });
                }
            }
        }
    }
    results
}

fn emit_node(node: &Node, results: &mut Vec<Entry>) -> bool {
    if let Some(entry) = node.entry() {
        results.push(entry.clone());
    }
    false
}

fn emit_subtree(node: &Node, limit: usize, results: &mut Vec<Entry>) -> bool {
    let mut pending = vec![node];
    while let Some(node) = pending.pop() {
        if let Some(entry) = node.entry() {
            results.push(entry.clone());
            if results.len() >= limit {
                break;
            }
        }
        pending.extend(node.edges().map(|(_, child)| child));
    }
    true
}
