//! Core traits for search problems: states, actions, and heuristics.

use std::fmt;

use sha2::{Digest, Sha256};

use super::node::{NodeArena, NodeId};

/// A deterministic digest of a state's canonical serialization.
///
/// Two states are equal iff their content hashes are equal; frontiers and
/// reached sets use the hash as the sole state identity. Implementations of
/// [`SearchState`] must serialize inner mappings in sorted key order so that
/// the digest is independent of insertion order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Hex rendering of the digest.
    pub fn hex_digest(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self.hex_digest())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_digest())
    }
}

/// Incremental SHA-256 hasher with unambiguous field framing.
///
/// Strings are written length-prefixed so adjacent fields cannot collide
/// (`"ab" + "c"` vs `"a" + "bc"`).
pub struct ContentHasher(Sha256);

impl ContentHasher {
    pub fn new() -> Self {
        Self(Sha256::new())
    }

    pub fn write_str(&mut self, s: &str) {
        self.0.update((s.len() as u64).to_le_bytes());
        self.0.update(s.as_bytes());
    }

    pub fn write_i64(&mut self, v: i64) {
        self.0.update(v.to_le_bytes());
    }

    pub fn finish(self) -> ContentHash {
        ContentHash(self.0.finalize().into())
    }
}

impl Default for ContentHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// A content-identifiable world snapshot.
pub trait SearchState: Clone {
    /// Deterministic digest of this state.
    ///
    /// Must iterate inner mappings in sorted key order.
    fn content_hash(&self) -> ContentHash;
}

/// A precondition/effect pair with a cost, the unit of state-space movement.
///
/// The capability set is closed at compile time: every action knows how to
/// test its preconditions, produce a successor, report which entities it
/// touches, and render itself for a given viewpoint entity.
pub trait Action<S>: Clone {
    /// Whether every precondition holds in `state`.
    fn preconditions_hold(&self, state: &S) -> bool;

    /// Successor state, or `None` when the action is inapplicable.
    ///
    /// Inapplicable covers failed preconditions and malformed lookups
    /// (an entity or resource the state does not carry).
    fn apply(&self, state: &S) -> Option<S>;

    /// Non-negative step cost.
    fn cost(&self) -> f64;

    /// Names of the entities whose acceptance this action requires.
    fn impacted_entities(&self) -> Vec<String>;

    /// Human-readable rendering, with `viewpoint` substituted as `self`.
    fn describe(&self, viewpoint: &str) -> String;
}

/// Scores a search node; drives the informed strategies.
///
/// Evaluation receives the whole arena so that schedule-level heuristics can
/// walk the node's ancestor chain.
pub trait Heuristic<S, A> {
    fn evaluate(&self, arena: &NodeArena<S, A>, node: NodeId) -> f64;
}

impl<S, A, F> Heuristic<S, A> for F
where
    F: Fn(&NodeArena<S, A>, NodeId) -> f64,
{
    fn evaluate(&self, arena: &NodeArena<S, A>, node: NodeId) -> f64 {
        self(arena, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hasher_is_deterministic() {
        let mut a = ContentHasher::new();
        a.write_str("Carpania");
        a.write_i64(100);
        let mut b = ContentHasher::new();
        b.write_str("Carpania");
        b.write_i64(100);
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn test_hasher_field_framing() {
        let mut a = ContentHasher::new();
        a.write_str("ab");
        a.write_str("c");
        let mut b = ContentHasher::new();
        b.write_str("a");
        b.write_str("bc");
        assert_ne!(a.finish(), b.finish());
    }

    #[test]
    fn test_hex_digest_roundtrips_display() {
        let mut h = ContentHasher::new();
        h.write_str("x");
        let hash = h.finish();
        assert_eq!(hash.hex_digest(), format!("{hash}"));
        assert_eq!(hash.hex_digest().len(), 64);
    }
}
