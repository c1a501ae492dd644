// crates/messi-facts-skill/src/facts.rs
// ============================================================================
// Module: Fact Selection
// Description: Uniform random choice over the localized fact list.
// Purpose: Isolate randomness behind a seam tests can pin.
// Dependencies: rand
// ============================================================================

//! ## Overview
//! The fact handler asks a [`FactSelector`] for an index into the fact list.
//! Production uses the thread RNG; a configured seed switches to a
//! [`SeededSelector`] so runs are reproducible; tests can pin the choice with
//! [`FixedSelector`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Chooses an index into a non-empty list.
pub trait FactSelector: Send + Sync {
    /// Returns an index in `0..len`.
    ///
    /// # Invariants
    /// - Callers never pass `len == 0`.
    fn select(&self, len: usize) -> usize;
}

/// Picks one fact with `selector`, or `None` for an empty list.
#[must_use]
pub fn choose_fact<'a>(selector: &dyn FactSelector, facts: &'a [String]) -> Option<&'a str> {
    if facts.is_empty() {
        return None;
    }
    facts.get(selector.select(facts.len()) % facts.len()).map(String::as_str)
}

// ============================================================================
// SECTION: Selectors
// ============================================================================

/// Uniform selection from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSelector;

impl FactSelector for ThreadRngSelector {
    fn select(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform selection from a seeded RNG shared across requests.
#[derive(Debug)]
pub struct SeededSelector {
    /// Seeded generator.
    rng: Mutex<StdRng>,
}

impl SeededSelector {
    /// Creates a selector seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl FactSelector for SeededSelector {
    fn select(&self, len: usize) -> usize {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..len),
            Err(poisoned) => poisoned.into_inner().gen_range(0..len),
        }
    }
}

/// Always selects the same index (modulo the list length).
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub usize);

impl FactSelector for FixedSelector {
    fn select(&self, len: usize) -> usize {
        self.0 % len
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
