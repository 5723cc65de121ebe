//! One-shot reveal animations for cards and sections
//!
//! Elements start hidden (transparent and shifted down). The first time one
//! becomes visible it is revealed and dropped from the watch list, so a
//! second visibility notification never animates it again.

use std::collections::HashSet;
use std::hash::Hash;
use std::time::Duration;

/// Selector for the cards revealed with a stagger
pub const CARD_SELECTOR: &str = ".feature-card, .program-card, .testimonial-card";
/// Selector for whole page sections
pub const SECTION_SELECTOR: &str = "section";
/// Selector for the stats block holding the counters
pub const STATS_SELECTOR: &str = ".stats-section";
/// Selector for counters inside the stats block
pub const COUNTER_SELECTOR: &str = ".stat-number";
/// Selector for lazily loaded images
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Style a revealed element settles on
pub const REVEALED_OPACITY: &str = "1";
pub const REVEALED_TRANSFORM: &str = "translateY(0)";

/// Initial hidden style of a watched element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
    pub transition: &'static str,
}

pub const CARD_REVEAL: RevealStyle = RevealStyle {
    opacity: "0",
    transform: "translateY(30px)",
    transition: "all 0.6s ease",
};

pub const SECTION_REVEAL: RevealStyle = RevealStyle {
    opacity: "0",
    transform: "translateY(20px)",
    transition: "all 0.8s ease",
};

/// Delay before revealing the `index`-th card of a visibility batch
pub fn stagger_delay(index: usize, step_ms: u32) -> Duration {
    Duration::from_millis(index as u64 * u64::from(step_ms))
}

/// Watch list that fires at most once per element
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    watching: HashSet<K>,
}

impl<K: Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            watching: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watch(&mut self, key: K) {
        self.watching.insert(key);
    }

    pub fn is_empty(&self) -> bool {
        self.watching.is_empty()
    }

    /// Handle a visibility change. Returns `true` when the element should be
    /// revealed now; the element is no longer watched afterwards.
    pub fn on_visibility(&mut self, key: &K, is_intersecting: bool) -> bool {
        is_intersecting && self.watching.remove(key)
    }
}
