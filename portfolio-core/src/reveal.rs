//! One-shot entrance reveals and the skill-bar replay.

use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SKILL_BAR_THRESHOLD};
use std::collections::BTreeSet;

/// Options handed to the browser's intersection observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl ObserverOptions {
    #[must_use]
    pub const fn reveal() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
        }
    }

    #[must_use]
    pub const fn skill_bars() -> Self {
        Self {
            threshold: SKILL_BAR_THRESHOLD,
            root_margin: "0px",
        }
    }
}

/// Remembers which observed elements have already been revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: BTreeSet<usize>,
}

impl RevealTracker {
    /// Record a reveal. Only the first call for an index returns `true`.
    pub fn reveal(&mut self, index: usize) -> bool {
        self.revealed.insert(index)
    }
}

/// Width replay for a skill bar entering the viewport: collapse to `0%`, then
/// restore the captured width after a short delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBarReplay {
    pub target_width: String,
}

impl SkillBarReplay {
    pub const COLLAPSED: &'static str = "0%";

    /// Capture the bar's inline width. An empty width restores to the
    /// stylesheet width; a bar already at `0%` is mid-replay and skipped.
    #[must_use]
    pub fn capture(inline_width: &str) -> Option<Self> {
        let width = inline_width.trim();
        (width != Self::COLLAPSED).then(|| Self {
            target_width: width.to_string(),
        })
    }
}
