//! Scroll position rules for the header, nav highlighting, anchor jumps and
//! reveal-on-scroll. Nothing here touches the DOM.

use std::cell::Cell;
use std::collections::HashSet;
use std::hash::Hash;

use crate::config;

// Browsers report the ratio at a threshold crossing with float noise.
const RATIO_TOLERANCE: f64 = 1e-3;

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::SCROLLED_OFFSET
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Section whose span contains the look-ahead point below the header.
/// When spans overlap the later one wins.
pub fn active_section(sections: &[SectionSpan], scroll_y: f64, header_height: f64) -> Option<&str> {
    let probe = scroll_y + header_height + config::SECTION_LOOKAHEAD;
    sections
        .iter()
        .rev()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id.as_str())
}

/// Section to highlight next. Between sections, or past the last one, the
/// previous highlight stays.
pub fn next_active<'a>(
    previous: Option<&'a str>,
    sections: &'a [SectionSpan],
    scroll_y: f64,
    header_height: f64,
) -> Option<&'a str> {
    active_section(sections, scroll_y, header_height).or(previous)
}

/// In-page anchor id from an `href` such as `#faq`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Where to scroll so the target lands just below the header.
pub fn anchor_offset(target_top: f64, header_height: f64) -> f64 {
    (target_top - header_height - config::ANCHOR_MARGIN).max(0.0)
}

/// Coalesces bursts of scroll events into one handler run per frame.
#[derive(Debug, Default)]
pub struct FrameGuard {
    pending: Cell<bool>,
}

impl FrameGuard {
    /// Returns `true` if the caller should schedule a frame.
    pub fn claim(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Called from the frame callback once the work is done.
    pub fn release(&self) {
        self.pending.set(false);
    }
}

/// Remembers which elements already revealed so each reveals exactly once.
#[derive(Debug)]
pub struct RevealSet<K> {
    threshold: f64,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash> RevealSet<K> {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, revealed: HashSet::new() }
    }

    /// Records an intersection report. Returns `true` only the first time the
    /// element crosses the threshold.
    pub fn observe(&mut self, key: K, intersecting: bool, ratio: f64) -> bool {
        if !intersecting || ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sections() -> Vec<SectionSpan> {
        [("hero", 0.0, 700.0), ("how", 700.0, 900.0), ("faq", 1600.0, 600.0)]
            .into_iter()
            .map(|(id, top, height)| SectionSpan { id: id.into(), top, height })
            .collect()
    }

    #[test]
    fn header_state_flips_past_fifty_pixels() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(50.0));
        assert!(header_scrolled(50.5));
    }

    #[test]
    fn active_section_uses_header_and_lookahead() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0, 80.0), Some("hero"));
        // 519 + 80 + 100 = 699, still in the hero.
        assert_eq!(active_section(&sections, 519.0, 80.0), Some("hero"));
        assert_eq!(active_section(&sections, 520.0, 80.0), Some("how"));
        assert_eq!(active_section(&sections, 1500.0, 80.0), Some("faq"));
        assert_eq!(active_section(&sections, 5000.0, 80.0), None);
    }

    #[test]
    fn highlight_survives_gaps_and_page_end() {
        let sections = sections();
        assert_eq!(next_active(None, &sections, 1500.0, 80.0), Some("faq"));
        // Footer region below the last section.
        assert_eq!(next_active(Some("faq"), &sections, 5000.0, 80.0), Some("faq"));
        assert_eq!(next_active(None, &sections, 5000.0, 80.0), None);
        // A matching section always replaces the previous one.
        assert_eq!(next_active(Some("faq"), &sections, 0.0, 80.0), Some("hero"));
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_id("#contact"), Some("contact"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/pricing"), None);
        assert_eq!(anchor_offset(1600.0, 80.0), 1500.0);
        assert_eq!(anchor_offset(30.0, 80.0), 0.0);
    }

    #[test]
    fn frame_guard_coalesces_until_released() {
        let guard = FrameGuard::default();
        assert!(guard.claim());
        assert!(!guard.claim());
        assert!(!guard.claim());
        guard.release();
        assert!(guard.claim());
    }

    #[test]
    fn reveal_is_threshold_gated_and_one_shot() {
        let mut set = RevealSet::new(config::REVEAL_THRESHOLD);

        assert!(!set.observe(1, true, 0.10));
        assert!(!set.is_revealed(&1));

        assert!(set.observe(1, true, 0.15));
        // Leaving and re-entering never reveals again, and nothing un-reveals.
        assert!(!set.observe(1, false, 0.0));
        assert!(!set.observe(1, true, 0.9));
        assert!(set.is_revealed(&1));

        assert!(!set.is_revealed(&2));
    }
}
