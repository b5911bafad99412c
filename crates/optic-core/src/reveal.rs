//! Viewport-triggered reveal latch

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// One-way latch: `Hidden` → `Revealed` on the first intersection, then
/// terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feeds one intersection notification. Returns `true` only for the
    /// notification that flipped the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (self.state, intersecting) {
            (RevealState::Hidden, true) => {
                self.state = RevealState::Revealed;
                debug!("reveal latch fired");
                true
            }
            _ => false,
        }
    }

    /// Reveals without an intersection, used when observation is
    /// unavailable.
    pub fn force(&mut self) -> bool {
        self.observe(true)
    }
}

/// Margin applied to every edge of the viewport before testing
/// intersection, in CSS pixels. Negative values shrink the viewport so the
/// trigger fires once the element is that far inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportMargin(pub i32);

impl ViewportMargin {
    pub const NONE: ViewportMargin = ViewportMargin(0);

    /// `rootMargin` value for an IntersectionObserver
    pub fn root_margin(&self) -> String {
        format!("{}px", self.0)
    }

    /// Whether the vertical span `[top, bottom)` (viewport-relative)
    /// overlaps the viewport of height `viewport_height` after applying the
    /// margin.
    pub fn intersects(&self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        let margin = f64::from(self.0);
        let lo = -margin;
        let hi = viewport_height + margin;
        if hi <= lo {
            return false;
        }
        top < hi && bottom > lo
    }
}

/// Observation settings of a revealable element. Observation always stops
/// after the first reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportOptions {
    pub margin: ViewportMargin,
}

impl ViewportOptions {
    pub const fn once(margin: i32) -> Self {
        Self {
            margin: ViewportMargin(margin),
        }
    }

    /// Collection header
    pub const SECTION_HEADER: ViewportOptions = ViewportOptions::once(-100);
    /// Showcase cards and philosophy lines
    pub const ITEM: ViewportOptions = ViewportOptions::once(-50);
    /// Supporting copy and the spacer word
    pub const PLAIN: ViewportOptions = ViewportOptions::once(0);
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self::PLAIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    /// Element of height 200 at `doc_top`, seen at scroll offset `scroll_y`.
    fn visible_at(options: ViewportOptions, doc_top: f64, scroll_y: f64) -> bool {
        let top = doc_top - scroll_y;
        options.margin.intersects(top, top + 200.0, VIEWPORT)
    }

    #[test]
    fn test_latch_starts_hidden() {
        let latch = RevealLatch::new();
        assert_eq!(latch.state(), RevealState::Hidden);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_latch_fires_once() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_latch_survives_scroll_out_and_back() {
        let options = ViewportOptions::ITEM;
        let mut latch = RevealLatch::new();
        // Scroll down past the element, back up above it, then down again.
        let scroll_positions = [0.0, 400.0, 1200.0, 3000.0, 0.0, 1200.0, 0.0];
        let mut fired = 0;
        for scroll_y in scroll_positions {
            if latch.observe(visible_at(options, 1500.0, scroll_y)) {
                fired += 1;
            }
            if scroll_y >= 1200.0 {
                assert!(latch.is_revealed());
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(latch.state(), RevealState::Revealed);
    }

    #[test]
    fn test_force_reveals() {
        let mut latch = RevealLatch::new();
        assert!(latch.force());
        assert!(!latch.force());
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_negative_margin_delays_trigger() {
        let margin = ViewportMargin(-100);
        // Top edge 50px above the viewport bottom: inside a plain viewport,
        // still outside the shrunk one.
        assert!(ViewportMargin::NONE.intersects(750.0, 950.0, VIEWPORT));
        assert!(!margin.intersects(750.0, 950.0, VIEWPORT));
        assert!(margin.intersects(650.0, 850.0, VIEWPORT));
    }

    #[test]
    fn test_intersects_edges() {
        assert!(!ViewportMargin::NONE.intersects(800.0, 900.0, VIEWPORT));
        assert!(!ViewportMargin::NONE.intersects(-200.0, 0.0, VIEWPORT));
        assert!(ViewportMargin::NONE.intersects(-200.0, 1.0, VIEWPORT));
        // Margin larger than half the viewport leaves nothing to intersect
        assert!(!ViewportMargin(-500).intersects(100.0, 700.0, VIEWPORT));
    }

    #[test]
    fn test_root_margin() {
        assert_eq!(ViewportOptions::SECTION_HEADER.margin.root_margin(), "-100px");
        assert_eq!(ViewportOptions::ITEM.margin.root_margin(), "-50px");
        assert_eq!(ViewportOptions::PLAIN.margin.root_margin(), "0px");
        assert_eq!(ViewportOptions::default(), ViewportOptions::PLAIN);
    }
}
