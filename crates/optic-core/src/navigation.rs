//! Smooth-scroll navigation between page sections

use tracing::{debug, warn};

/// Anchor id of the showcase section, targeted by the hero call-to-action.
pub const COLLECTION_ANCHOR: &str = "collection";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Something that can locate sections by id and scroll them into view.
///
/// The browser implementation wraps `document` and `scrollIntoView`.
pub trait ScrollSurface {
    type Section;

    fn find_section(&self, id: &str) -> Option<Self::Section>;

    /// Aligns the section's top edge with the viewport top.
    fn scroll_to(&self, section: &Self::Section, behavior: ScrollBehavior);
}

/// Smoothly scrolls to the section with `id`. A missing section is a no-op;
/// returns whether a scroll was issued.
pub fn scroll_to_section<S: ScrollSurface>(surface: &S, id: &str) -> bool {
    match surface.find_section(id) {
        Some(section) => {
            debug!(section = id, "scrolling to section");
            surface.scroll_to(&section, ScrollBehavior::Smooth);
            true
        }
        None => {
            warn!(section = id, "scroll target not present, ignoring");
            false
        }
    }
}
