//! Optic Flow Core
//!
//! Target-independent model behind the Optic Flow exhibition page: the
//! static content, the scroll-linked motion math, the one-way reveal latch,
//! the icon resolver, smooth-scroll navigation and the theme configuration.
//! Nothing in this crate touches the DOM; the site crate binds it to the
//! browser.

pub mod content;
pub mod icons;
pub mod motion;
pub mod navigation;
pub mod reveal;
pub mod theme;

use thiserror::Error;

pub use content::{LayoutOffset, ShowcaseItem, COLLECTION, PHILOSOPHY_LINES};
pub use icons::{Glyph, IconName, IconStyle};
pub use motion::{HeroFrame, ScrollProgress, Transition, Variant, VariantPair};
pub use navigation::{scroll_to_section, ScrollBehavior, ScrollSurface, COLLECTION_ANCHOR};
pub use reveal::{RevealLatch, RevealState, ViewportMargin, ViewportOptions};
pub use theme::{Palette, Theme};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
