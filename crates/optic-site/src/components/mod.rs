//! Page components

mod footer;
mod header;
mod icon;
mod reveal;
mod showcase_card;

pub use footer::Footer;
pub use header::Header;
pub use icon::SafeIcon;
pub use reveal::Reveal;
pub use showcase_card::{CardHover, ShowcaseCard};
