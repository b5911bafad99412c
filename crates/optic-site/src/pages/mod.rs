//! Site pages

mod exhibition;

pub use exhibition::ExhibitionPage;
