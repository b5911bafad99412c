//! Lucide icon rendering

use leptos::*;
use optic_core::icons::{self, Glyph, IconStyle};

/// Renders the glyph registered under `name`, or the fallback glyph for an
/// unknown name.
#[component]
pub fn SafeIcon(
    name: &'static str,
    #[prop(default = 24)] size: u32,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] color: Option<String>,
) -> impl IntoView {
    let glyph = icons::resolve(name);
    let style = IconStyle { size, class, color };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=style.size.to_string()
            height=style.size.to_string()
            viewBox=Glyph::VIEW_BOX
            fill="none"
            stroke=style.stroke().to_string()
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=style.class.clone()
            data-icon=glyph.name.as_str()
            aria-hidden="true"
        >
            {glyph.paths.iter().map(|&d| view! { <path d=d></path> }).collect_view()}
        </svg>
    }
}
