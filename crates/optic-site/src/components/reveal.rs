//! Viewport reveal wrapper

use leptos::*;
use optic_core::{Transition, VariantPair, ViewportOptions};
use crate::motion::use_reveal;

/// Hides its children until the wrapper scrolls into view, then animates
/// them to the visible variant. Never hides them again.
#[component]
pub fn Reveal(
    #[prop(optional, into)] class: String,
    #[prop(default = VariantPair::FADE_IN_UP)] variants: VariantPair,
    #[prop(optional)] transition: Transition,
    #[prop(optional)] options: ViewportOptions,
    children: Children,
) -> impl IntoView {
    let node = create_node_ref::<html::Div>();
    let revealed = use_reveal(node, options);

    view! {
        <div
            node_ref=node
            class=class
            style=move || variants.style(revealed.get(), &transition)
        >
            {children()}
        </div>
    }
}
