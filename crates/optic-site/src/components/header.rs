//! Fixed site header

use leptos::*;
use optic_core::content::BRAND;
use super::SafeIcon;

/// Brand mark and menu affordance. The header blends with the page through
/// `mix-blend-difference`, so it reads on both light and dark sections.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 mix-blend-difference px-4 md:px-8 py-6">
            <nav class="flex justify-between items-center max-w-[1800px] mx-auto">
                // Logo
                <a href="/" class="text-white font-black text-xl md:text-2xl tracking-tighter">
                    {BRAND}
                </a>

                // Menu button; no menu panel exists yet
                <button
                    type="button"
                    aria-label="Меню"
                    class="text-white p-2 hover:opacity-60 transition-opacity"
                >
                    <SafeIcon name="menu" size=28/>
                </button>
            </nav>
        </header>
    }
}
