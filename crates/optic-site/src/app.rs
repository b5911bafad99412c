//! Main application component

use leptos::*;
use leptos_meta::{provide_meta_context, Html, Meta, Stylesheet, Title};
use leptos_router::*;
use crate::pages::*;
use crate::components::*;

/// Theme custom properties, rendered by the server from its loaded theme.
/// Linked rather than inlined so the hydrated client never re-renders them.
pub const THEME_STYLESHEET: &str = "/theme.css";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="ru"/>
        <Title text="OPTIC FLOW — Цифровая выставка"/>
        <Meta name="description" content="Цифровая выставка концептуальной оптики. Жидкий металл. Будущее уже здесь."/>
        <Stylesheet id="leptos" href="/pkg/optic-flow.css"/>
        <Stylesheet id="theme" href=THEME_STYLESHEET/>

        <Router>
            <div class="bg-white text-black font-sans min-h-screen overflow-x-hidden mobile-safe-container">
                <Header/>
                <main>
                    <Routes>
                        <Route path="/" view=ExhibitionPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
