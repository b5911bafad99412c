//! Server-side rendering of the exhibition page
#![cfg(feature = "ssr")]

use leptos::*;
use optic_core::{Transition, VariantPair, ViewportOptions};
use optic_site::components::{Footer, Reveal};
use optic_site::pages::ExhibitionPage;

fn render_page() -> String {
    leptos::ssr::render_to_string(|| view! { <ExhibitionPage/> }).to_string()
}

fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| html.find(n).unwrap_or_else(|| panic!("missing {n}")))
        .collect()
}

#[test]
fn test_collection_renders_in_order() {
    let html = render_page();
    let pos = positions(&html, &["id=\"neon-01\"", "id=\"liquid-silver\"", "id=\"void-ghost\""]);
    assert!(pos.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(html.matches("<article").count(), 3);
}

#[test]
fn test_collection_anchor_present() {
    let html = render_page();
    assert!(html.contains("id=\"collection\""));
}

#[test]
fn test_philosophy_lines_in_order() {
    let html = render_page();
    let pos = positions(&html, &["ОЧКИ — ЭТО НЕ", "АКСЕССУАР.", "ЭТО ИНТЕРФЕЙС", "ЧЕЛОВЕКА."]);
    assert!(pos.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_reveals_start_hidden() {
    let html = render_page();
    // Cards stagger by 0.2s, philosophy lines by 0.1s
    assert!(html.contains("opacity: 0; transform: translateY(60px) scale(1);"));
    assert!(html.contains("transform 0.8s ease-out 0.4s"));
    assert!(html.contains("transform 0.8s cubic-bezier(0.22, 1, 0.36, 1) 0.3s"));
}

#[test]
fn test_hero_starts_at_rest() {
    let html = render_page();
    assert!(html.contains("transform: scale(1.0000);"));
    assert!(html.contains("transform: translateY(0.00px); opacity: 1.0000;"));
}

#[test]
fn test_reveal_wrapper_renders_children_hidden() {
    let html = leptos::ssr::render_to_string(|| {
        view! {
            <Reveal
                class="statement"
                variants=VariantPair::SOFT_RISE
                transition=Transition::default().with_delay(0.5)
                options=ViewportOptions::PLAIN
            >
                <p>"inside"</p>
            </Reveal>
        }
    })
    .to_string();
    assert!(html.contains("class=\"statement\""));
    assert!(html.contains(">inside</p>"));
    assert!(html.contains("opacity: 0;"));
    assert!(html.contains("0.8s ease-out 0.5s"));
}

#[test]
fn test_footer_contacts() {
    let html = leptos::ssr::render_to_string(|| view! { <Footer/> }).to_string();
    assert!(html.contains("info@opticflow.io"));
    assert!(html.contains("VOID GHOST"));
}
