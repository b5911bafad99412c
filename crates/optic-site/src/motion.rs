//! Browser bindings for scroll progress, viewport reveals and section
//! navigation
//!
//! Every decision is delegated to `optic_core`; this module only listens to
//! the DOM and feeds the results into signals. Listeners and observers are
//! released when the owning component is disposed.

use leptos::html::ElementDescriptor;
use leptos::*;
use optic_core::navigation::{ScrollBehavior, ScrollSurface};
use optic_core::{RevealLatch, ScrollProgress, ViewportOptions};
use std::ops::Deref;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Scroll progress of `target` from "top meets viewport top" (0) to "bottom
/// meets viewport top" (1), recomputed on every scroll and resize.
pub fn use_scroll_progress<T>(target: NodeRef<T>) -> ReadSignal<ScrollProgress>
where
    T: ElementDescriptor + Clone + Deref + 'static,
    T::Target: AsRef<web_sys::Element>,
{
    let (progress, set_progress) = create_signal(ScrollProgress::START);

    let measure = move |el: &html::HtmlElement<T>| {
        let element: &web_sys::Element = (**el).as_ref();
        let rect = element.get_bounding_client_rect();
        let next = ScrollProgress::from_rect(rect.top(), rect.height());
        if next != progress.get_untracked() {
            set_progress.set(next);
        }
    };

    // Initial measurement once the element is mounted
    create_effect(move |_| {
        if let Some(el) = target.get() {
            measure(&el);
        }
    });

    let on_change = move || {
        if let Some(el) = target.get_untracked() {
            measure(&el);
        }
    };
    let scroll = window_event_listener(ev::scroll, move |_| on_change());
    let resize = window_event_listener(ev::resize, move |_| on_change());
    on_cleanup(move || {
        scroll.remove();
        resize.remove();
    });

    progress
}

/// One-way reveal flag for `target`: flips to `true` the first time the
/// element intersects the viewport shrunk by `options.margin`, then stops
/// observing.
pub fn use_reveal<T>(target: NodeRef<T>, options: ViewportOptions) -> Signal<bool>
where
    T: ElementDescriptor + Clone + Deref + 'static,
    T::Target: AsRef<web_sys::Element>,
{
    let (latch, set_latch) = create_signal(RevealLatch::new());

    create_effect(move |_| {
        let Some(el) = target.get() else {
            return;
        };
        if latch.get_untracked().is_revealed() {
            return;
        }
        let element: &web_sys::Element = (*el).as_ref();

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                let mut fired = false;
                set_latch.update(|latch| fired = latch.observe(intersecting));
                if fired {
                    observer.disconnect();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.margin.root_margin());

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(element);
                on_cleanup(move || {
                    observer.disconnect();
                    drop(callback);
                });
            }
            Err(err) => {
                warn!(?err, "IntersectionObserver unavailable, revealing immediately");
                set_latch.update(|latch| {
                    latch.force();
                });
            }
        }
    });

    Signal::derive(move || latch.get().is_revealed())
}

/// The live document as a navigation surface
pub struct DocumentSurface;

impl ScrollSurface for DocumentSurface {
    type Section = web_sys::Element;

    fn find_section(&self, id: &str) -> Option<web_sys::Element> {
        document().get_element_by_id(id)
    }

    fn scroll_to(&self, section: &web_sys::Element, behavior: ScrollBehavior) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
