//! Collection grid card

use leptos::*;
use optic_core::content::showcase_index_label;
use optic_core::motion::{stagger_delay, STAGGER_SHOWCASE};
use optic_core::{ShowcaseItem, Transition, VariantPair, ViewportOptions};
use crate::motion::use_reveal;
use super::SafeIcon;

/// Pointer state of a card. Hovering the card brings the image into color
/// and shows the chevron; the zoom follows the pointer over the image alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardHover {
    card: bool,
    image: bool,
}

impl CardHover {
    pub fn enter_card(&mut self) {
        self.card = true;
    }

    /// Leaving the card also leaves the image it contains
    pub fn leave_card(&mut self) {
        *self = Self::default();
    }

    pub fn enter_image(&mut self) {
        self.card = true;
        self.image = true;
    }

    pub fn leave_image(&mut self) {
        self.image = false;
    }

    pub fn image_class(self) -> &'static str {
        match (self.card, self.image) {
            (_, true) => "w-full h-full object-cover grayscale-0 scale-105 transition-all duration-700",
            (true, false) => "w-full h-full object-cover grayscale-0 scale-100 transition-all duration-700",
            (false, false) => "w-full h-full object-cover grayscale scale-100 transition-all duration-700",
        }
    }

    pub fn chevron_class(self) -> &'static str {
        if self.card {
            "opacity-100 translate-x-1 transition-all"
        } else {
            "opacity-0 translate-x-0 transition-all"
        }
    }
}

#[component]
pub fn ShowcaseCard(item: ShowcaseItem, index: usize) -> impl IntoView {
    let node = create_node_ref::<html::Article>();
    let revealed = use_reveal(node, ViewportOptions::ITEM);
    let transition = Transition::default().with_delay(stagger_delay(index, STAGGER_SHOWCASE));
    let hover = create_rw_signal(CardHover::default());

    view! {
        <article
            node_ref=node
            id=item.id
            class=format!("group {}", item.offset.class())
            style=move || VariantPair::FADE_IN_UP.style(revealed.get(), &transition)
            on:mouseenter=move |_| hover.update(CardHover::enter_card)
            on:mouseleave=move |_| hover.update(CardHover::leave_card)
        >
            // Image
            <div class="relative overflow-hidden bg-neutral-100 mb-8 aspect-[3/4]">
                <img
                    src=item.image_url
                    alt=item.name
                    loading="lazy"
                    class=move || hover.get().image_class()
                    on:mouseenter=move |_| hover.update(CardHover::enter_image)
                    on:mouseleave=move |_| hover.update(CardHover::leave_image)
                />
                <div class="absolute top-4 left-4 text-6xl font-black opacity-10">
                    {showcase_index_label(index)}
                </div>
            </div>

            // Content
            <div class="space-y-4">
                <div class="flex items-baseline gap-4">
                    <h3 class="text-3xl md:text-4xl font-black tracking-tight">{item.name}</h3>
                    <span class=move || hover.get().chevron_class()>
                        <SafeIcon name="chevron-right" size=20/>
                    </span>
                </div>
                <p class="text-sm uppercase tracking-[0.2em] font-semibold opacity-40">
                    {item.subtitle}
                </p>
                <p class="text-base md:text-lg font-light leading-relaxed opacity-80 max-w-sm">
                    {item.description}
                </p>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoomed(hover: CardHover) -> bool {
        hover.image_class().contains("scale-105")
    }

    fn in_color(hover: CardHover) -> bool {
        hover.image_class().contains("grayscale-0")
    }

    #[test]
    fn test_rest_state() {
        let hover = CardHover::default();
        assert!(hover.image_class().contains(" grayscale "));
        assert!(!zoomed(hover));
        assert!(hover.chevron_class().starts_with("opacity-0"));
    }

    #[test]
    fn test_card_hover_colors_without_zoom() {
        let mut hover = CardHover::default();
        hover.enter_card();
        assert!(in_color(hover));
        assert!(!zoomed(hover));
        assert!(hover.chevron_class().starts_with("opacity-100"));
    }

    #[test]
    fn test_zoom_follows_image_only() {
        let mut hover = CardHover::default();
        hover.enter_card();
        hover.enter_image();
        assert!(zoomed(hover));

        // Pointer moves to the caption, still inside the card
        hover.leave_image();
        assert!(!zoomed(hover));
        assert!(in_color(hover));
    }

    #[test]
    fn test_leave_round_trip() {
        let mut hover = CardHover::default();
        for _ in 0..2 {
            hover.enter_card();
            hover.enter_image();
            hover.leave_card();
            assert_eq!(hover, CardHover::default());
            assert!(!in_color(hover));
            assert!(hover.chevron_class().starts_with("opacity-0"));
        }
    }

    #[test]
    fn test_signal_round_trip() {
        let runtime = create_runtime();
        let hover = create_rw_signal(CardHover::default());
        let image = Signal::derive(move || hover.get().image_class());

        hover.update(CardHover::enter_card);
        hover.update(CardHover::enter_image);
        assert!(image.get().contains("scale-105"));

        hover.update(CardHover::leave_card);
        assert!(image.get().contains(" grayscale "));
        assert!(!image.get().contains("scale-105"));

        runtime.dispose();
    }
}
