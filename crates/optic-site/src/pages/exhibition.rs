//! Exhibition page

use leptos::*;
use optic_core::content::{self, collection, hero, philosophy, PhilosophyLine};
use optic_core::motion::{stagger_delay, Easing, STAGGER_DEFAULT, STAGGER_PHILOSOPHY};
use optic_core::{
    scroll_to_section, HeroFrame, Transition, VariantPair, ViewportOptions, COLLECTION,
    COLLECTION_ANCHOR, PHILOSOPHY_LINES,
};
use crate::components::*;
use crate::motion::{use_reveal, use_scroll_progress, DocumentSurface};

#[component]
pub fn ExhibitionPage() -> impl IntoView {
    view! {
        <HeroSection/>
        <CollectionSection/>
        <PhilosophySection/>
        <SpacerSection/>
    }
}

/// Tall hero with a sticky frame. Image scale and headline offset/opacity
/// follow the section's own scroll progress.
#[component]
fn HeroSection() -> impl IntoView {
    let hero_ref = create_node_ref::<html::Section>();
    let progress = use_scroll_progress(hero_ref);
    let frame = move || HeroFrame::from_progress(progress.get());

    let explore = move |_: ev::MouseEvent| {
        scroll_to_section(&DocumentSurface, COLLECTION_ANCHOR);
    };

    view! {
        <section node_ref=hero_ref class="relative h-[150vh] bg-white">
            <div class="sticky top-0 h-screen flex items-center justify-center overflow-hidden">
                // Background image with parallax scale
                <div
                    class="absolute inset-0 z-0 flex items-center justify-center will-change-transform"
                    style=move || frame().image_style()
                >
                    <div class="relative w-full h-full max-w-[90vw] max-h-[70vh] mx-auto">
                        <img
                            src=hero::IMAGE_URL
                            alt=hero::IMAGE_ALT
                            class="w-full h-full object-contain grayscale contrast-125"
                        />
                        <div class="absolute inset-0 bg-gradient-to-b from-white via-transparent to-white opacity-40"></div>
                    </div>
                </div>

                // Headline
                <div class="relative z-10 text-center px-4" style=move || frame().text_style()>
                    <h1 class="text-[12vw] md:text-[10vw] font-black leading-[0.85] tracking-tighter text-black">
                        {hero::HEADLINE[0]}
                        <br/>
                        <span class="block ml-[-5vw]">{hero::HEADLINE[1]}</span>
                        <span class="block ml-[10vw]">{hero::HEADLINE[2]}</span>
                    </h1>

                    <button
                        type="button"
                        on:click=explore
                        class="mt-16 mx-auto flex flex-col items-center gap-4 group cursor-pointer transition-transform duration-300 hover:translate-y-[5px]"
                    >
                        <span class="text-sm tracking-[0.3em] uppercase font-semibold opacity-60 group-hover:opacity-100 transition-opacity">
                            {hero::CTA_LABEL}
                        </span>
                        <SafeIcon name="arrow-down" size=24 class="animate-bounce"/>
                    </button>
                </div>

                // Side captions
                <div class="absolute left-4 md:left-8 top-1/2 -translate-y-1/2 z-10 hidden md:block">
                    <p
                        class="text-xs tracking-[0.4em] uppercase font-semibold opacity-40 -rotate-180"
                        style="writing-mode: vertical-rl;"
                    >
                        {hero::LEFT_CAPTION}
                    </p>
                </div>
                <div class="absolute right-4 md:right-8 top-1/2 -translate-y-1/2 z-10 hidden md:block">
                    <p
                        class="text-xs tracking-[0.4em] uppercase font-semibold opacity-40"
                        style="writing-mode: vertical-rl;"
                    >
                        {hero::RIGHT_CAPTION}
                    </p>
                </div>
            </div>
        </section>
    }
}

/// Asymmetric three-column grid. Carries the anchor targeted by the hero
/// call-to-action.
#[component]
fn CollectionSection() -> impl IntoView {
    let header_ref = create_node_ref::<html::Div>();
    let header_revealed = use_reveal(header_ref, ViewportOptions::SECTION_HEADER);
    let header_child = move |index: usize| {
        let transition = Transition::default().with_delay(stagger_delay(index, STAGGER_DEFAULT));
        move || VariantPair::FADE_IN_UP.style(header_revealed.get(), &transition)
    };

    view! {
        <section id=COLLECTION_ANCHOR class="py-32 md:py-48 px-4 md:px-8 bg-white">
            <div class="max-w-[1800px] mx-auto">
                // Section header
                <div node_ref=header_ref class="mb-24 md:mb-40">
                    <h2
                        class="text-[15vw] md:text-[12vw] font-black tracking-tighter leading-none"
                        style=header_child(0)
                    >
                        {collection::TITLE}
                    </h2>
                    <p
                        class="text-lg md:text-2xl font-light mt-6 tracking-wide opacity-60 max-w-xl"
                        style=header_child(1)
                    >
                        {collection::TAGLINE}
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 md:gap-12">
                    {COLLECTION
                        .iter()
                        .enumerate()
                        .map(|(index, &item)| view! { <ShowcaseCard item=item index=index/> })
                        .collect_view()}
                </div>

                <div class="h-32 md:h-64"></div>
            </div>
        </section>
    }
}

#[component]
fn PhilosophySection() -> impl IntoView {
    view! {
        <section class="relative py-32 md:py-64 bg-black text-white overflow-hidden">
            <div class="max-w-[1800px] mx-auto px-4 md:px-8">
                <div class="space-y-2 md:space-y-4">
                    {PHILOSOPHY_LINES
                        .iter()
                        .enumerate()
                        .map(|(index, &line)| view! { <PhilosophyLineView index=index line=line/> })
                        .collect_view()}
                </div>

                <Reveal
                    class="mt-24 md:mt-40 max-w-2xl ml-auto"
                    variants=VariantPair::SOFT_RISE
                    transition=Transition::default().with_delay(0.5)
                    options=ViewportOptions::PLAIN
                >
                    <p class="text-lg md:text-2xl font-light leading-relaxed opacity-70">
                        {philosophy::STATEMENT}
                    </p>
                    <div class="mt-8 h-px bg-white/20 w-full"></div>
                    <p class="mt-8 text-sm uppercase tracking-[0.3em] opacity-40">
                        {philosophy::FOUNDED}
                    </p>
                </Reveal>
            </div>

            // Decorative rings
            <div class="absolute top-20 right-10 w-32 h-32 border border-white/10 rounded-full hidden md:block"></div>
            <div class="absolute bottom-40 left-10 w-64 h-64 border border-white/5 rounded-full hidden md:block"></div>
        </section>
    }
}

/// One line of the manifesto, rising out of a clipping mask.
#[component]
fn PhilosophyLineView(index: usize, line: &'static str) -> impl IntoView {
    let mask_ref = create_node_ref::<html::Div>();
    let revealed = use_reveal(mask_ref, ViewportOptions::ITEM);
    let transition = Transition::default()
        .with_easing(Easing::EXPO_OUT)
        .with_delay(stagger_delay(index, STAGGER_PHILOSOPHY));

    view! {
        <div node_ref=mask_ref class="overflow-hidden">
            <h2
                class=PhilosophyLine::class(index)
                style=move || VariantPair::RISE_FROM_MASK.style(revealed.get(), &transition)
            >
                {line}
            </h2>
        </div>
    }
}

#[component]
fn SpacerSection() -> impl IntoView {
    view! {
        <section class="h-[50vh] md:h-[80vh] bg-white flex items-center justify-center">
            <Reveal
                class="text-center px-4"
                variants=VariantPair::FADE_IN
                transition=Transition::new(1.5)
                options=ViewportOptions::PLAIN
            >
                <p class="text-[8vw] md:text-[4vw] font-black tracking-tighter opacity-10">
                    {content::SPACER_WORD}
                </p>
            </Reveal>
        </section>
    }
}
