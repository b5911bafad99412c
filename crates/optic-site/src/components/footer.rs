//! Site footer

use leptos::*;
use optic_core::content::footer;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white text-black py-24 md:py-32 px-4 md:px-8 telegram-safe-bottom">
            <div class="max-w-[1800px] mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-16 md:gap-32">
                    // Brand
                    <div>
                        <h3 class="text-[10vw] md:text-[6vw] font-black tracking-tighter leading-none mb-8">
                            {footer::BRAND_LINES[0]}
                            <br/>
                            {footer::BRAND_LINES[1]}
                        </h3>
                        <p class="text-lg font-light opacity-60 max-w-md">{footer::TAGLINE}</p>
                    </div>

                    // Links
                    <div class="flex flex-col md:flex-row gap-12 md:gap-24">
                        <div>
                            <h4 class="text-sm uppercase tracking-[0.3em] font-semibold mb-6 opacity-40">
                                {footer::COLLECTION_HEADING}
                            </h4>
                            <ul class="space-y-3">
                                {footer::collection_links()
                                    .map(|name| view! {
                                        <li class="text-lg font-light hover:opacity-60 cursor-pointer transition-opacity">
                                            {name}
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div>
                            <h4 class="text-sm uppercase tracking-[0.3em] font-semibold mb-6 opacity-40">
                                {footer::CONTACTS_HEADING}
                            </h4>
                            <ul class="space-y-3">
                                {footer::CONTACTS
                                    .iter()
                                    .map(|&line| view! { <li class="text-lg font-light opacity-80">{line}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </div>

                // Bottom bar
                <div class="mt-24 pt-8 border-t border-black/10 flex flex-col md:flex-row justify-between items-start md:items-center gap-4">
                    <p class="text-xs tracking-[0.2em] uppercase opacity-40">{footer::COPYRIGHT}</p>
                    <p class="text-xs tracking-[0.2em] uppercase opacity-40">{footer::CREDIT}</p>
                </div>
            </div>
        </footer>
    }
}
