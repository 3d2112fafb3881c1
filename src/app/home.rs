use leptos::{ev, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_window};

use crate::scroll::{compute_transforms, rest_css, Anchor, ScrollState};

use super::anchors::AnchorBinder;
use super::badges::BadgeField;

/// Current scroll offset and viewport height, read straight off the window.
/// Failed reads degrade to zero, which the engine treats as no progress.
fn current_scroll_state() -> ScrollState {
    let window = window();
    ScrollState::new(
        window.scroll_y().unwrap_or_default().max(0.0),
        window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default(),
    )
}

#[component]
pub fn HomePage() -> impl IntoView {
    let binder = AnchorBinder::new();

    // One listener for the page's lifetime. leptos-use detaches it when the
    // component scope is disposed, including abnormal unmounts.
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        binder.apply(&compute_transforms(&current_scroll_state()));
    });
    on_cleanup(move || binder.unbind_all());

    // Anchor elements carry their engine-computed rest transform inline so
    // the server-rendered page matches the first client-side apply.
    view! {
        <Title text="Portfolio" />
        <div class="relative" style="transform-style: preserve-3d; perspective: 1200px">
            // Hero
            <div
                class="relative min-h-screen w-full overflow-hidden bg-transparent"
                style="transform-style: preserve-3d"
            >
                <div
                    class="fixed inset-0 bg-cover bg-center"
                    style="background-image: url('/bg.png'); background-attachment: fixed; transform: translateZ(0px); z-index: 0"
                ></div>

                // Portrait, drifting down against the scroll
                <div
                    node_ref=binder.anchor_ref(Anchor::Portrait)
                    class="absolute inset-0 flex items-center justify-center z-10 transition-transform duration-100 ease-out"
                    style=format!(
                        "top: -10%; transform-style: preserve-3d; transform: {}",
                        rest_css(Anchor::Portrait),
                    )
                >
                    <div
                        class="w-96 h-96 md:w-[28rem] md:h-[28rem] lg:w-[32rem] lg:h-[32rem] overflow-hidden opacity-0 animate-fade-in-delayed"
                        style="animation-delay: 0.3s; animation-fill-mode: forwards; box-shadow: 0 50px 100px rgba(0,0,0,0.6); transform-style: preserve-3d"
                    >
                        <img
                            src="/me.png"
                            alt="Portrait"
                            class="w-full h-full object-cover grayscale contrast-110 brightness-90"
                            style="transform: scale(1.05)"
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-black/0 via-transparent to-transparent"></div>
                    </div>
                </div>

                // Oversized name, rising faster than the scroll
                <div
                    node_ref=binder.anchor_ref(Anchor::BackgroundLabel)
                    class="absolute inset-0 flex items-center justify-center pointer-events-none transition-transform duration-100 ease-out"
                    style=format!(
                        "z-index: 1; top: 65%; transform-style: preserve-3d; transform: {}",
                        rest_css(Anchor::BackgroundLabel),
                    )
                >
                    <div
                        class="text-[4rem] md:text-[10rem] lg:text-[15rem] font-display text-black/30 select-none leading-none opacity-0 animate-fade-in-delayed"
                        style="animation-delay: 0.1s; animation-fill-mode: forwards; text-shadow: 0 20px 40px rgba(0,0,0,0.4)"
                    >
                        "AAMIR NAQVI"
                    </div>
                </div>

                // Headline, counter-drifting subtly
                <div
                    node_ref=binder.anchor_ref(Anchor::Headline)
                    class="absolute inset-0 flex items-center justify-center"
                    style=format!(
                        "top: 60%; transform-style: preserve-3d; transform: {}",
                        rest_css(Anchor::Headline),
                    )
                >
                    <div class="text-center z-10 px-6">
                        <HeadlineLine text="I EDIT" delay_secs=0.8 />
                        <HeadlineLine text="VISUALS THAT" delay_secs=1.1 />
                        <HeadlineLine text="BUILD BRANDS" delay_secs=1.4 />
                    </div>
                </div>

                <BadgeField />

                // Scroll indicator, near-fixed with a slow spin
                <div
                    node_ref=binder.anchor_ref(Anchor::Indicator)
                    class="absolute bottom-4 left-1/2 opacity-0 animate-fade-in-delayed z-30"
                    style=format!(
                        "animation-delay: 3.5s; animation-fill-mode: forwards; filter: drop-shadow(0 15px 30px rgba(34, 211, 238, 0.5)); transform: {}",
                        rest_css(Anchor::Indicator),
                    )
                >
                    <div class="flex flex-col items-center">
                        <div class="w-0 h-0 border-l-[12px] border-r-[12px] border-t-[20px] border-l-transparent border-r-transparent border-t-cyan-400 animate-bounce-triangle"></div>
                    </div>
                </div>
            </div>

            // Work section, sliding up from below the fold
            <div
                node_ref=binder.anchor_ref(Anchor::SecondarySection)
                class="relative min-h-screen w-full bg-gradient-to-br from-gray-900 via-black to-gray-800"
                style=format!(
                    "z-index: 40; box-shadow: 0 -50px 100px rgba(0,0,0,0.8); transform-style: preserve-3d; transform: {}",
                    rest_css(Anchor::SecondarySection),
                )
            >
                <div class="absolute inset-0 flex items-center justify-center">
                    <div class="text-center px-6">
                        <h2
                            class="text-4xl md:text-6xl lg:text-7xl font-display text-white mb-8"
                            style="text-shadow: 0 20px 40px rgba(0,0,0,0.8)"
                        >
                            "MY WORK"
                        </h2>
                        <p
                            class="text-xl md:text-2xl text-white/70 max-w-2xl mx-auto leading-relaxed"
                            style="text-shadow: 0 10px 20px rgba(0,0,0,0.6)"
                        >
                            "Crafting visual narratives that resonate with audiences and elevate brand experiences through innovative editing techniques."
                        </p>
                        <div class="mt-12 grid grid-cols-1 md:grid-cols-3 gap-8 max-w-4xl mx-auto">
                            {(1..=3)
                                .map(|n| view! { <ProjectCard number=n /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn HeadlineLine(text: &'static str, delay_secs: f64) -> impl IntoView {
    view! {
        <div
            class="text-2xl md:text-4xl lg:text-5xl font-display tracking-tight text-white/80 leading-tight mt-2 opacity-0 animate-fade-in-delayed"
            style=format!(
                "animation-delay: {delay_secs}s; animation-fill-mode: forwards; text-shadow: 0 25px 50px rgba(0,0,0,0.7)",
            )
        >
            {text}
        </div>
    }
}

#[component]
fn ProjectCard(number: u32) -> impl IntoView {
    view! {
        <div
            class="bg-white/10 backdrop-blur-sm rounded-lg p-6 hover:scale-105 transition-transform duration-300"
            style=format!(
                "transform: translateZ({}px) rotateY({}deg); box-shadow: 0 20px 40px rgba(0,0,0,0.5)",
                30 + number * 10,
                number * 2,
            )
        >
            <h3 class="text-xl font-display text-white mb-4">{format!("PROJECT {number}")}</h3>
            <p class="text-white/60">"Lorem ipsum dolor sit amet, consectetur adipiscing elit."</p>
        </div>
    }
}
