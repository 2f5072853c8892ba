use leptos::{html, prelude::*};

use crate::diamonds::{hero_accents, DEFAULT_SEED};
use crate::motion::interpolate;
use crate::scroll::ScrollRange;

use super::header::use_section_observer;
use super::scroll::{scroll_to_section, use_scroll, use_section_progress};

const HERO_ACCENT_SEED: u64 = DEFAULT_SEED ^ 0x4e60;

/// Hero banner values at local progress `p` (0 with the banner's top at the
/// viewport top, 1 once it has scrolled out).
#[derive(Debug, Clone, Copy, PartialEq)]
struct HeroMotion {
    title_y: f64,
    subtitle_y: f64,
    cta_scale: f64,
    cta_opacity: f64,
    overlay_opacity: f64,
    arrow_opacity: f64,
}

impl HeroMotion {
    fn at(p: f64) -> Self {
        Self {
            title_y: interpolate(p, &[0.0, 1.0], &[0.0, -100.0]),
            subtitle_y: interpolate(p, &[0.0, 1.0], &[0.0, -50.0]),
            cta_scale: interpolate(p, &[0.0, 0.5], &[1.0, 0.8]),
            cta_opacity: interpolate(p, &[0.0, 0.5], &[1.0, 0.0]),
            overlay_opacity: interpolate(p, &[0.0, 0.8], &[0.3, 0.7]),
            arrow_opacity: interpolate(p, &[0.0, 0.2], &[1.0, 0.0]),
        }
    }
}

#[component]
pub fn HeroSection(
    #[prop(default = "Jordan Avery")] title: &'static str,
    #[prop(default = "I create elegant solutions with a touch of luxury")] subtitle: &'static str,
    #[prop(default = "Explore My Work")] cta_text: &'static str,
    #[prop(default = "/profile.webp")] image_url: &'static str,
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let progress = use_section_progress(section_ref, ScrollRange::LEAVING_TOP);
    use_section_observer("hero".to_string(), section_ref);
    let motion = Memo::new(move |_| HeroMotion::at(progress.get()));
    let offset = use_scroll().offset();

    let accents = hero_accents(HERO_ACCENT_SEED)
        .into_iter()
        .map(|accent| {
            let style = move || {
                format!(
                    "top: {:.2}%; left: {:.2}%; transform: translate({:.1}px, {:.1}px) scale({:.2}) rotate(45deg); animation-duration: {:.1}s;",
                    accent.top,
                    accent.left,
                    accent.drift_x,
                    accent.translate_y(offset.get()),
                    accent.scale,
                    accent.duration,
                )
            };
            view! {
                <div
                    class="absolute h-24 w-24 bg-amber-500/20 border border-amber-300/30 accent-pulse"
                    style=style
                ></div>
            }
        })
        .collect_view();

    view! {
        <section
            id="hero"
            node_ref=section_ref
            class="relative h-[200vh] w-full overflow-hidden bg-emerald-900"
        >
            <div class="sticky top-0 h-screen w-full flex items-center justify-center overflow-hidden">
                <div
                    class="absolute inset-0 bg-black z-10"
                    style=move || format!("opacity: {:.3};", motion.get().overlay_opacity)
                ></div>
                <div class="relative z-20 flex flex-col md:flex-row items-center justify-between px-4 max-w-6xl w-full mx-auto">
                    <div class="md:w-1/2 text-left mb-10 md:mb-0">
                        <h1
                            class="text-4xl md:text-6xl font-bold text-amber-300 mb-6 fade-down"
                            style=move || format!("transform: translateY({:.1}px);", motion.get().title_y)
                        >
                            {title}
                        </h1>
                        <p
                            class="text-xl md:text-2xl text-emerald-50 mb-8 fade-in"
                            style=move || {
                                format!("transform: translateY({:.1}px);", motion.get().subtitle_y)
                            }
                        >
                            {subtitle}
                        </p>
                        <div class="flex flex-wrap gap-4 mb-10 fade-in">
                            {["Software Development", "Network Security", "SaaS Solutions"]
                                .into_iter()
                                .map(|skill| {
                                    view! {
                                        <div class="flex items-center gap-2 bg-emerald-900/60 backdrop-blur-sm px-4 py-2 rounded-full">
                                            <span class="text-amber-300">"◆"</span>
                                            <span class="text-emerald-50">{skill}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div style=move || {
                            let m = motion.get();
                            format!(
                                "transform: scale({:.3}); opacity: {:.3}; transform-origin: left;",
                                m.cta_scale,
                                m.cta_opacity,
                            )
                        }>
                            <button
                                class="bg-amber-500 hover:bg-amber-600 text-emerald-950 px-8 py-4 text-lg rounded-md"
                                on:click=move |_| scroll_to_section("projects")
                            >
                                {cta_text}
                                " ↓"
                            </button>
                        </div>
                    </div>
                    <div class="md:w-1/2 flex justify-center">
                        <div class="relative">
                            <div class="w-64 h-64 md:w-80 md:h-80 relative rotate-45 overflow-hidden border-4 border-amber-400 shadow-xl backdrop-blur-sm">
                                <div class="absolute inset-0 -rotate-45 scale-[1.4]">
                                    <img src=image_url alt="Profile" class="w-full h-full object-contain" />
                                </div>
                            </div>
                            <div class="absolute -top-6 -left-6 w-12 h-12 bg-amber-500/70 rotate-45 hover:scale-125 transition-transform"></div>
                            <div class="absolute -bottom-6 -right-6 w-12 h-12 bg-emerald-600/70 rotate-45 hover:scale-125 transition-transform"></div>
                        </div>
                    </div>
                </div>
                <button
                    class="absolute bottom-10 left-1/2 -translate-x-1/2 z-20 text-4xl text-amber-300 animate-bounce"
                    aria-label="Scroll to about"
                    style=move || format!("opacity: {:.3};", motion.get().arrow_opacity)
                    on:click=move |_| scroll_to_section("about")
                >
                    "↓"
                </button>
                {accents}
            </div>
        </section>
    }
}
