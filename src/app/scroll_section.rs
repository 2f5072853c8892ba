use leptos::{html, prelude::*};

use crate::scroll::ScrollRange;
use crate::section::SectionAnimationConfig;

use super::header::use_section_observer;
use super::scroll::use_section_progress;

/// Full-height page section whose content fades, scales and drifts with the
/// section's own progress through the viewport.
#[component]
pub fn ScrollSection(
    id: &'static str,
    #[prop(default = SectionAnimationConfig::new())] config: SectionAnimationConfig,
    #[prop(default = "100vh")] height: &'static str,
    #[prop(default = 1)] z_index: i32,
    #[prop(default = "transparent")] background_color: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let progress = use_section_progress(section_ref, ScrollRange::THROUGH_VIEWPORT);
    use_section_observer(id.to_string(), section_ref);

    let with_translate = config.has_parallax();
    let content_style = move || config.derive(progress.get()).to_style(with_translate);

    view! {
        <section
            id=id
            node_ref=section_ref
            class=format!("relative {class}")
            style=format!(
                "height: {height}; z-index: {z_index}; background-color: {background_color};",
            )
        >
            <div
                class="w-full h-full"
                class:sticky=config.pinned
                class:top-0=config.pinned
                style=content_style
            >
                {children()}
            </div>
        </section>
    }
}
