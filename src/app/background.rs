use leptos::prelude::*;

use crate::diamonds::{background_filter, Density, DiamondField};
use crate::motion::interpolate;

use super::scroll::use_scroll;

/// Fixed layer of slowly drifting diamonds behind the whole page.
#[component]
pub fn DiamondBackground(
    #[prop(optional)] density: Density,
    #[prop(default = true)] animate: bool,
) -> impl IntoView {
    let scroll = use_scroll();
    let offset = scroll.offset();
    let progress = scroll.progress();
    let diamonds = StoredValue::new(
        DiamondField {
            density,
            ..DiamondField::default()
        }
        .generate(),
    );
    let (hovered, set_hovered) = signal(None::<usize>);

    let layer_style = move || {
        let p = progress.get();
        let opacity = interpolate(p, &[0.0, 0.2, 0.8, 1.0], &[1.0, 0.8, 0.8, 0.6]);
        format!(
            "filter: {}; opacity: {opacity:.3}; background-color: #f9fafb;",
            background_filter(p)
        )
    };

    let views = diamonds
        .get_value()
        .into_iter()
        .map(|diamond| {
            let id = diamond.id;
            let is_hovered = move || hovered.get() == Some(id);
            let placement = {
                let diamond = diamond.clone();
                move || {
                    let (x, y) = diamond.offset(offset.get());
                    format!(
                        "left: {:.2}%; top: {:.2}%; z-index: {}; transform: translate(-50%, -50%) translate3d({x:.1}px, {y:.1}px, {:.0}px) rotate({:.1}deg); animation-delay: {}ms;",
                        diamond.x,
                        diamond.y,
                        if is_hovered() { 1 } else { 0 },
                        diamond.depth * if is_hovered() { 20.0 } else { 10.0 },
                        diamond.rotation_for(is_hovered()),
                        diamond.id * 20,
                    )
                }
            };
            let shape = format!(
                "width: {size:.0}px; height: {size:.0}px; background-color: {color}; --glow: {color}; animation-duration: {}s;",
                3 + diamond.id % 5,
                size = diamond.size,
                color = diamond.color,
            );
            view! {
                <div
                    class="absolute opacity-70 transition-transform duration-500 ease-in-out diamond-enter"
                    class:pointer-events-auto=animate
                    style=placement
                    on:mouseenter=move |_| set_hovered.set(Some(id))
                    on:mouseleave=move |_| set_hovered.set(None)
                >
                    <div class="rotate-45 diamond-glow" style=shape></div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            class="fixed inset-0 overflow-hidden pointer-events-none -z-10"
            style=layer_style
            aria-hidden="true"
        >
            {views}
        </div>
    }
}
