use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::nav::{NavBarStyle, NavHighlighter, NavItem, Observation, VISIBILITY_THRESHOLD};

use super::scroll::{scroll_to_section, use_scroll};

#[derive(Debug, Clone, Copy)]
pub struct NavContext(pub RwSignal<NavHighlighter>);

pub fn provide_nav_context(items: Vec<NavItem>) -> NavContext {
    let ctx = NavContext(RwSignal::new(NavHighlighter::new(items)));
    provide_context(ctx);
    ctx
}

/// Reports visibility of `target` to the navigation highlighter under
/// `section_id`.
pub fn use_section_observer(section_id: String, target: NodeRef<html::Section>) {
    let NavContext(nav) = expect_context::<NavContext>();
    let _ = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let observation = Observation {
                    section_id: &section_id,
                    is_intersecting: entry.is_intersecting(),
                    intersection_ratio: entry.intersection_ratio(),
                };
                nav.update(|n| {
                    if n.observe(observation) {
                        log::debug!("active section: {}", observation.section_id);
                    }
                });
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![VISIBILITY_THRESHOLD]),
    );
}

#[component]
pub fn Header() -> impl IntoView {
    let scroll = use_scroll();
    let offset = scroll.offset();
    let style = Memo::new(move |_| NavBarStyle::at(offset.get()));

    view! {
        <nav
            class="fixed top-0 left-0 right-0 z-50 py-6 backdrop-blur-md transition-transform duration-500"
            style=move || style.get().bar_style()
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between">
                <div
                    class="text-2xl font-bold text-emerald-800 origin-left"
                    style=move || style.get().logo_style()
                >
                    <span class="text-amber-600">"Diamond"</span>
                    "Portfolio"
                </div>
                <NavigationMenu />
            </div>
        </nav>
    }
}

#[component]
fn NavigationMenu() -> impl IntoView {
    let NavContext(nav) = expect_context::<NavContext>();
    let items = nav.with_untracked(|n| n.items().to_vec());
    let menu_open = Memo::new(move |_| nav.with(|n| n.is_menu_open()));

    let nav_click = move |section_id: &str| {
        scroll_to_section(section_id);
        nav.update(|n| n.close_menu());
    };

    let desktop_items = items
        .iter()
        .cloned()
        .map(|item| {
            let id = item.section_id.clone();
            let is_active = Memo::new({
                let id = id.clone();
                move |_| nav.with(|n| n.is_active(&id))
            });
            view! {
                <a
                    class=move || {
                        if is_active.get() {
                            "cursor-pointer transition-colors duration-300 text-amber-600"
                        } else {
                            "cursor-pointer transition-colors duration-300 text-emerald-700 hover:text-amber-600"
                        }
                    }
                    on:click=move |_| nav_click(&id)
                >
                    {item.label}
                    <Show when=move || is_active.get()>
                        <div class="h-0.5 bg-amber-600 mt-1 animate-fade-in"></div>
                    </Show>
                </a>
            }
        })
        .collect_view();

    let mobile_items = items
        .into_iter()
        .map(|item| {
            let id = item.section_id;
            view! {
                <a
                    class="text-2xl font-medium text-white hover:text-amber-300 cursor-pointer"
                    on:click=move |_| nav_click(&id)
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="hidden md:flex space-x-8">{desktop_items}</div>
        <button
            class="md:hidden text-emerald-800 z-50 text-2xl"
            aria-label="Toggle navigation menu"
            on:click=move |_| nav.update(|n| n.toggle_menu())
        >
            {move || if menu_open.get() { "✕" } else { "☰" }}
        </button>
        <div
            class="fixed inset-0 bg-emerald-900/95 z-40 flex items-center justify-center md:hidden transition-opacity duration-300"
            class:opacity-0=move || !menu_open.get()
            class:pointer-events-none=move || !menu_open.get()
        >
            <div class="flex flex-col items-center space-y-8">{mobile_items}</div>
        </div>
    }
}
