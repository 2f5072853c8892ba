use leptos::prelude::*;

/// Round profile picture that falls back to the owner's initials when the
/// image can't be loaded.
#[component]
pub fn Avatar(
    src: &'static str,
    name: &'static str,
    #[prop(default = "w-24 h-24")] size: &'static str,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let initials = initials(name);

    view! {
        <div class=format!(
            "{size} mx-auto mb-4 rounded-full overflow-hidden bg-emerald-200 flex items-center justify-center",
        )>
            <Show
                when=move || !failed.get()
                fallback=move || {
                    view! { <span class="text-2xl font-semibold text-emerald-800">{initials.clone()}</span> }
                }
            >
                <img
                    src=src
                    alt=name
                    class="w-full h-full object-cover"
                    on:error=move |_| set_failed.set(true)
                />
            </Show>
        </div>
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
