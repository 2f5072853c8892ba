use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::nav::{default_items, section_from_hash};
use crate::section::SectionAnimationConfig;

use super::background::DiamondBackground;
use super::contact::ContactForm;
use super::header::{provide_nav_context, Header};
use super::hero::HeroSection;
use super::scroll::{provide_scroll_context, scroll_to_section};
use super::scroll_section::ScrollSection;
use super::sections::{AboutSection, ProfileSection, ProjectsSection};

const DEEP_LINK_DELAY: Duration = Duration::from_millis(100);

#[component]
pub fn HomePage() -> impl IntoView {
    provide_scroll_context();
    provide_nav_context(default_items());

    // Honor `/#section` links once the page has laid out.
    let hash = use_location().hash;
    Effect::new(move |_| {
        let hash = hash.get();
        if let Some(id) = section_from_hash(&hash) {
            let id = id.to_string();
            set_timeout(move || scroll_to_section(&id), DEEP_LINK_DELAY);
        }
    });

    view! {
        <Title text="Home" />
        <DiamondBackground />
        <Header />
        <main class="relative">
            <HeroSection />
            <ScrollSection
                id="about"
                config=SectionAnimationConfig::new().fade_in().scale_in().pinned()
                z_index=2
                background_color="rgba(236, 253, 245, 0.5)"
            >
                <AboutSection />
            </ScrollSection>
            <ScrollSection
                id="profile"
                config=SectionAnimationConfig::new().parallax(0.2)
                z_index=3
                background_color="rgba(236, 253, 245, 0.7)"
            >
                <ProfileSection />
            </ScrollSection>
            <ScrollSection
                id="projects"
                config=SectionAnimationConfig::new().fade_in().scale_in()
                z_index=4
                background_color="rgba(236, 253, 245, 0.9)"
                class="py-16 flex items-center justify-center"
            >
                <ProjectsSection />
            </ScrollSection>
            <ScrollSection
                id="contact"
                config=SectionAnimationConfig::new().fade_in()
                z_index=5
                background_color="rgba(236, 253, 245, 1.0)"
            >
                <ContactSection />
            </ScrollSection>
        </main>
        <Footer />
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <div class="py-16 h-full flex items-center">
            <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 w-full">
                <div class="bg-white/80 backdrop-blur-sm rounded-xl p-8 shadow-lg">
                    <h2 class="text-3xl font-bold text-emerald-800 mb-2">"Get In Touch"</h2>
                    <p class="text-gray-600 mb-6">
                        "Have a project in mind or just want to say hello? Send me a message."
                    </p>
                    <ContactForm />
                </div>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    let built = DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    view! {
        <footer class="relative z-10 bg-emerald-900 text-emerald-100 py-8">
            <div class="max-w-7xl mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-2 text-sm">
                <p>{format!("© {year} Diamond Portfolio. All rights reserved.")}</p>
                <p class="text-emerald-300/70">{format!("Last built {built}")}</p>
            </div>
        </footer>
    }
}
