use leptos::prelude::*;

use super::avatar::Avatar;

const DEFAULT_SKILLS: &[&str] = &[
    "Rust",
    "Leptos",
    "WebAssembly",
    "TypeScript",
    "Tailwind CSS",
    "Network Security",
    "Responsive Design",
    "API Integration",
];

#[component]
pub fn AboutSection(
    #[prop(default = "About Me")] title: &'static str,
    #[prop(
        default = "I'm a developer who enjoys building fast, accessible web applications and the systems behind them."
    )]
    description: &'static str,
    #[prop(default = DEFAULT_SKILLS)] skills: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="py-16 bg-white/80 backdrop-blur-sm h-full flex items-center">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 w-full">
                <div class="bg-white/80 backdrop-blur-sm rounded-xl p-8 shadow-lg">
                    <h2 class="text-3xl font-bold text-emerald-800 mb-6">{title}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <div>
                            <p class="text-gray-700 mb-6 leading-relaxed">{description}</p>
                            <p class="text-gray-700 mb-6 leading-relaxed">
                                "With a background in computer science and security, I like working where correctness and product value meet: secure network design, scalable SaaS platforms and the tooling that keeps them honest."
                            </p>
                        </div>
                        <div>
                            <h3 class="text-xl font-semibold text-emerald-700 mb-4">
                                "Skills & Expertise"
                            </h3>
                            <div class="flex flex-wrap gap-2">
                                {skills
                                    .iter()
                                    .enumerate()
                                    .map(|(i, skill)| {
                                        view! {
                                            <span
                                                class="px-3 py-1 bg-emerald-100 text-emerald-800 rounded-full text-sm font-medium pop-in"
                                                style=format!("animation-delay: {}ms;", i * 100)
                                            >
                                                {*skill}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ExpertiseCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white/70 backdrop-blur-sm p-4 rounded-lg shadow-md border border-emerald-100 text-left">
            <div class="flex items-center gap-3 mb-2">
                <span class="text-emerald-500 text-xl">{icon}</span>
                <h3 class="font-semibold text-emerald-800">{title}</h3>
            </div>
            <p class="text-sm text-gray-700">{description}</p>
        </div>
    }
}

#[component]
pub fn ProfileSection() -> impl IntoView {
    let links = [
        ("GitHub", "https://github.com"),
        ("Twitter", "https://twitter.com"),
        ("LinkedIn", "https://linkedin.com"),
    ];
    view! {
        <div class="p-6 bg-emerald-50 min-h-full">
            <div class="max-w-4xl mx-auto text-center pt-16">
                <div class="mb-6 fade-down">
                    <Avatar src="/avatar.png" name="John Doe" />
                    <h2 class="text-3xl font-bold text-emerald-700">"John Doe"</h2>
                    <p class="text-gray-600">"Software Engineer & AI Enthusiast"</p>
                    <div class="flex justify-center gap-4 mt-4 text-emerald-600">
                        {links
                            .into_iter()
                            .map(|(label, href)| {
                                view! {
                                    <a href=href target="_blank" rel="noopener noreferrer">
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 fade-in">
                    <ExpertiseCard
                        icon="🎓"
                        title="Education"
                        description="Bachelor's in Computer Science"
                    />
                    <ExpertiseCard
                        icon="💼"
                        title="Experience"
                        description="2+ years in full-stack development"
                    />
                    <ExpertiseCard
                        icon="🛡"
                        title="Cybersecurity"
                        description="Hands-on in network defense & risk assessment"
                    />
                    <ExpertiseCard
                        icon="⌨"
                        title="Coding"
                        description="Rust, TypeScript, Python, C++ and RISC-V"
                    />
                    <ExpertiseCard
                        icon="🌐"
                        title="Vision"
                        description="Global tech impact via AI & entrepreneurship"
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <div class="bg-white/80 backdrop-blur-sm rounded-xl p-8 shadow-lg max-w-7xl mx-auto w-full">
            <h2 class="text-3xl font-bold text-emerald-800 mb-8">"Featured Projects"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {(1..=3)
                    .map(|n| {
                        view! {
                            <div
                                class="bg-white rounded-lg overflow-hidden shadow-md hover:shadow-xl hover:-translate-y-1 transition-all duration-300 fade-up"
                                style=format!("animation-delay: {}ms;", (n - 1) * 100)
                            >
                                <div class="h-48 bg-gradient-to-br from-emerald-500 to-amber-500"></div>
                                <div class="p-6">
                                    <h3 class="text-xl font-semibold text-emerald-800 mb-2">
                                        {format!("Project {n}")}
                                    </h3>
                                    <p class="text-gray-600 mb-4">
                                        "A short description of the project and the technologies used to build it."
                                    </p>
                                    <a href="#" class="text-amber-600 hover:text-amber-700 font-medium">
                                        "View Details →"
                                    </a>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
