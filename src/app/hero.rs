use leptos::prelude::*;

use crate::scroll::{self, SectionId};

/// Preset geometry for the drifting backdrop circles: diameter (px),
/// position (% of the hero), and animation timing (s). A fixed table keeps
/// server and client renders identical.
struct DriftShape {
    size: u32,
    top: u32,
    left: u32,
    duration: u32,
    delay: u32,
}

const DRIFT_SHAPES: &[DriftShape] = &[
    DriftShape { size: 240, top: 8, left: 4, duration: 26, delay: 0 },
    DriftShape { size: 120, top: 64, left: 12, duration: 22, delay: 3 },
    DriftShape { size: 320, top: 30, left: 28, duration: 29, delay: 7 },
    DriftShape { size: 90, top: 78, left: 38, duration: 24, delay: 1 },
    DriftShape { size: 180, top: 12, left: 52, duration: 27, delay: 5 },
    DriftShape { size: 260, top: 55, left: 61, duration: 21, delay: 9 },
    DriftShape { size: 70, top: 22, left: 74, duration: 28, delay: 2 },
    DriftShape { size: 150, top: 70, left: 82, duration: 23, delay: 6 },
    DriftShape { size: 300, top: 40, left: 90, duration: 30, delay: 4 },
    DriftShape { size: 110, top: 5, left: 95, duration: 25, delay: 8 },
];

#[component]
pub fn Hero() -> impl IntoView {
    let shapes = DRIFT_SHAPES
        .iter()
        .map(|s| {
            view! {
                <div
                    class="hero-shape absolute rounded-full bg-blue-500 dark:bg-blue-600 opacity-10"
                    style=format!(
                        "width: {}px; height: {}px; top: {}%; left: {}%; animation-duration: {}s; animation-delay: {}s",
                        s.size, s.size, s.top, s.left, s.duration, s.delay,
                    )
                ></div>
            }
        })
        .collect_view();

    view! {
        <section id="home" class="relative h-screen flex items-center">
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-br from-blue-50 to-purple-100 dark:from-gray-800 dark:to-blue-900"></div>
                {shapes}
            </div>

            <div class="container mx-auto px-6 z-10">
                <div class="max-w-3xl section-content">
                    <h1 class="text-5xl md:text-7xl font-bold text-gray-800 dark:text-white mb-4">
                        "Eran Sevil"
                    </h1>
                    <h3 class="text-2xl md:text-3xl font-medium text-gray-600 dark:text-gray-300 mb-8">
                        "Full-Stack Developer"
                    </h3>
                    <p class="text-lg text-gray-600 dark:text-gray-300 mb-8 max-w-2xl">
                        "Full-stack Developer who transforms ideas into stunning cross-platform applications"
                    </p>
                    <div class="flex space-x-4">
                        <a
                            href="#contact"
                            class="px-6 py-3 border border-blue-600 text-blue-600 dark:text-blue-400 dark:border-blue-400 hover:bg-blue-50 dark:hover:bg-blue-900/30 rounded-md font-medium transition-colors hover-grow"
                            on:click=move |ev| {
                                ev.prevent_default();
                                scroll::scroll_to_section(SectionId::Contact);
                            }
                        >
                            "Contact Me"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
