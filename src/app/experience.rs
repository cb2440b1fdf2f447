use leptos::prelude::*;

struct Position {
    title: &'static str,
    company: &'static str,
    duration: &'static str,
    highlights: &'static [&'static str],
}

const POSITIONS: &[Position] = &[
    Position {
        title: "Full-stack Developer",
        company: "Ideo Digital",
        duration: "2023 - Present",
        highlights: &[
            "Developed and deployed high-performance, scalable mobile applications using React Native, optimizing UI/UX.",
            "Managed the entire app lifecycle, including development, testing, and publication to both the App Store and Google Play.",
        ],
    },
    Position {
        title: "Full-stack Developer",
        company: "IDI Venture LTD (Fintech)",
        duration: "2021 - 2023",
        highlights: &[
            "Developed and maintained a cross-platform trading app for Crypto CFDs trading, providing real-time market data and advanced trading tools using React Native and Node.",
            "Designed, developed, and maintained a scalable CRM web application using Python (Django) and Vue.js, deployed on an AWS-hosted Ubuntu server.",
        ],
    },
    Position {
        title: "Internship",
        company: "RED HAT",
        duration: "2020 - 2021",
        highlights: &[
            "Completed a part-time internship as part of an academic excellence program, focusing on Python and AWS.",
        ],
    },
];

#[component]
pub fn Experience() -> impl IntoView {
    let timeline = POSITIONS
        .iter()
        .map(|pos| {
            let highlights = pos
                .highlights
                .iter()
                .map(|item| {
                    view! { <li class="text-gray-600 dark:text-gray-300">{*item}</li> }
                })
                .collect_view();
            view! {
                <div class="mb-10 relative pl-8 border-l-2 border-blue-600 dark:border-blue-400 section-content">
                    <div class="absolute -left-[9px] top-0 w-4 h-4 bg-blue-600 dark:bg-blue-400 rounded-full"></div>
                    <h3 class="text-xl font-bold text-gray-800 dark:text-white">{pos.title}</h3>
                    <div class="flex items-center mb-2">
                        <h4 class="text-lg text-blue-600 dark:text-blue-400">{pos.company}</h4>
                        <span class="mx-2 text-gray-400">"•"</span>
                        <span class="text-gray-600 dark:text-gray-300">{pos.duration}</span>
                    </div>
                    <ul class="space-y-2">{highlights}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="experience" class="py-20 bg-white dark:bg-gray-800">
            <div class="container mx-auto px-6">
                <div class="mb-16 text-center section-content">
                    <h2 class="text-3xl font-bold text-gray-800 dark:text-white mb-2">
                        "Experience"
                    </h2>
                    <div class="w-20 h-1 bg-blue-600 dark:bg-blue-400 mx-auto mb-4"></div>
                </div>

                <div class="max-w-3xl mx-auto">{timeline}</div>

                <div class="mt-16 bg-gray-50 dark:bg-gray-700 p-8 rounded-lg shadow-md section-content">
                    <h3 class="text-xl font-bold text-gray-800 dark:text-white mb-4">
                        "Education"
                    </h3>
                    <div class="space-y-4">
                        <div>
                            <h4 class="text-lg font-semibold text-blue-600 dark:text-blue-400">
                                "B.Sc. Information System"
                            </h4>
                            <p class="text-gray-600 dark:text-gray-300">
                                "The Academic College of Tel Aviv | GPA 86.5 | 2017 - 2020"
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
