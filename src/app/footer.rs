use leptos::prelude::*;

// Stamped by build.rs so the copyright line never goes stale.
const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-1 bg-gray-800 dark:bg-gray-950 text-white">
            <div class="container mx-auto px-6">
                <div class="my-4 text-center">
                    <p class="text-gray-400">
                        {format!("Copyright © {BUILD_YEAR} - Crafted by Eran Sevil")}
                    </p>
                </div>
            </div>
        </footer>
    }
}
