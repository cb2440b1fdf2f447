use leptos::{either::Either, prelude::*};

use crate::scroll::{self, SectionId};
use crate::theme::Theme;

use super::icons::{MenuIcon, MoonIcon, SunIcon};

#[component]
pub fn Header(theme: RwSignal<Theme>) -> impl IntoView {
    let (compact, active) = scroll::use_scroll_spy();

    let nav_links = SectionId::ALL
        .into_iter()
        .map(|section| {
            let link_class = move || {
                if active() == Some(section) {
                    "font-bold text-blue-600 dark:text-blue-400 transition-colors cursor-pointer"
                } else {
                    "text-gray-600 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors cursor-pointer"
                }
            };
            view! {
                <a
                    href=format!("#{}", section.anchor())
                    class=link_class
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll::scroll_to_section(section);
                    }
                >
                    {section.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class=move || {
            if compact() {
                "fixed w-full z-50 transition-all duration-300 bg-white dark:bg-gray-800 shadow-md py-2"
            } else {
                "fixed w-full z-50 transition-all duration-300 bg-transparent py-4"
            }
        }>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <a href="#" class="text-2xl font-bold text-blue-600 dark:text-blue-400">
                    "Eran Sevil"
                </a>

                <nav class="hidden md:flex space-x-8">{nav_links}</nav>

                <div class="flex items-center space-x-4">
                    <button
                        class="p-2 rounded-full bg-gray-200 dark:bg-gray-700 text-gray-800 dark:text-gray-200"
                        aria-label="Toggle dark mode"
                        on:click=move |_| theme.update(|t| *t = t.toggled())
                    >
                        {move || {
                            if theme().is_dark() {
                                Either::Left(view! { <SunIcon /> })
                            } else {
                                Either::Right(view! { <MoonIcon /> })
                            }
                        }}
                    </button>

                    <button class="md:hidden" aria-label="Open menu">
                        <MenuIcon />
                    </button>
                </div>
            </div>
        </header>
    }
}
