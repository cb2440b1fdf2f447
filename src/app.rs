mod about;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod icons;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::theme::{apply_to_document, Theme};

use self::{
    about::About, contact::Contact, experience::Experience, footer::Footer, header::Header,
    hero::Hero,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-gray-50 dark:bg-gray-900 transition-colors duration-300">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // The theme lives here and is handed down to the header; an effect
    // mirrors it onto the document root so `dark:` selectors apply.
    let theme = RwSignal::new(Theme::default());
    Effect::new(move |_| apply_to_document(theme()));

    view! {
        // sets the document title
        <Title formatter=|title| format!("Eran Sevil - {title}") />
        <Meta
            name="description"
            content="Portfolio of Eran Sevil, a full-stack developer building cross-platform applications."
        />

        <Router>
            <Header theme />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Full-Stack Developer" />
        <Hero />
        <About />
        <Experience />
        <Contact />
    }
}
