use leptos::{ev::SubmitEvent, prelude::*};

use crate::mailto::{self, ContactField, ContactFormDraft};

use super::icons::{MailIcon, PhoneIcon};

#[component]
pub fn Contact() -> impl IntoView {
    let draft = RwSignal::new(ContactFormDraft::default());

    let edit = move |field: ContactField| {
        move |ev: web_sys::Event| draft.update(|d| d.set(field, event_target_value(&ev)))
    };

    // Delivery is the mail client's problem; we only hand over the URI.
    let send = move |_| {
        let uri = draft.with(|d| mailto::mailto_uri(mailto::CONTACT_ADDRESS, d));
        if let Err(err) = window().location().set_href(&uri) {
            log::warn!("failed to open mail client: {err:?}");
        }
    };

    view! {
        <section id="contact" class="py-20 bg-gray-50 dark:bg-gray-900">
            <div class="container mx-auto px-6">
                <div class="mb-16 text-center section-content">
                    <h2 class="text-3xl font-bold text-gray-800 dark:text-white mb-2">
                        "Get In Touch"
                    </h2>
                    <div class="w-20 h-1 bg-blue-600 dark:bg-blue-400 mx-auto mb-4"></div>
                    <p class="max-w-2xl mx-auto text-gray-600 dark:text-gray-300">
                        "Feel free to reach out if you're looking for a developer, have a question, or just want to connect."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                    <div class="bg-white dark:bg-gray-800 p-8 rounded-lg shadow-md section-content">
                        <h3 class="text-xl font-bold text-gray-800 dark:text-white mb-6">
                            "Send Me a Message"
                        </h3>
                        <form on:submit=|ev: SubmitEvent| ev.prevent_default() class="space-y-4">
                            <div>
                                <label
                                    for="name"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1"
                                >
                                    "Name"
                                </label>
                                <input
                                    type="text"
                                    name="name"
                                    id="name"
                                    placeholder="Your name"
                                    prop:value=move || draft.with(|d| d.name.clone())
                                    on:input=edit(ContactField::Name)
                                    class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-600 dark:bg-gray-700 dark:text-white"
                                />
                            </div>
                            <div>
                                <label
                                    for="email"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1"
                                >
                                    "Email"
                                </label>
                                <input
                                    type="email"
                                    name="email"
                                    id="email"
                                    placeholder="your.email@example.com"
                                    prop:value=move || draft.with(|d| d.email.clone())
                                    on:input=edit(ContactField::Email)
                                    class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-600 dark:bg-gray-700 dark:text-white"
                                />
                            </div>
                            <div>
                                <label
                                    for="message"
                                    class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1"
                                >
                                    "Message"
                                </label>
                                <textarea
                                    name="message"
                                    id="message"
                                    rows="5"
                                    placeholder="Your message here..."
                                    prop:value=move || draft.with(|d| d.message.clone())
                                    on:input=edit(ContactField::Message)
                                    class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-600 dark:bg-gray-700 dark:text-white"
                                ></textarea>
                            </div>
                            <button
                                type="button"
                                on:click=send
                                class="px-6 py-3 bg-blue-600 text-white rounded-md font-medium hover:bg-blue-700 transition-colors w-full hover-grow"
                            >
                                "Send Message"
                            </button>
                        </form>
                    </div>

                    <div class="flex flex-col justify-between section-content">
                        <div class="bg-white dark:bg-gray-800 p-8 rounded-lg shadow-md mb-6">
                            <h3 class="text-xl font-bold text-gray-800 dark:text-white mb-6">
                                "Contact Information"
                            </h3>
                            <div class="space-y-4">
                                <div class="flex items-start">
                                    <div class="p-2 bg-blue-100 dark:bg-blue-900 rounded-md mr-4">
                                        <MailIcon />
                                    </div>
                                    <div>
                                        <h4 class="text-sm font-medium text-gray-500 dark:text-gray-400">
                                            "Email"
                                        </h4>
                                        <a
                                            href="mailto:eransevil2@gmail.com"
                                            class="text-gray-800 dark:text-white hover:text-blue-600 dark:hover:text-blue-400"
                                        >
                                            "eransevil2@gmail.com"
                                        </a>
                                    </div>
                                </div>
                                <div class="flex items-start">
                                    <div class="p-2 bg-blue-100 dark:bg-blue-900 rounded-md mr-4">
                                        <PhoneIcon />
                                    </div>
                                    <div>
                                        <h4 class="text-sm font-medium text-gray-500 dark:text-gray-400">
                                            "Phone"
                                        </h4>
                                        <a
                                            href="tel:+972548117613"
                                            class="text-gray-800 dark:text-white hover:text-blue-600 dark:hover:text-blue-400"
                                        >
                                            "054-8117613"
                                        </a>
                                    </div>
                                </div>
                            </div>
                            <div class="mt-8">
                                <h4 class="text-lg font-medium text-gray-800 dark:text-white mb-4">
                                    "Connect With Me"
                                </h4>
                                <div class="flex space-x-4">
                                    <a
                                        href="https://github.com/eransevil"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label="GitHub Profile"
                                        class="p-3 bg-gray-100 dark:bg-gray-700 rounded-full text-gray-800 dark:text-white hover:bg-blue-100 dark:hover:bg-blue-900 transition-colors hover-grow"
                                    >
                                        <i class="devicon-github-plain"></i>
                                    </a>
                                    <a
                                        href="https://www.linkedin.com/in/eran-sevil-68ba43171/"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label="LinkedIn Profile"
                                        class="p-3 bg-gray-100 dark:bg-gray-700 rounded-full text-gray-800 dark:text-white hover:bg-blue-100 dark:hover:bg-blue-900 transition-colors hover-grow"
                                    >
                                        <i class="devicon-linkedin-plain"></i>
                                    </a>
                                    <a
                                        href="mailto:eransevil2@gmail.com"
                                        aria-label="Email"
                                        class="p-3 bg-gray-100 dark:bg-gray-700 rounded-full text-gray-800 dark:text-white hover:bg-blue-100 dark:hover:bg-blue-900 transition-colors hover-grow"
                                    >
                                        <MailIcon />
                                    </a>
                                </div>
                            </div>
                        </div>

                        <div class="bg-blue-600 p-8 rounded-lg shadow-md text-white text-center hover-grow">
                            <h3 class="text-xl font-bold mb-2">"Looking for a developer?"</h3>
                            <p class="mb-4">"I'm currently available for freelance work."</p>
                            <a
                                href="https://wa.me/548117613?text=Hello,%20I'm%20interested%20in%20working%20together!"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-block px-6 py-2 bg-white text-blue-600 rounded-md font-medium hover:bg-gray-100 transition-colors"
                            >
                                "Let's Work Together"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
