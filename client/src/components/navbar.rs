//! Top navigation bar with mobile menu and theme toggle.

use leptos::prelude::*;

use crate::content::NAV_LINKS;
use crate::util::dark_mode;

#[component]
pub fn Navbar(on_contact: Callback<()>) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let dark = RwSignal::new(false);

    Effect::new(move || {
        let preferred = dark_mode::read_preference();
        dark_mode::apply(preferred);
        dark.set(preferred);
    });

    let on_toggle_theme = move |_| dark.update(|d| *d = dark_mode::toggle(*d));
    let on_contact_click = move |_| {
        menu_open.set(false);
        on_contact.run(());
    };

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|link| {
                view! {
                    <a
                        href=link.href
                        class="text-gray-700 dark:text-gray-300 hover:text-blue-600 font-medium transition-colors"
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="sticky top-0 z-40 bg-white/80 dark:bg-gray-950/80 backdrop-blur border-b border-gray-100 dark:border-gray-800">
            <div class="container mx-auto px-6 h-16 flex items-center justify-between">
                <a href="/" class="text-2xl font-bold text-gray-900 dark:text-white flex items-center gap-2">
                    <span class="bg-blue-600 text-white p-1 rounded-lg">"DH"</span>
                    "DevHire"
                </a>

                <div class="hidden md:flex items-center gap-8">{links}</div>

                <div class="hidden md:flex items-center gap-4">
                    <button
                        class="p-2 rounded-full text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
                        title="Toggle dark mode"
                        on:click=on_toggle_theme
                    >
                        {move || if dark.get() { "☀" } else { "☾" }}
                    </button>
                    <button class="text-gray-700 dark:text-gray-300 hover:text-blue-600 font-medium" on:click=on_contact_click>
                        "Contact Sales"
                    </button>
                    <a href="/login" class="text-gray-700 dark:text-gray-300 hover:text-blue-600 font-medium">"Log in"</a>
                    <a
                        href="/register"
                        class="bg-blue-600 text-white px-5 py-2 rounded-lg font-semibold hover:bg-blue-700 transition-colors"
                    >
                        "Sign up"
                    </a>
                </div>

                <button
                    class="md:hidden p-2 text-gray-700 dark:text-gray-300"
                    aria-label="Toggle menu"
                    aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden px-6 pb-6 flex flex-col gap-4 border-t border-gray-100 dark:border-gray-800">
                    {links}
                    <button class="text-left text-gray-700 dark:text-gray-300 font-medium" on:click=on_contact_click>
                        "Contact Sales"
                    </button>
                    <button class="text-left text-gray-700 dark:text-gray-300 font-medium" on:click=on_toggle_theme>
                        {move || if dark.get() { "Light mode" } else { "Dark mode" }}
                    </button>
                    <a href="/login" class="text-gray-700 dark:text-gray-300 font-medium">"Log in"</a>
                    <a href="/register" class="bg-blue-600 text-white px-5 py-2 rounded-lg font-semibold text-center">
                        "Sign up"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
