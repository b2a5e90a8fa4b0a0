use leptos::prelude::*;

use crate::content::{
    CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, FOOTER_LEGAL, FOOTER_PLATFORM, FOOTER_RESOURCES, NavLink,
    SOCIAL_LINKS,
};
use crate::util::clock::current_year;

fn link_list(links: &'static [NavLink]) -> impl IntoView {
    view! {
        <ul class="space-y-3">
            {links
                .iter()
                .map(|link| {
                    view! {
                        <li>
                            <a href=link.href class="hover:text-blue-400 transition-colors">{link.label}</a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="bg-gray-900 text-gray-300 pt-16 pb-8 border-t border-gray-800">
            <div class="container mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-12 mb-12">
                    <div>
                        <a href="/" class="text-2xl font-bold text-white flex items-center gap-2 mb-4">
                            <span class="bg-blue-600 text-white p-1 rounded-lg">"DH"</span>
                            "DevHire"
                        </a>
                        <p class="text-gray-400 mb-6 leading-relaxed">
                            "Connecting the world's best companies with top-tier tech talent. Hiring made human, intelligent, and fast."
                        </p>
                        <div class="flex gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            class="px-3 py-2 bg-gray-800 rounded-full text-xs hover:bg-blue-600 hover:text-white transition-all"
                                        >
                                            {social.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4 class="text-white font-semibold mb-6">"Platform"</h4>
                        {link_list(FOOTER_PLATFORM)}
                    </div>

                    <div>
                        <h4 class="text-white font-semibold mb-6">"Resources"</h4>
                        {link_list(FOOTER_RESOURCES)}
                    </div>

                    <div>
                        <h4 class="text-white font-semibold mb-6">"Contact Us"</h4>
                        <ul class="space-y-4">
                            <li class="flex items-start gap-3">
                                <span class="text-blue-500">"⌖"</span>
                                <span>{CONTACT_ADDRESS[0]} <br/> {CONTACT_ADDRESS[1]}</span>
                            </li>
                            <li class="flex items-center gap-3">
                                <span class="text-blue-500">"☎"</span>
                                <span>{CONTACT_PHONE}</span>
                            </li>
                            <li class="flex items-center gap-3">
                                <span class="text-blue-500">"✉"</span>
                                <a href=format!("mailto:{CONTACT_EMAIL}") class="hover:text-blue-400">{CONTACT_EMAIL}</a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="border-t border-gray-800 pt-8 flex flex-col md:flex-row justify-between items-center gap-4 text-sm">
                    <p>{format!("© {year} DevHire Inc. All rights reserved.")}</p>
                    <div class="flex gap-6">
                        {FOOTER_LEGAL
                            .iter()
                            .map(|link| view! { <a href=link.href class="hover:text-white transition-colors">{link.label}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
