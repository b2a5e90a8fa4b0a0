use leptos::prelude::*;

use crate::content::STATS;

#[component]
pub fn StatsBand() -> impl IntoView {
    view! {
        <section class="py-16 bg-gradient-to-r from-blue-600 to-indigo-700">
            <div class="container mx-auto px-6">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center text-white">
                                    <div class="text-4xl mb-3">{stat.icon}</div>
                                    <div class="text-3xl md:text-4xl font-bold mb-2">{stat.number}</div>
                                    <div class="text-blue-100">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
