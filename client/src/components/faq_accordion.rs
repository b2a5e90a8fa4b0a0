//! Single-select FAQ accordion.

use leptos::prelude::*;

use crate::content::Faq;
use crate::state::accordion::AccordionState;
use crate::util::markdown::render_html;

#[component]
pub fn FaqAccordion(items: &'static [Faq]) -> impl IntoView {
    let accordion = RwSignal::new(AccordionState::new(items.len()));

    let panels = items
        .iter()
        .enumerate()
        .map(|(index, faq)| {
            let open = move || accordion.with(|a| a.is_open(index));
            let answer_html = render_html(faq.answer);
            view! {
                <div class="border border-gray-200 dark:border-gray-800 rounded-xl overflow-hidden bg-white dark:bg-gray-900">
                    <button
                        class="w-full flex items-center justify-between gap-4 px-6 py-5 text-left font-semibold text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800 transition-colors"
                        aria-expanded=move || if open() { "true" } else { "false" }
                        on:click=move |_| accordion.update(|a| a.toggle(index))
                    >
                        <span>{faq.question}</span>
                        <span class=move || {
                            if open() {
                                "text-blue-600 transition-transform duration-300 rotate-180"
                            } else {
                                "text-gray-400 transition-transform duration-300"
                            }
                        }>"⌄"</span>
                    </button>
                    <div class=move || {
                        if open() {
                            "grid grid-rows-[1fr] opacity-100 transition-all duration-300"
                        } else {
                            "grid grid-rows-[0fr] opacity-0 transition-all duration-300"
                        }
                    }>
                        <div class="overflow-hidden">
                            <div
                                class="px-6 pb-5 text-gray-700 dark:text-gray-300 leading-relaxed [&_a]:text-blue-600 [&_a]:underline"
                                inner_html=answer_html
                            ></div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="faq" class="py-20 bg-gradient-to-b from-gray-50 to-white dark:from-gray-900 dark:to-gray-950">
            <div class="container mx-auto px-6 max-w-3xl">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white">
                        "Frequently Asked " <span class="text-blue-600">"Questions"</span>
                    </h2>
                </div>
                <div class="space-y-4">{panels}</div>
            </div>
        </section>
    }
}
