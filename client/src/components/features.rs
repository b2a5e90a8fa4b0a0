//! Feature grid and "how it works" steps.

use leptos::prelude::*;

use crate::content::{FEATURES, HOW_IT_WORKS};

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-20 bg-gradient-to-b from-white to-gray-50 dark:from-gray-950 dark:to-gray-900">
            <div class="container mx-auto px-6">
                <div class="text-center max-w-3xl mx-auto">
                    <div class="inline-flex items-center gap-2 bg-blue-100 text-blue-700 px-4 py-1.5 rounded-full text-sm font-medium mb-4">
                        <span class="w-2 h-2 bg-blue-600 rounded-full"></span>
                        "POWERFUL FEATURES"
                    </div>
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white">
                        "Why Choose " <span class="text-blue-600">"DevHire"</span> "?"
                    </h2>
                    <p class="mt-4 text-lg text-gray-700 dark:text-gray-300">
                        "We make hiring developers smarter, faster, and more efficient with cutting-edge technology."
                    </p>
                </div>

                <div class="mt-16 grid gap-8 md:grid-cols-3">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="bg-white dark:bg-gray-900 p-8 rounded-2xl shadow-lg border border-gray-100 dark:border-gray-800 hover:shadow-xl hover:-translate-y-1 transition-all duration-300">
                                    <div class="w-14 h-14 bg-blue-100 dark:bg-blue-900/40 rounded-xl flex items-center justify-center text-3xl mb-6">
                                        {feature.icon}
                                    </div>
                                    <h3 class="text-xl font-semibold text-gray-900 dark:text-white mb-3">{feature.title}</h3>
                                    <p class="text-gray-600 dark:text-gray-400 leading-relaxed">{feature.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn HowItWorksSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-white dark:bg-gray-950">
            <div class="container mx-auto px-6">
                <h2 class="text-3xl md:text-4xl font-bold text-center text-gray-900 dark:text-white mb-16">
                    "How it " <span class="text-blue-600">"works"</span>
                </h2>
                <ol class="grid gap-8 md:grid-cols-3">
                    {HOW_IT_WORKS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <li class="text-center">
                                    <div class="mx-auto w-12 h-12 rounded-full bg-gradient-to-r from-blue-600 to-indigo-600 text-white font-bold flex items-center justify-center mb-4">
                                        {index + 1}
                                    </div>
                                    <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{step.title}</h3>
                                    <p class="mt-2 text-gray-600 dark:text-gray-400">{step.body}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
