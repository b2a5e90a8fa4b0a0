//! Closing call-to-action section.

use leptos::prelude::*;

#[component]
pub fn CtaSection(on_demo: Callback<()>) -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-br from-gray-50 to-white dark:from-gray-900 dark:to-gray-950">
            <div class="container mx-auto px-6 text-center">
                <div class="max-w-3xl mx-auto">
                    <div class="inline-flex items-center gap-2 bg-blue-100 text-blue-700 px-4 py-1.5 rounded-full text-sm font-medium mb-6">
                        <span class="w-2 h-2 bg-blue-600 rounded-full"></span>
                        "START YOUR JOURNEY"
                    </div>
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-6">
                        "Ready to find your next " <span class="text-blue-600">"rockstar developer"</span> "?"
                    </h2>
                    <p class="text-xl text-gray-700 dark:text-gray-300 mb-10">
                        "Join thousands of companies that trust DevHire for their tech hiring needs."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href="/register"
                            class="bg-gradient-to-r from-blue-600 to-indigo-600 text-white px-10 py-4 rounded-xl font-bold text-lg hover:from-blue-700 hover:to-indigo-700 transition-all duration-300 shadow-xl hover:shadow-2xl hover:-translate-y-1"
                        >
                            "Start Free Trial"
                        </a>
                        <button
                            class="bg-white dark:bg-gray-800 text-gray-800 dark:text-gray-100 px-10 py-4 rounded-xl font-bold text-lg border-2 border-gray-300 dark:border-gray-700 hover:border-blue-400 hover:bg-blue-50 transition-all duration-300 shadow-lg hover:shadow-xl"
                            on:click=move |_| on_demo.run(())
                        >
                            "Schedule a Demo"
                        </button>
                    </div>

                    <div class="mt-8 text-gray-600 dark:text-gray-400 text-sm">
                        "No credit card required • 14-day free trial • Cancel anytime"
                    </div>
                </div>
            </div>
        </section>
    }
}
