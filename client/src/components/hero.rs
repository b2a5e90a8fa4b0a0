//! Hero section: headline, calls to action, trust badges and the image carousel.

use leptos::prelude::*;

use crate::components::image_carousel::ImageCarousel;
use crate::content::{HERO_IMAGES, TRUST_BADGES};

#[component]
pub fn Hero(on_demo: Callback<()>) -> impl IntoView {
    let badges = TRUST_BADGES
        .iter()
        .enumerate()
        .map(|(index, badge)| {
            let delay = format!("animation-delay: {}ms", index * 200);
            let underline = format!(
                "absolute -bottom-1 left-0 w-0 group-hover:w-full h-0.5 {} transition-all duration-300",
                badge.accent
            );
            view! {
                {(index > 0).then(|| view! {
                    <div class="h-8 w-px bg-gradient-to-b from-transparent via-gray-300 to-transparent animate-pulse"></div>
                })}
                <div class="text-center animate-fade-in hover:scale-105 transition-transform duration-300" style=delay>
                    <div class="text-2xl font-bold text-gray-900 dark:text-white relative group">
                        {badge.value}
                        {badge.flourish.map(|mark| view! {
                            <span class="absolute -top-1 -right-3 text-xs animate-bounce">{mark}</span>
                        })}
                        <div class=underline></div>
                    </div>
                    <div class="text-sm text-gray-600 dark:text-gray-400 mt-1">{badge.label}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="bg-gradient-to-br from-blue-50 via-white to-indigo-50 dark:from-gray-900 dark:via-gray-950 dark:to-gray-900 py-20 md:py-28">
            <div class="container mx-auto px-6 flex flex-col-reverse md:flex-row items-center gap-12">
                <div class="w-full md:w-1/2 text-center md:text-left">
                    <h1 class="text-4xl md:text-6xl font-bold text-gray-900 dark:text-white leading-tight">
                        "Hire the Best Tech Talent with "
                        <span class="bg-gradient-to-r from-blue-600 to-indigo-600 bg-clip-text text-transparent">
                            "DevHire"
                        </span>
                    </h1>
                    <p class="mt-6 text-lg text-gray-700 dark:text-gray-300">
                        "DevHire helps you find, assess, and hire top developers faster with AI-powered matching and integrated coding tests."
                    </p>

                    <div class="mt-10 flex justify-center md:justify-start gap-4">
                        <a
                            href="/register"
                            class="bg-gradient-to-r from-blue-600 to-indigo-600 text-white px-8 py-3.5 rounded-lg font-semibold hover:from-blue-700 hover:to-indigo-700 transition-all duration-300 shadow-lg hover:shadow-xl"
                        >
                            "Get Started Free"
                        </a>
                        <button
                            class="bg-white dark:bg-gray-800 text-gray-800 dark:text-gray-100 px-8 py-3.5 rounded-lg font-semibold border-2 border-gray-200 dark:border-gray-700 hover:border-blue-300 hover:bg-blue-50 transition-all duration-300 shadow hover:shadow-md"
                            on:click=move |_| on_demo.run(())
                        >
                            "Watch Demo"
                        </button>
                    </div>

                    <div class="mt-12 flex items-center justify-center md:justify-start gap-6">{badges}</div>
                </div>

                <div class="w-full md:w-1/2">
                    <div class="relative">
                        <div class="absolute -top-4 -right-4 w-64 h-64 bg-gradient-to-r from-blue-400 to-indigo-400 rounded-full mix-blend-multiply filter blur-xl opacity-20 animate-pulse"></div>
                        <div class="absolute -bottom-8 -left-8 w-72 h-72 bg-gradient-to-r from-blue-300 to-indigo-300 rounded-full mix-blend-multiply filter blur-xl opacity-20 animate-pulse"></div>

                        <ImageCarousel images=HERO_IMAGES/>

                        <div class="absolute -bottom-6 -right-6 z-30 bg-white dark:bg-gray-900 p-4 rounded-xl shadow-lg border border-gray-200 dark:border-gray-800 animate-float">
                            <div class="flex items-center gap-3">
                                <div class="w-10 h-10 bg-green-100 rounded-lg flex items-center justify-center animate-pulse">
                                    <span class="text-green-600 text-xl">"✓"</span>
                                </div>
                                <div>
                                    <div class="font-semibold text-gray-900 dark:text-white">"AI Match Found!"</div>
                                    <div class="text-sm text-gray-600 dark:text-gray-400">"Perfect candidate"</div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
