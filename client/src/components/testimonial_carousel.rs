//! Manually navigated testimonial slider.

use leptos::prelude::*;

use crate::content::Testimonial;
use crate::state::carousel::IndexRing;

const MAX_RATING: usize = 5;

#[component]
pub fn TestimonialCarousel(items: &'static [Testimonial]) -> impl IntoView {
    let Ok(initial) = IndexRing::new(items.len()) else {
        return ().into_any();
    };
    let ring = RwSignal::new(initial);

    let current = move || items.get(ring.with(IndexRing::current));

    let dots = (0..items.len())
        .map(|index| {
            view! {
                <button
                    class=move || {
                        if ring.with(|r| r.is_current(index)) {
                            "h-2.5 w-8 rounded-full bg-blue-600 transition-all duration-300"
                        } else {
                            "h-2.5 w-2.5 rounded-full bg-gray-300 hover:bg-gray-400 dark:bg-gray-600 transition-all duration-300"
                        }
                    }
                    aria-label=format!("Show testimonial {}", index + 1)
                    on:click=move |_| {
                        ring.update(|r| {
                            let _ = r.jump_to(index);
                        });
                    }
                ></button>
            }
        })
        .collect_view();

    view! {
        <section class="py-20 bg-white dark:bg-gray-950">
            <div class="container mx-auto px-6">
                <div class="text-center max-w-3xl mx-auto mb-12">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white">
                        "Loved by " <span class="text-blue-600">"hiring teams"</span>
                    </h2>
                </div>
                <div class="relative max-w-3xl mx-auto">
                    <button
                        class="absolute -left-4 md:-left-12 top-1/2 -translate-y-1/2 w-10 h-10 rounded-full bg-white dark:bg-gray-800 shadow flex items-center justify-center text-gray-700 dark:text-gray-200 hover:bg-blue-50"
                        aria-label="Previous testimonial"
                        on:click=move |_| ring.update(IndexRing::retreat)
                    >
                        "‹"
                    </button>
                    {move || {
                        current()
                            .map(|t| {
                                let rating = usize::from(t.rating).min(MAX_RATING);
                                view! {
                                    <figure class="bg-gray-50 dark:bg-gray-900 rounded-2xl p-8 md:p-12 shadow-lg text-center animate-fade-in">
                                        <div class="text-yellow-400 text-xl mb-4" aria-label=format!("{rating} out of {MAX_RATING} stars")>
                                            {"★".repeat(rating)}
                                            <span class="text-gray-300">{"☆".repeat(MAX_RATING - rating)}</span>
                                        </div>
                                        <blockquote class="text-xl text-gray-700 dark:text-gray-200 leading-relaxed">
                                            {format!("\u{201c}{}\u{201d}", t.quote)}
                                        </blockquote>
                                        <figcaption class="mt-8 flex items-center justify-center gap-4">
                                            <img src=t.avatar alt=t.author class="w-12 h-12 rounded-full object-cover"/>
                                            <div class="text-left">
                                                <div class="font-semibold text-gray-900 dark:text-white">{t.author}</div>
                                                <div class="text-sm text-gray-600 dark:text-gray-400">
                                                    {format!("{}, {}", t.role, t.company)}
                                                </div>
                                            </div>
                                        </figcaption>
                                    </figure>
                                }
                            })
                    }}
                    <button
                        class="absolute -right-4 md:-right-12 top-1/2 -translate-y-1/2 w-10 h-10 rounded-full bg-white dark:bg-gray-800 shadow flex items-center justify-center text-gray-700 dark:text-gray-200 hover:bg-blue-50"
                        aria-label="Next testimonial"
                        on:click=move |_| ring.update(IndexRing::advance)
                    >
                        "›"
                    </button>
                </div>
                <div class="mt-8 flex justify-center gap-2">{dots}</div>
            </div>
        </section>
    }
    .into_any()
}
