//! Hero image carousel with autoplay.
//!
//! All slides stay mounted and cross-fade via opacity so switching never
//! waits on an image load. The autoplay interval lives in an
//! [`IntervalSlot`](crate::util::interval::IntervalSlot): it is created when
//! playback starts, dropped when it pauses, and dropped again on unmount.

use leptos::prelude::*;

use crate::content::HeroImage;
use crate::state::carousel::{CarouselError, CarouselState};

const SLIDE_BASE: &str = "absolute inset-0 transition-opacity duration-1000";
const CONTROL_BUTTON: &str = "absolute z-20 w-10 h-10 bg-black/40 hover:bg-black/60 backdrop-blur-sm rounded-full flex items-center justify-center text-white transition-all duration-300 hover:scale-110";

#[component]
pub fn ImageCarousel(images: &'static [HeroImage]) -> impl IntoView {
    let Ok(initial) = CarouselState::new(images.len()) else {
        return view! { <div class="relative h-80 md:h-96 rounded-xl bg-gray-100 dark:bg-gray-800"></div> }.into_any();
    };
    let carousel = RwSignal::new(initial);

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;

        use crate::state::carousel::AUTOPLAY_PERIOD_MS;
        use crate::util::interval::IntervalSlot;

        let timer = StoredValue::new_local(IntervalSlot::<Interval>::default());
        Effect::new(move || {
            let playing = carousel.with(CarouselState::is_playing);
            timer.update_value(|slot| {
                slot.sync(playing, || {
                    Interval::new(AUTOPLAY_PERIOD_MS, move || {
                        carousel.update(|c| {
                            c.elapse(AUTOPLAY_PERIOD_MS);
                        });
                    })
                });
            });
        });
        on_cleanup(move || {
            timer.try_update_value(|slot| {
                slot.cancel();
            });
        });
    }

    let is_playing = move || carousel.with(CarouselState::is_playing);

    let slides = images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let active = move || carousel.with(|c| c.ring().is_current(index));
            view! {
                <div
                    class=move || {
                        if active() {
                            format!("{SLIDE_BASE} opacity-100 z-10")
                        } else {
                            format!("{SLIDE_BASE} opacity-0 z-0")
                        }
                    }
                    aria-hidden=move || if active() { "false" } else { "true" }
                >
                    <img src=image.src alt=image.alt class="w-full h-full object-cover"/>
                    <div class="absolute inset-0 bg-gradient-to-t from-black/20 to-transparent"></div>
                </div>
            }
        })
        .collect_view();

    let dots = (0..images.len())
        .map(|index| {
            let active = move || carousel.with(|c| c.ring().is_current(index));
            view! {
                <button
                    class=move || {
                        if active() {
                            "h-2 rounded-full transition-all duration-300 w-6 bg-white"
                        } else {
                            "h-2 w-2 rounded-full transition-all duration-300 bg-white/60 hover:bg-white"
                        }
                    }
                    aria-label=format!("Show image {}", index + 1)
                    on:click=move |_| {
                        carousel.update(|c| {
                            if let Err(err) = c.jump_to(index) {
                                report_jump_error(err);
                            }
                        });
                    }
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="relative bg-white dark:bg-gray-900 p-2 rounded-2xl shadow-2xl border border-gray-100 dark:border-gray-800 overflow-hidden">
            <div class="relative h-80 md:h-96 rounded-xl overflow-hidden">
                {slides}

                <div class="absolute top-4 left-4 z-20">
                    <div class="px-3 py-1.5 bg-black/60 backdrop-blur-sm text-white text-sm rounded-full">
                        {move || carousel.with(|c| c.ring().position_label())}
                    </div>
                </div>

                <button
                    class=format!("{CONTROL_BUTTON} left-4 top-1/2 -translate-y-1/2")
                    aria-label="Previous image"
                    on:click=move |_| carousel.update(CarouselState::retreat)
                >
                    "‹"
                </button>
                <button
                    class=format!("{CONTROL_BUTTON} right-4 top-1/2 -translate-y-1/2")
                    aria-label="Next image"
                    on:click=move |_| carousel.update(CarouselState::advance)
                >
                    "›"
                </button>
                <button
                    class=format!("{CONTROL_BUTTON} top-4 right-4")
                    aria-label=move || if is_playing() { "Pause slideshow" } else { "Play slideshow" }
                    on:click=move |_| carousel.update(CarouselState::toggle_play)
                >
                    {move || if is_playing() { "❚❚" } else { "▶" }}
                </button>
            </div>

            <div class="absolute bottom-6 left-1/2 -translate-x-1/2 z-20 flex gap-2">{dots}</div>
        </div>
    }
    .into_any()
}

fn report_jump_error(err: CarouselError) {
    #[cfg(feature = "hydrate")]
    log::warn!("image carousel: {err}");
    #[cfg(not(feature = "hydrate"))]
    let _ = err;
}
