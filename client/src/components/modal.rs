//! Generic dialog shell with backdrop and scroll lock.
//!
//! Renders nothing while closed. While open it holds a
//! [`ScrollLock`](crate::util::scroll_lock::ScrollLock) so the page behind
//! cannot scroll; the guard is released when the dialog closes and again on
//! unmount.

use leptos::prelude::*;

use crate::util::scroll_lock::{self, ScrollLock};

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    title: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let lock = StoredValue::new_local(None::<ScrollLock>);
    Effect::new(move || {
        let is_open = open.get();
        lock.update_value(|slot| scroll_lock::sync(slot, is_open));
    });
    on_cleanup(move || {
        lock.try_update_value(|slot| {
            slot.take();
        });
    });

    #[cfg(feature = "hydrate")]
    {
        let escape = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && open.get_untracked() {
                ev.prevent_default();
                on_close.run(());
            }
        });
        on_cleanup(move || escape.remove());
    }

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div
                    class="absolute inset-0 bg-black/50 backdrop-blur-sm animate-fade-in"
                    on:click=move |_| on_close.run(())
                ></div>
                <div
                    class="relative w-full max-w-lg bg-white dark:bg-gray-900 rounded-2xl shadow-2xl overflow-hidden animate-modal-in"
                    role="dialog"
                    aria-modal="true"
                    aria-label=title
                >
                    <div class="flex items-center justify-between p-6 border-b border-gray-100 dark:border-gray-800">
                        <h3 class="text-xl font-bold text-gray-900 dark:text-white">{title}</h3>
                        <button
                            class="p-2 text-gray-400 hover:text-gray-600 hover:bg-gray-100 dark:hover:bg-gray-800 rounded-full transition-colors"
                            title="Close"
                            on:click=move |_| on_close.run(())
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="p-6">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
