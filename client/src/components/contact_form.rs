//! Contact form posted to `/api/contact`.

use leptos::prelude::*;

use crate::net::types::CompanySize;
use crate::state::contact::{ContactDraft, SubmitStatus};

const INPUT_CLASS: &str = "w-full px-4 py-2.5 rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-blue-500";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1";

#[component]
pub fn ContactForm() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());
    let status = RwSignal::new(SubmitStatus::default());
    let invalid = RwSignal::new(None::<&'static str>);

    // Submitting never navigates; the request goes out over fetch.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with(SubmitStatus::is_sending) {
            return;
        }
        let request = match draft.with(ContactDraft::validate) {
            Ok(request) => request,
            Err(message) => {
                invalid.set(Some(message));
                return;
            }
        };
        invalid.set(None);
        status.set(SubmitStatus::Sending);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_contact(&request).await {
                Ok(receipt) => {
                    draft.set(ContactDraft::default());
                    status.set(SubmitStatus::Sent { reference: receipt.reference });
                }
                Err(e) => {
                    log::warn!("contact submission failed: {e}");
                    status.set(SubmitStatus::Failed(e));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <form class="space-y-4" on:submit=on_submit novalidate=true>
            <div>
                <label class=LABEL_CLASS for="contact-name">"Name"</label>
                <input
                    id="contact-name"
                    class=INPUT_CLASS
                    type="text"
                    placeholder="John Doe"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </div>
            <div>
                <label class=LABEL_CLASS for="contact-email">"Work Email"</label>
                <input
                    id="contact-email"
                    class=INPUT_CLASS
                    type="email"
                    placeholder="john@company.com"
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                />
            </div>
            <div>
                <label class=LABEL_CLASS for="contact-size">"Company Size"</label>
                <select
                    id="contact-size"
                    class=INPUT_CLASS
                    prop:value=move || draft.with(|d| d.company_size.map_or("", CompanySize::as_str))
                    on:change=move |ev| {
                        draft.update(|d| d.company_size = CompanySize::parse(&event_target_value(&ev)));
                    }
                >
                    <option value="">"Select size"</option>
                    {CompanySize::ALL
                        .iter()
                        .map(|size| view! { <option value=size.as_str()>{size.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div>
                <label class=LABEL_CLASS for="contact-message">"Message"</label>
                <textarea
                    id="contact-message"
                    class=INPUT_CLASS
                    rows="4"
                    placeholder="How can we help you?"
                    prop:value=move || draft.with(|d| d.message.clone())
                    on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                ></textarea>
            </div>
            <Show when=move || invalid.get().is_some()>
                <p class="text-sm text-red-600">{move || invalid.get().unwrap_or_default()}</p>
            </Show>
            <button
                type="submit"
                class="w-full bg-gradient-to-r from-blue-600 to-indigo-600 text-white py-3 rounded-lg font-semibold hover:from-blue-700 hover:to-indigo-700 transition-all duration-300 shadow-lg disabled:opacity-60"
                disabled=move || status.with(SubmitStatus::is_sending)
            >
                "Send Message"
            </button>
            <Show when=move || status.with(|s| s.message().is_some())>
                <p class=move || {
                    if matches!(status.get(), SubmitStatus::Failed(_)) {
                        "text-sm text-red-600"
                    } else {
                        "text-sm text-gray-600 dark:text-gray-400"
                    }
                }>{move || status.with(SubmitStatus::message).unwrap_or_default()}</p>
            </Show>
        </form>
    }
}
