//! "Contact Sales" dialog.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::modal::Modal;

#[component]
pub fn ContactModal(#[prop(into)] open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal open=open on_close=on_close title="Contact Sales">
            <p class="text-gray-600 dark:text-gray-400 mb-6">
                "Tell us about your hiring needs and our team will get back to you within one business day."
            </p>
            <ContactForm/>
        </Modal>
    }
}
