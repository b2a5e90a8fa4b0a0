//! Landing page composition.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the contact modal's open flag. Navbar, hero and CTA buttons
//! all open the same modal; every dismissal path closes it.

use leptos::prelude::*;

use crate::components::contact_modal::ContactModal;
use crate::components::cta_section::CtaSection;
use crate::components::faq_accordion::FaqAccordion;
use crate::components::features::{FeaturesSection, HowItWorksSection};
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::stats_band::StatsBand;
use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::content::{FAQS, TESTIMONIALS};
use crate::state::modal::ModalState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let contact = RwSignal::new(ModalState::default());

    let open_contact = Callback::new(move |()| contact.update(ModalState::open));
    let close_contact = Callback::new(move |()| contact.update(ModalState::close));
    let contact_open = Signal::derive(move || contact.with(|m| m.is_open));

    view! {
        <div class="font-sans bg-white dark:bg-gray-950">
            <Navbar on_contact=open_contact/>
            <main>
                <Hero on_demo=open_contact/>
                <FeaturesSection/>
                <StatsBand/>
                <HowItWorksSection/>
                <TestimonialCarousel items=TESTIMONIALS/>
                <FaqAccordion items=FAQS/>
                <CtaSection on_demo=open_contact/>
            </main>
            <Footer/>
            <ContactModal open=contact_open on_close=close_contact/>
        </div>
    }
}
