use leptos::prelude::*;

use super::Icon;
use crate::content::{ContactContent, ContactDetail, ContactForm};

/// `#contact` - details panel next to a form that submits nowhere.
#[component]
pub fn ContactSection(contact: ContactContent) -> impl IntoView {
    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <div class="contact-card">
                    <div class="contact-panel">
                        <h2 class="contact-title">{contact.heading}</h2>
                        <p class="contact-intro">{contact.intro}</p>
                        <div class="contact-details">
                            {contact
                                .details
                                .into_iter()
                                .map(|detail| view! { <ContactDetailRow detail=detail /> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                    <ContactFormView form=contact.form />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetailRow(detail: ContactDetail) -> impl IntoView {
    view! {
        <div class="contact-detail">
            <div class="contact-detail-icon">
                <Icon path=detail.kind.path() />
            </div>
            <div>
                <p class="contact-detail-label">{detail.label}</p>
                <p class="contact-detail-value">{detail.value}</p>
            </div>
        </div>
    }
}

// Decorative: no action, and the button is type="button" so nothing submits.
#[component]
fn ContactFormView(form: ContactForm) -> impl IntoView {
    view! {
        <form class="contact-form" data-role="contact-form">
            <div class="form-row">
                <div>
                    <label class="form-label" for="first-name">{form.first_name}</label>
                    <input id="first-name" name="first_name" type="text" class="form-input" />
                </div>
                <div>
                    <label class="form-label" for="last-name">{form.last_name}</label>
                    <input id="last-name" name="last_name" type="text" class="form-input" />
                </div>
            </div>
            <div>
                <label class="form-label" for="email">{form.email}</label>
                <input id="email" name="email" type="email" class="form-input" />
            </div>
            <div>
                <label class="form-label" for="message">{form.message}</label>
                <textarea id="message" name="message" rows="4" class="form-input"></textarea>
            </div>
            <button type="button" class="form-submit">{form.submit}</button>
        </form>
    }
}
