// =============================================================================
// Folio Web - Contact Form
// =============================================================================
// Table of Contents:
// 1. Message Validation
// 2. ContactForm component
// 3. Tests
// =============================================================================
//
// There is no backend: a valid message is "sent" after a short simulated
// delay and the form resets.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thiserror::Error;

use crate::components::{Button, TextArea, TextInput};
use crate::state::AppState;
use crate::utils::is_valid_email;

const SUBMIT_DELAY_MS: u32 = 1000;

// -----------------------------------------------------------------------------
// 1. Message Validation
// -----------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ContactError {
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// 2. ContactForm
// -----------------------------------------------------------------------------

#[component]
pub fn ContactForm() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let draft = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(err) = draft.validate() {
            error.set(Some(err.to_string()));
            return;
        }

        error.set(None);
        submitting.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            log::info!("Contact message from {} <{}> accepted", draft.name, draft.email);
            app_state.notify("Message sent!", "Thank you for reaching out. I'll get back to you soon.");
            for field in [name, email, subject, message] {
                let _ = field.try_set(String::new());
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit novalidate=true>
            <div class="form-row">
                <TextInput id="name" label="Name" value=name placeholder="Your name" required=true disabled=submitting />
                <TextInput
                    id="email"
                    label="Email"
                    value=email
                    input_type="email"
                    placeholder="you@example.com"
                    required=true
                    disabled=submitting
                />
            </div>
            <TextInput id="subject" label="Subject" value=subject placeholder="Project inquiry" required=true disabled=submitting />
            <TextArea
                id="message"
                label="Message"
                value=message
                placeholder="Tell me about your project..."
                rows=5
                required=true
                disabled=submitting
            />
            {move || error.get().map(|e| view! { <p class="form-error" role="alert">{e}</p> })}
            <Button
                label="Send Message"
                button_type="submit"
                loading=submitting
                loading_label="Sending..."
            />
        </form>
    }
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------
