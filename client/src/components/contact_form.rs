//! Contact section and inquiry form.
//!
//! The form keeps a single `RwSignal<ContactForm>`; the submit handler asks
//! the state machine what to do and only spawns a request for
//! [`SubmitStep::Send`]. The honeypot input is visually hidden and skipped
//! by keyboard focus.

use leptos::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::{CONTACT_EMAIL, Section};
use crate::state::contact::{ContactForm, Field, SubmissionStatus, SubmitStep};

#[cfg(feature = "hydrate")]
use crate::net::api::{ContactTransport, HttpTransport};

fn field_class(has_error: bool, multiline: bool) -> &'static str {
    match (has_error, multiline) {
        (false, false) => "form-field__input",
        (true, false) => "form-field__input form-field__input--error",
        (false, true) => "form-field__input form-field__input--textarea",
        (true, true) => "form-field__input form-field__input--textarea form-field__input--error",
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.fields.get(field).to_owned());
    let error = move || form.with(|f| f.errors.get(field).to_owned());
    let class = move || field_class(form.with(|f| !f.errors.get(field).is_empty()), multiline);
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev)));

    let control = if multiline {
        view! {
            <textarea rows="4" class=class placeholder=placeholder prop:value=value on:input=on_input></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type.unwrap_or("text")
                class=class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label class="form-field__label">{label}</label>
            {control}
            <Show when=move || !error().is_empty()>
                <p class="form-field__error">{error}</p>
            </Show>
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(SubmitStep::Send(payload)) = form.try_update(ContactForm::begin_submit) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = HttpTransport::from_build_env().send(&payload).await;
            form.update(|f| f.complete(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let submitting = move || form.with(ContactForm::is_submitting);
    let notice_class = move || match form.with(|f| f.status) {
        SubmissionStatus::Failed => "contact-form__notice contact-form__notice--failed",
        _ => "contact-form__notice contact-form__notice--success",
    };

    view! {
        <section id=Section::Contact.id() class="section contact">
            <div class="section__inner section__inner--narrow contact__grid">
                <FadeIn block="contact-intro">
                    <h2 class="contact__title">"Get in "<br/><span class="accent">"Touch."</span></h2>
                    <p class="contact__lead">
                        "身体のアップデートに関するご相談を。通常24時間以内にご返信いたします。"
                    </p>
                    <a class="contact__mail" href=format!("mailto:{CONTACT_EMAIL}")>
                        <span class="contact__mail-label">"Email Address"</span>
                        <span class="contact__mail-address">{CONTACT_EMAIL}</span>
                    </a>
                </FadeIn>
                <FadeIn block="contact-form" delay_ms=200>
                    <form class="contact-form" novalidate=true on:submit=on_submit>
                        <div class="contact-form__trap" aria-hidden="true">
                            <input
                                type="text"
                                tabindex="-1"
                                autocomplete="off"
                                prop:value=move || form.with(|f| f.honeypot.clone())
                                on:input=move |ev| form.update(|f| f.set_honeypot(event_target_value(&ev)))
                            />
                        </div>
                        <FormField form=form field=Field::Name label="Full Name" placeholder="お名前"/>
                        <FormField
                            form=form
                            field=Field::Email
                            label="Email Address"
                            placeholder="メールアドレス"
                            input_type="email"
                        />
                        <FormField
                            form=form
                            field=Field::Message
                            label="Message"
                            placeholder="ご相談内容"
                            multiline=true
                        />
                        <button class="contact-form__submit" type="submit" disabled=submitting>
                            {move || if submitting() { "SENDING..." } else { "SEND MESSAGE" }}
                        </button>
                        {move || {
                            form.with(ContactForm::notice)
                                .map(|notice| view! { <div class=notice_class role="status">{notice}</div> })
                        }}
                    </form>
                </FadeIn>
            </div>
        </section>
    }
}
