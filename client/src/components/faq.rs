//! FAQ accordion. At most one answer is open at a time.

use leptos::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::{FAQS, Section, stagger_delay_ms};
use crate::state::ui::UiState;

#[component]
pub fn FaqSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section id=Section::Faq.id() class="section section--muted">
            <div class="section__inner section__inner--slim">
                <FadeIn block="faq-heading" class="section__heading section__heading--center">
                    <h2 class="section__eyebrow section__eyebrow--quiet">"Help Center"</h2>
                    <h3 class="section__title">"FAQ."</h3>
                </FadeIn>
                <div class="faq__list">
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(i, faq)| {
                            let is_open = move || ui.with(|u| u.is_faq_open(i));
                            view! {
                                <FadeIn block=format!("faq-{i}") delay_ms=stagger_delay_ms(i, 50)>
                                    <div class="faq-item" on:click=move |_| ui.update(|u| u.toggle_faq(i))>
                                        <div class="faq-item__head">
                                            <h4 class="faq-item__question">{faq.question}</h4>
                                            <span class=move || {
                                                if is_open() {
                                                    "faq-item__chevron faq-item__chevron--open"
                                                } else {
                                                    "faq-item__chevron"
                                                }
                                            }>"⌄"</span>
                                        </div>
                                        <Show when=is_open>
                                            <div class="faq-item__answer">{faq.answer}</div>
                                        </Show>
                                    </div>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
