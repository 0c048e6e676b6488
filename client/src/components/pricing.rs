//! Pricing plans. Each call to action jumps to the contact form.

use leptos::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::{PLANS, Plan, Section, stagger_delay_ms};
use crate::util::navigation::SectionNavigator;

fn plan_class(plan: &Plan) -> &'static str {
    if plan.featured {
        "plan-card plan-card--featured"
    } else {
        "plan-card"
    }
}

#[component]
pub fn PricingSection() -> impl IntoView {
    let nav = expect_context::<SectionNavigator>();

    view! {
        <section id=Section::Pricing.id() class="section section--muted">
            <div class="section__inner section__inner--narrow">
                <FadeIn block="pricing-heading" class="section__heading section__heading--center">
                    <h2 class="section__eyebrow section__eyebrow--quiet">"Investment"</h2>
                    <h3 class="section__title">"Value for Life."</h3>
                </FadeIn>
                <div class="pricing__grid">
                    {PLANS
                        .iter()
                        .enumerate()
                        .map(|(i, plan)| {
                            view! {
                                <FadeIn
                                    block=format!("plan-{i}")
                                    delay_ms=stagger_delay_ms(i, 150)
                                    class=plan_class(plan)
                                >
                                    <span class="plan-card__badge">{plan.badge}</span>
                                    <h4 class="plan-card__title">{plan.title}</h4>
                                    <p class="plan-card__body">{plan.description}</p>
                                    <div class="plan-card__price">
                                        {plan.price}
                                        {plan
                                            .price_note
                                            .map(|note| view! { <span class="plan-card__note">{note}</span> })}
                                    </div>
                                    <button
                                        class="plan-card__cta"
                                        on:click=move |_| {
                                            nav.go(Section::Contact);
                                        }
                                    >
                                        {plan.cta}
                                        " ›"
                                    </button>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
