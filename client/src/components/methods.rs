//! "The System" section: four method cards, one highlighted.

use leptos::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::{METHODS, Method, Section, stagger_delay_ms};

fn card_class(method: &Method) -> &'static str {
    if method.accent {
        "method-card method-card--accent"
    } else {
        "method-card"
    }
}

#[component]
pub fn MethodsSection() -> impl IntoView {
    view! {
        <section id=Section::Methods.id() class="section section--muted">
            <div class="section__inner">
                <FadeIn block="methods-heading" class="section__heading section__heading--split">
                    <div>
                        <h2 class="section__eyebrow">"The System"</h2>
                        <h3 class="section__title">"Conditioning Logic."</h3>
                    </div>
                    <p class="section__aside">
                        "単なる筋力トレーニングではない。解剖学的な解析を基軸に、身体の『構造』そのものをアップデートする独自の4ステップ・サイクル。"
                    </p>
                </FadeIn>
                <div class="methods__grid">
                    {METHODS
                        .iter()
                        .enumerate()
                        .map(|(i, method)| {
                            view! {
                                <FadeIn
                                    block=format!("method-{}", method.id)
                                    delay_ms=stagger_delay_ms(i, 100)
                                    class=card_class(method)
                                >
                                    <div class="method-card__index">{format!("0{}", i + 1)}</div>
                                    <h4 class="method-card__title">{method.title}</h4>
                                    <p class="method-card__body">{method.description}</p>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
