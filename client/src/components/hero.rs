//! Opening hero with the two primary calls to action.

use leptos::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::{HERO_IMAGE, Section};
use crate::util::navigation::SectionNavigator;

#[component]
pub fn Hero() -> impl IntoView {
    let nav = expect_context::<SectionNavigator>();

    view! {
        <section class="hero">
            <div class="hero__grid">
                <div class="hero__copy">
                    <FadeIn block="hero-copy">
                        <div class="hero__eyebrow">
                            <span class="hero__rule"></span>
                            <p>"trainer / Wellness Strategist"</p>
                        </div>
                        <h1 class="hero__title">
                            "Refine Your "<br/><span class="accent">"Potential."</span>
                        </h1>
                        <p class="hero__lead">
                            "身体構造の最適化から始まる、"<br/>"本質的なパフォーマンス向上。"<br/>
                            "「鍛える」の前に「整える」という、勝者のための選択。"
                        </p>
                        <div class="hero__actions">
                            <button class="button button--primary" on:click=move |_| { nav.go(Section::Contact); }>
                                "セッションを予約 ↗"
                            </button>
                            <button class="button button--ghost" on:click=move |_| { nav.go(Section::Methods); }>
                                "Our Method →"
                            </button>
                        </div>
                    </FadeIn>
                </div>
                <div class="hero__media">
                    <FadeIn block="hero-image" delay_ms=200>
                        <div class="hero__frame">
                            <img src=HERO_IMAGE alt="塚越貴男によるコンディショニング風景"/>
                        </div>
                    </FadeIn>
                </div>
            </div>
        </section>
    }
}
