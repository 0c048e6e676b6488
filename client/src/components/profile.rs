//! Coach profile: quote, biography, stats and portrait.

use leptos::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::{COACH_NAME, COACH_NAME_LATIN, PORTRAIT_IMAGE, STATS, Section};

#[component]
pub fn ProfileSection() -> impl IntoView {
    view! {
        <section id=Section::Profile.id() class="section profile">
            <div class="section__inner profile__grid">
                <div class="profile__text">
                    <FadeIn block="profile-name">
                        <span class="section__eyebrow">"Wellness Strategist Profile"</span>
                        <h3 class="profile__name">
                            {COACH_NAME}
                            <span class="profile__slash">"/"</span>
                            <span class="profile__latin">{COACH_NAME_LATIN}</span>
                        </h3>
                    </FadeIn>
                    <FadeIn block="profile-bio" delay_ms=100>
                        <p class="profile__quote">
                            "「身体を、人生の加速を阻むボトルネックにしない。それが、私が提供する真のウェルネス戦略です。」"
                        </p>
                        <div class="profile__rule"></div>
                        <p class="profile__bio">
                            "プロアスリートが全盛期の輝きを保ち続けるために。経営者が極限のプレッシャー下で瞬時の決断を下し続けるために。15年以上のキャリアを通じ、私は常に『結果』を求められる人々の傍らに立ってきました。"
                        </p>
                        <p class="profile__bio">
                            "単にトレーニングを教えるのではなく、一人ひとりの人生の目的に合わせ、いかに身体という資産を最適化（コンディショニング）するか。私はトレーナーとしてだけでなく、あなたの人生を加速させる『ウェルネス・ストラテジスト』でありたいと考えています。"
                        </p>
                    </FadeIn>
                    <FadeIn block="profile-stats" delay_ms=200 class="profile__stats">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat">
                                        <p class="stat__label">{stat.label}</p>
                                        <p class="stat__value">
                                            {stat.value}
                                            <span class="stat__suffix">{stat.suffix}</span>
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </FadeIn>
                </div>
                <div class="profile__portrait">
                    <FadeIn block="profile-portrait" delay_ms=300>
                        <div class="profile__frame">
                            <img src=PORTRAIT_IMAGE alt="塚越貴男のポートレート" loading="lazy"/>
                        </div>
                    </FadeIn>
                </div>
            </div>
        </section>
    }
}
