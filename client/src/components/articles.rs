//! Journal cards linking to externally hosted articles.

use leptos::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::{ARTICLES, Section, stagger_delay_ms};

#[component]
pub fn ArticlesSection() -> impl IntoView {
    view! {
        <section id=Section::Articles.id() class="section">
            <div class="section__inner">
                <div class="section__heading section__heading--split">
                    <FadeIn block="articles-heading">
                        <h2 class="section__eyebrow">"Latest Insights"</h2>
                        <h3 class="section__title">"Journal."</h3>
                    </FadeIn>
                    <FadeIn block="articles-more" delay_ms=100>
                        <span class="articles__more">"View All Articles →"</span>
                    </FadeIn>
                </div>
                <div class="articles__grid">
                    {ARTICLES
                        .iter()
                        .enumerate()
                        .map(|(i, article)| {
                            view! {
                                <FadeIn
                                    block=format!("article-{}", article.id)
                                    delay_ms=stagger_delay_ms(i, 100)
                                    class="article-card"
                                >
                                    <div class="article-card__media">
                                        <img src=article.image alt=article.title loading="lazy"/>
                                        <div class="article-card__platform">{article.platform}</div>
                                    </div>
                                    <p class="article-card__date">{article.display_date()}</p>
                                    <h4 class="article-card__title">{article.title}</h4>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
