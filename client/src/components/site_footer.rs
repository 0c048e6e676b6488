use leptos::prelude::*;

use crate::content::{BRAND_MARK, DISCLAIMERS, SOCIAL_LINKS};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__top">
                    <div class="site-footer__brand">
                        <p class="site-footer__mark">{BRAND_MARK}</p>
                        <p class="site-footer__rights">
                            "© Takao Tsukakoshi / Conditioning Design."<br/>"All Rights Reserved."
                        </p>
                    </div>
                    <div class="site-footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        class="site-footer__social-link"
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="site-footer__legal">
                    {DISCLAIMERS
                        .iter()
                        .map(|d| {
                            view! {
                                <div class="disclaimer">
                                    <p class="disclaimer__heading">{d.heading}</p>
                                    <p class="disclaimer__body">{d.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
