//! Fixed site header with section links, theme toggle and mobile menu.
//!
//! The header compacts once the page scrolls past the header threshold. On
//! narrow screens the links move into a full-screen overlay toggled by the
//! menu button; choosing a link closes the overlay before scrolling.

use leptos::prelude::*;

use crate::components::theme_provider::ThemeToggle;
use crate::content::{BRAND_MARK, Section};
use crate::state::scroll::ScrollMetrics;
use crate::state::ui::UiState;
use crate::util::navigation::SectionNavigator;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let scroll = expect_context::<RwSignal<ScrollMetrics>>();
    let nav = expect_context::<SectionNavigator>();

    let menu_open = move || ui.with(|u| u.menu_open);
    let header_class = move || {
        if scroll.with(|s| s.past_threshold) {
            "site-header site-header--compact"
        } else {
            "site-header"
        }
    };

    let links = move |class: &'static str| {
        Section::ALL
            .iter()
            .map(|&section| {
                view! {
                    <button class=class on:click=move |_| { nav.go(section); }>
                        {section.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class=header_class>
            <div class="site-header__inner">
                <button class="site-header__brand" on:click=move |_| nav.top()>
                    <span class="site-header__mark">{BRAND_MARK}</span>
                    <span class="site-header__dot"></span>
                </button>
                <nav class="site-header__nav">
                    {links("site-header__link")}
                    <span class="site-header__divider"></span>
                    <ThemeToggle/>
                </nav>
                <div class="site-header__mobile">
                    <ThemeToggle/>
                    <button
                        class="site-header__menu-button"
                        aria-label="Menu"
                        aria-expanded=move || menu_open().to_string()
                        on:click=move |_| ui.update(UiState::toggle_menu)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </header>
        <Show when=menu_open>
            <div class="mobile-menu">{links("mobile-menu__link")}</div>
        </Show>
    }
}
