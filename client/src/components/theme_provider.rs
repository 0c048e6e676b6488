//! Theme context provider and toggle button.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeProvider` builds the `ThemeController`, subscribes the reactive
//! signal and the `<html data-theme>` writer, and exposes both through
//! [`ThemeContext`]. The stored/system preference is resolved after mount so
//! server-rendered markup always starts light.

use leptos::prelude::*;

use crate::state::theme::{ThemeController, ThemePreference};
use crate::util::theme_storage::{self, BrowserStore};

/// Read/toggle access to the active theme.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<ThemePreference>,
    controller: StoredValue<ThemeController<BrowserStore>>,
}

impl ThemeContext {
    /// Reactive read of the current theme.
    pub fn get(&self) -> ThemePreference {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.controller.update_value(|controller| {
            controller.toggle();
        });
    }
}

/// Provides [`ThemeContext`] to `children`.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = RwSignal::new(ThemePreference::default());
    let mut controller = ThemeController::new(BrowserStore);
    controller.subscribe(move |next| theme.set(next));
    controller.subscribe(theme_storage::apply_to_document);
    let controller = StoredValue::new(controller);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        controller.update_value(|controller| {
            controller.initialize(theme_storage::system_prefers_dark());
        });
    });

    provide_context(ThemeContext { theme, controller });

    children()
}

/// Sun/moon button flipping the theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <button class="theme-toggle" aria-label="Theme" on:click=move |_| theme.toggle()>
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
