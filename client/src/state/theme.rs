//! Theme preference and the controller that owns it.
//!
//! DESIGN
//! ======
//! The controller is a plain struct so the precedence and persistence rules
//! can be exercised without a browser. The Leptos provider in
//! `components::theme_provider` wraps it and subscribes a signal setter plus
//! the document attribute writer.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are logged and swallowed: the theme keeps working
//! in-memory for the rest of the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::theme_storage::PreferenceStore;

/// Light or dark color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Storage / attribute representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown values are treated as unset.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Resolve the starting theme: stored value, then system signal, then light.
#[must_use]
pub fn resolve_initial(stored: Option<ThemePreference>, system_prefers_dark: bool) -> ThemePreference {
    match stored {
        Some(theme) => theme,
        None if system_prefers_dark => ThemePreference::Dark,
        None => ThemePreference::Light,
    }
}

type Listener = Box<dyn Fn(ThemePreference) + Send + Sync>;

/// Owns the active theme, its store, and the change subscribers.
pub struct ThemeController<S> {
    current: ThemePreference,
    store: S,
    listeners: Vec<Listener>,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Create a controller in the light theme. Call [`Self::initialize`] once
    /// the environment can be inspected.
    pub fn new(store: S) -> Self {
        Self {
            current: ThemePreference::Light,
            store,
            listeners: Vec::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Register a callback invoked after every theme change.
    pub fn subscribe(&mut self, listener: impl Fn(ThemePreference) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Load the stored preference and apply it with the system fallback.
    pub fn initialize(&mut self, system_prefers_dark: bool) -> ThemePreference {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("theme preference unreadable, using system signal: {e}");
                None
            }
        };
        let theme = resolve_initial(stored, system_prefers_dark);
        self.set(theme);
        theme
    }

    /// Flip between light and dark.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    /// Make `theme` active, notify subscribers, and persist it.
    pub fn set(&mut self, theme: ThemePreference) {
        self.current = theme;
        log::debug!("theme set to {}", theme.as_str());
        for listener in &self.listeners {
            listener(theme);
        }
        if let Err(e) = self.store.save(theme) {
            log::warn!("theme preference not persisted: {e}");
        }
    }
}
