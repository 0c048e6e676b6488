//! Theme preference persistence and document attribute wiring.
//!
//! Reads the preference from `localStorage` under the `theme` key and applies
//! a `data-theme` attribute to the `<html>` element. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use thiserror::Error;

use crate::state::theme::ThemePreference;

/// Storage key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// Why the preference could not be read or written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage access denied: {0}")]
    Denied(String),
}

/// Durable home for the single theme preference.
pub trait PreferenceStore {
    /// Read the stored preference, `Ok(None)` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing storage cannot be reached.
    fn load(&self) -> Result<Option<ThemePreference>, StorageError>;

    /// Persist `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing storage rejects the write.
    fn save(&self, theme: ThemePreference) -> Result<(), StorageError>;
}

/// `window.localStorage` backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| StorageError::Denied(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl PreferenceStore for BrowserStore {
    fn load(&self) -> Result<Option<ThemePreference>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?
                .get_item(STORAGE_KEY)
                .map_err(|e| StorageError::Denied(format!("{e:?}")))?;
            Ok(raw.as_deref().and_then(ThemePreference::parse))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn save(&self, theme: ThemePreference) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(STORAGE_KEY, theme.as_str())
                .map_err(|e| StorageError::Denied(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
            Err(StorageError::Unavailable)
        }
    }
}

/// Whether the OS/browser asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply_to_document(theme: ThemePreference) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
