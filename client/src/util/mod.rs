//! Browser helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability. Modules that only make sense with a
//! live DOM are compiled for `hydrate` builds only.

pub mod metadata;
pub mod navigation;
#[cfg(feature = "hydrate")]
pub mod scroll_listener;
pub mod theme_storage;
#[cfg(feature = "hydrate")]
pub mod visibility;
