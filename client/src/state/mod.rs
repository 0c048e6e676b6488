//! Client-side state models.
//!
//! ARCHITECTURE
//! ============
//! Each module is a plain Rust model with its own transitions. Pages wrap them
//! in `RwSignal`s and provide them through Leptos context; the models never
//! touch the DOM.

pub mod contact;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod ui;
