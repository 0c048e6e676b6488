//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing page sections and chrome while reading/writing
//! shared state from Leptos context providers.

pub mod articles;
pub mod chrome;
pub mod contact_form;
pub mod fade_in;
pub mod faq;
pub mod hero;
pub mod methods;
pub mod pricing;
pub mod profile;
pub mod site_footer;
pub mod site_header;
pub mod theme_provider;
