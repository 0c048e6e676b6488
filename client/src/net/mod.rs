//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` delivers contact submissions and `types` defines the JSON body.

pub mod api;
pub mod types;
