//! Contact form submission transport.
//!
//! Client-side (hydrate): real HTTP POST via `gloo-net` to the endpoint baked
//! in at build time from `CONTACT_FORM_ENDPOINT`. Without an endpoint the
//! transport waits [`SIMULATED_DELAY_MS`] and reports success, so preview
//! builds still walk through the whole form flow.
//! Server-side (SSR): the HTTP branch is compiled out and reports
//! [`SubmitError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`SubmitError`]; the form controller turns it
//! into a single notice and keeps the typed fields. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::ContactPayload;

/// Build-time submission endpoint, if one was configured.
const BUILD_ENDPOINT: Option<&str> = option_env!("CONTACT_FORM_ENDPOINT");

/// Placeholder round-trip used when no endpoint is configured.
pub const SIMULATED_DELAY_MS: u32 = 1500;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("submission failed: {0}")]
    Status(u16),
    #[error("submission is not available on the server")]
    Unavailable,
}

/// Normalize a configured endpoint; blank values mean "not configured".
fn normalize_endpoint(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_owned)
}

/// Delivers a contact payload somewhere.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    /// Send one payload.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] on transport failure or a non-2xx response.
    async fn send(&self, payload: &ContactPayload) -> Result<(), SubmitError>;
}

/// HTTP transport posting JSON to a third-party form endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpTransport {
    endpoint: Option<String>,
}

impl HttpTransport {
    /// Transport using the endpoint compiled into this build.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_endpoint(BUILD_ENDPOINT)
    }

    #[must_use]
    pub fn with_endpoint(endpoint: Option<&str>) -> Self {
        Self {
            endpoint: normalize_endpoint(endpoint),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    #[must_use]
    pub fn is_simulated(&self) -> bool {
        self.endpoint.is_none()
    }
}

impl ContactTransport for HttpTransport {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        let Some(endpoint) = self.endpoint.as_deref() else {
            #[cfg(feature = "hydrate")]
            gloo_timers::future::TimeoutFuture::new(SIMULATED_DELAY_MS).await;
            log::info!("no submission endpoint configured; simulated delivery");
            return Ok(());
        };

        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(endpoint)
                .header("Accept", "application/json")
                .json(payload)
                .map_err(|e| SubmitError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(SubmitError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, payload);
            Err(SubmitError::Unavailable)
        }
    }
}
