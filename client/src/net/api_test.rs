use futures::executor::block_on;

use super::*;

#[test]
fn status_error_message_names_the_code() {
    assert_eq!(SubmitError::Status(503).to_string(), "submission failed: 503");
    assert_eq!(SubmitError::Status(422).to_string(), "submission failed: 422");
}

#[test]
fn transport_error_message_wraps_cause() {
    assert_eq!(
        SubmitError::Transport("network down".to_owned()).to_string(),
        "request failed: network down"
    );
}

#[test]
fn normalize_endpoint_drops_blank_values() {
    assert_eq!(normalize_endpoint(None), None);
    assert_eq!(normalize_endpoint(Some("")), None);
    assert_eq!(normalize_endpoint(Some("   ")), None);
    assert_eq!(
        normalize_endpoint(Some(" https://formspree.io/f/abc ")),
        Some("https://formspree.io/f/abc".to_owned())
    );
}

#[test]
fn transport_without_endpoint_is_simulated() {
    let transport = HttpTransport::with_endpoint(None);
    assert!(transport.is_simulated());
    assert_eq!(transport.endpoint(), None);
}

#[test]
fn transport_with_endpoint_is_real() {
    let transport = HttpTransport::with_endpoint(Some("https://forms.example/submit"));
    assert!(!transport.is_simulated());
    assert_eq!(transport.endpoint(), Some("https://forms.example/submit"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn simulated_send_reports_success() {
    let transport = HttpTransport::with_endpoint(None);
    let result = block_on(transport.send(&ContactPayload::default()));
    assert_eq!(result, Ok(()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn real_send_is_unavailable_outside_the_browser() {
    let transport = HttpTransport::with_endpoint(Some("https://forms.example/submit"));
    let result = block_on(transport.send(&ContactPayload::default()));
    assert_eq!(result, Err(SubmitError::Unavailable));
}
