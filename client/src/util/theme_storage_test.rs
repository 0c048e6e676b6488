#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn browser_store_is_unavailable_outside_the_browser() {
    assert_eq!(BrowserStore.load(), Err(StorageError::Unavailable));
    assert_eq!(BrowserStore.save(ThemePreference::Dark), Err(StorageError::Unavailable));
}

#[test]
fn system_prefers_dark_is_false_in_non_hydrate_tests() {
    assert!(!system_prefers_dark());
}

#[test]
fn apply_to_document_is_noop_but_callable() {
    apply_to_document(ThemePreference::Light);
    apply_to_document(ThemePreference::Dark);
}

#[test]
fn storage_error_messages_name_the_cause() {
    assert_eq!(StorageError::Unavailable.to_string(), "local storage is not available");
    assert_eq!(
        StorageError::Denied("SecurityError".to_owned()).to_string(),
        "local storage access denied: SecurityError"
    );
}
