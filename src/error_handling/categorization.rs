//! Fetch error categorization.

use super::types::FetchErrorKind;

/// Categorizes a `reqwest::Error` into a `FetchErrorKind`.
///
/// HTTP status codes never reach this function: a non-success status is a
/// valid fetch result, not an error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchErrorKind {
    if error.is_builder() {
        FetchErrorKind::Builder
    } else if error.is_redirect() {
        FetchErrorKind::Redirect
    } else if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if error.is_connect() {
        FetchErrorKind::Connect
    } else if error.is_request() {
        FetchErrorKind::Request
    } else if error.is_body() {
        FetchErrorKind::Body
    } else if error.is_decode() {
        FetchErrorKind::Decode
    } else {
        FetchErrorKind::Other
    }
}
