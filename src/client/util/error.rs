use crate::model::api::ErrorDto;

/// Builds the message shown for a failed API response from its already-read body.
///
/// The server's `ErrorDto` message is used when the body is one, otherwise the raw body is
/// shown with the status code.
#[cfg_attr(not(feature = "web"), allow(dead_code))]
pub fn message_from_body(status: u16, body: &str) -> String {
    if let Ok(error_dto) = serde_json::from_str::<ErrorDto>(body) {
        return error_dto.error;
    }

    let body = body.trim();
    if body.is_empty() {
        format!("Request failed with status {}", status)
    } else {
        format!("Request failed with status {}: {}", status, body)
    }
}
