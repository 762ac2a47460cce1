//! Pretty-printed JSON responses.
//!
//! Every successful handler answers with `200 OK` and a body indented by
//! three spaces, matching what existing clients diff against.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::JSON_INDENT;
use common::{AppError, AppResult};

/// Serialize `value` as indented JSON.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> AppResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);

    value
        .serialize(&mut serializer)
        .map_err(|e| AppError::internal(format!("failed to encode response: {e}")))?;

    Ok(buf)
}

/// JSON response body using `to_pretty_json`.
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match to_pretty_json(&self.0) {
            Ok(body) => (
                StatusCode::OK,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
            Err(err) => err.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Label;

    #[test]
    fn indents_with_three_spaces() {
        let body = to_pretty_json(&Label { id: 1, name: "bug".into() }).unwrap();
        let text = String::from_utf8(body).unwrap();
        assert_eq!(text, "{\n   \"id\": 1,\n   \"name\": \"bug\"\n}");
    }

    #[tokio::test]
    async fn response_is_ok_json() {
        let response = PrettyJson(vec![1, 2]).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            HeaderValue::from_static("application/json")
        );
    }
}
