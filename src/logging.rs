//! Middleware for logging requests and responses.

use axum::{
    extract::Request,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::transfer::{Field, mask_account_number, mask_phone_number};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
///
/// Account numbers and phone numbers in submitted forms are masked.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let Some((parts, body_text)) = extract_header_and_body_text_from_request(request).await else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    if parts.method == Method::POST && is_form(&parts.headers) {
        log_request(&parts, &mask_form_fields(&body_text));
    } else {
        log_request(&parts, &body_text);
    }

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let Some((parts, body_text)) = extract_header_and_body_text_from_response(response).await
    else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    log_response(&parts, &body_text);

    Response::from_parts(parts, body_text.into())
}

fn is_form(headers: &axum::http::HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE))
}

/// Mask the account number and phone number in URL encoded form text.
fn mask_form_fields(form_text: &str) -> String {
    form_text
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if key == Field::AccountNumber.name() => {
                format!("{key}={}", mask_account_number(value))
            }
            Some((key, value)) if key == Field::PhoneNumber.name() => {
                format!("{key}={}", mask_phone_number(value))
            }
            _ => pair.to_owned(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

async fn extract_header_and_body_text_from_request(
    request: Request,
) -> Option<(axum::http::request::Parts, String)> {
    let (parts, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("could not read request body: {error}"))
        .ok()?;

    Some((parts, String::from_utf8_lossy(&body_bytes).to_string()))
}

async fn extract_header_and_body_text_from_response(
    response: Response,
) -> Option<(axum::http::response::Parts, String)> {
    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("could not read response body: {error}"))
        .ok()?;

    Some((parts, String::from_utf8_lossy(&body_bytes).to_string()))
}

/// Bodies longer than this many bytes are truncated in `info` level logs.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The longest prefix of `text` that fits in `limit` bytes without splitting a character.
fn truncate(text: &str, limit: usize) -> &str {
    let end = text
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|end| *end <= limit)
        .last()
        .unwrap_or(0);

    &text[..end]
}

fn log_request(parts: &axum::http::request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {parts:#?}\nbody: {:}...",
            truncate(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {parts:#?}\nbody: {body:?}");
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {parts:#?}\nbody: {:}...",
            truncate(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {parts:#?}\nbody: {body:?}");
    }
}

#[cfg(test)]
mod logging_tests {
    use axum::{Router, middleware, routing::post};
    use axum_test::TestServer;

    use super::{logging_middleware, mask_form_fields, truncate};

    #[test]
    fn masks_account_and_phone_numbers() {
        let form = "accountName=Jo&accountNumber=1234567890&phoneNumber=08012345678&amount=5000";

        let masked = mask_form_fields(form);

        assert_eq!(
            masked,
            "accountName=Jo&accountNumber=123****890&phoneNumber=********678&amount=5000"
        );
    }

    #[test]
    fn leaves_other_forms_alone() {
        let form = "trigger=blur&narration=accountNumber";

        assert_eq!(mask_form_fields(form), form);
    }

    #[test]
    fn short_account_numbers_do_not_leak_digits() {
        let masked = mask_form_fields("accountNumber=12345&phoneNumber=12");

        assert_eq!(masked, "accountNumber=****&phoneNumber=**");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("abcdef", 4), "abcd");
        assert_eq!(truncate("₦₦₦", 4), "₦");
        assert_eq!(truncate("ab", 64), "ab");
    }

    #[tokio::test]
    async fn middleware_passes_body_through() {
        let app = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::try_new(app).expect("Could not create test server.");

        let response = server
            .post("/echo")
            .form(&[("accountNumber", "1234567890")])
            .await;

        response.assert_status_ok();
        assert_eq!(response.text(), "accountNumber=1234567890");
    }
}
