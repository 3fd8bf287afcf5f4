//! Tests for webhook error kinds and payload access.

use super::{ApiError, ErrorKind, HttpError, WebhookError};

fn bad_request() -> WebhookError {
    WebhookError::BadRequest(ApiError::new(50035, "Invalid Form Body"))
}

fn invalid_url() -> WebhookError {
    WebhookError::InvalidUrl {
        url: "not a url".into(),
        reason: "relative URL without a base".into(),
    }
}

mod kind {
    use super::*;

    #[test]
    fn maps_every_variant() {
        let missing = WebhookError::MissingWebhookUrl { var: "X".into() };
        let transport = WebhookError::Transport(HttpError::Timeout);
        let status = WebhookError::UnexpectedStatus {
            status: http::StatusCode::BAD_GATEWAY,
            body: None,
        };
        let malformed = WebhookError::MalformedBody {
            status: http::StatusCode::OK,
            source: serde_json::from_str::<ApiError>("nope").unwrap_err(),
        };

        assert_eq!(missing.kind(), ErrorKind::MissingWebhookUrl);
        assert_eq!(invalid_url().kind(), ErrorKind::InvalidUrl);
        assert_eq!(bad_request().kind(), ErrorKind::BadRequest);
        assert_eq!(transport.kind(), ErrorKind::UnexpectedResponse);
        assert_eq!(status.kind(), ErrorKind::UnexpectedResponse);
        assert_eq!(malformed.kind(), ErrorKind::UnexpectedResponse);
    }

    #[test]
    fn error_compares_against_kind() {
        assert_eq!(bad_request(), ErrorKind::BadRequest);
        assert_ne!(bad_request(), ErrorKind::UnexpectedResponse);
    }

    #[test]
    fn config_errors_are_flagged() {
        assert!(invalid_url().is_config());
        assert!(WebhookError::MissingWebhookUrl { var: "X".into() }.is_config());
        assert!(!bad_request().is_config());
    }

    #[test]
    fn http_error_converts_to_transport() {
        let err: WebhookError = HttpError::InvalidUrl("x".into()).into();

        assert!(matches!(err, WebhookError::Transport(HttpError::InvalidUrl(_))));
    }
}

mod api_error {
    use super::*;

    #[test]
    fn only_bad_request_carries_payload() {
        assert_eq!(
            bad_request().api_error(),
            Some(&ApiError::new(50035, "Invalid Form Body"))
        );
        assert!(invalid_url().api_error().is_none());
    }

    #[test]
    fn decodes_from_endpoint_json() {
        let api_error: ApiError =
            serde_json::from_str(r#"{"code":50035,"message":"Invalid Form Body"}"#).unwrap();

        assert_eq!(api_error, ApiError::new(50035, "Invalid Form Body"));
    }

    #[test]
    fn display_includes_code_and_message() {
        let text = bad_request().to_string();

        assert!(text.contains("Invalid Form Body"));
        assert!(text.contains("50035"));
    }
}

#[test]
fn invalid_url_display_names_url_and_reason() {
    let text = invalid_url().to_string();

    assert!(text.contains("not a url"));
    assert!(text.contains("relative URL without a base"));
}
