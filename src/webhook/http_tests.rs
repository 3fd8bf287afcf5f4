//! Tests for HTTP request/response types.

use super::{APPLICATION_JSON, HttpRequest, HttpResponse};

fn url() -> url::Url {
    url::Url::parse("https://discord.com/api/webhooks/1/token").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn post_creates_bare_post_request() {
        let req = HttpRequest::post(url());

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.url, url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
        assert!(req.content_type().is_none());
    }

    #[test]
    fn with_json_body_sets_body_and_content_type() {
        let req = HttpRequest::post(url()).with_json_body(b"{}".to_vec());

        assert_eq!(req.body.as_deref(), Some(&b"{}"[..]));
        assert_eq!(req.content_type(), Some(APPLICATION_JSON));
    }

    #[test]
    fn with_json_body_does_not_duplicate_content_type() {
        let req = HttpRequest::post(url())
            .with_json_body(b"{}".to_vec())
            .with_json_body(b"[]".to_vec());

        assert_eq!(
            req.headers.get_all(http::header::CONTENT_TYPE).iter().count(),
            1
        );
        assert_eq!(req.body.as_deref(), Some(&b"[]"[..]));
    }

    #[test]
    fn with_query_appends_pairs() {
        let req = HttpRequest::post(url())
            .with_query("wait", "true")
            .with_query("thread_id", "7");

        assert_eq!(req.url.query(), Some("wait=true&thread_id=7"));
    }

    #[test]
    fn with_query_encodes_values() {
        let req = HttpRequest::post(url()).with_query("name", "a b&c");

        assert_eq!(req.url.query(), Some("name=a+b%26c"));
    }
}

mod http_response {
    use super::*;

    fn response(body: &[u8]) -> HttpResponse {
        HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), body.to_vec())
    }

    #[test]
    fn empty_body_is_empty() {
        assert!(response(b"").has_empty_body());
    }

    #[test]
    fn whitespace_body_is_empty() {
        assert!(response(b" \r\n\t").has_empty_body());
    }

    #[test]
    fn json_body_is_not_empty() {
        assert!(!response(b"{}").has_empty_body());
    }

    #[test]
    fn body_text_returns_utf8() {
        assert_eq!(response(b"hello").body_text(), Some("hello"));
    }

    #[test]
    fn body_text_rejects_invalid_utf8() {
        assert_eq!(response(&[0xFF, 0xFE]).body_text(), None);
    }
}
