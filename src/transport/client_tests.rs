//! Tests for `ReqwestClient`.
//!
//! Request/response behaviour of the API layer is covered with a mock
//! transport; these tests only check construction and error mapping.

use super::*;

mod reqwest_client {
    use super::*;

    #[test]
    fn default_creates_client() {
        let client = ReqwestClient::default();

        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap();
        let client = ReqwestClient::from_client(custom);

        let _ = format!("{client:?}");
    }

    #[test]
    fn client_is_send_sync_and_clone() {
        fn assert_bounds<T: Send + Sync + Clone>() {}
        assert_bounds::<ReqwestClient>();
    }

    #[tokio::test]
    async fn request_to_invalid_host_returns_error_or_proxy_response() {
        let client = ReqwestClient::new();
        let url = url::Url::parse("http://invalid.invalid.invalid/api/v1/apps").unwrap();

        let result = client.request(HttpRequest::get(url)).await;

        // Without a proxy DNS resolution fails; behind a proxy the proxy
        // answers with an error status instead.
        match result {
            Err(HttpError::Connection(_) | HttpError::Timeout) => {}
            Ok(resp) if resp.is_error() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }
}
