//! Security headers applied to every response, including error pages and
//! fallback-rendered content.

use axum::http::header::{
    CONTENT_SECURITY_POLICY, HeaderName, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
};
use axum::http::HeaderValue;
use axum::response::Response;

/// Same-origin scripts only; inline styles are allowed in templates.
const CSP: &str = "default-src 'self'; \
                   script-src 'self'; \
                   style-src 'self' 'unsafe-inline'; \
                   img-src 'self' data:; \
                   frame-ancestors 'none'";

const SECURITY_HEADERS: [(HeaderName, &str); 3] = [
    (CONTENT_SECURITY_POLICY, CSP),
    (X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (X_FRAME_OPTIONS, "DENY"),
];

/// Response mapper for [`axum::middleware::map_response`].
///
/// Overrides any value a handler may have set.
pub(crate) async fn security_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
    response
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::*;

    #[tokio::test]
    async fn test_headers_added_to_error_response() {
        let response = (StatusCode::NOT_FOUND, "Page not found").into_response();

        let response = security_headers(response).await;

        assert_eq!(response.headers()[X_FRAME_OPTIONS], "DENY");
        assert_eq!(response.headers()[X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(response.headers()[CONTENT_SECURITY_POLICY], CSP);
    }

    #[tokio::test]
    async fn test_existing_header_is_overridden() {
        let response = ([(X_FRAME_OPTIONS, "SAMEORIGIN")], "body").into_response();

        let response = security_headers(response).await;

        assert_eq!(response.headers()[X_FRAME_OPTIONS], "DENY");
        assert_eq!(response.headers().get_all(X_FRAME_OPTIONS).iter().count(), 1);
    }

    #[test]
    fn test_csp_forbids_framing() {
        assert!(CSP.contains("frame-ancestors 'none'"));
        assert!(CSP.contains("script-src 'self'"));
    }
}
