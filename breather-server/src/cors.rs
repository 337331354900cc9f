//! Blanket allow-all CORS for the browser frontend.
//!
//! The arcade is served from a different origin than the API, so every
//! response carries the permissive header set, and OPTIONS preflights are
//! answered with 204 before any route logic runs.

use axum::extract::Request;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Middleware layered over the whole router. Preflights short-circuit;
/// everything else is delegated and stamped on the way out.
pub async fn allow_all(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut res = StatusCode::NO_CONTENT.into_response();
        apply(res.headers_mut());
        return res;
    }

    let mut res = next.run(req).await;
    apply(res.headers_mut());
    res
}

fn apply(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );
}
