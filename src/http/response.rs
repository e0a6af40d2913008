//! Response construction.
//!
//! # Responsibilities
//! - Build the static responses for reserved paths
//! - Add security response headers (optional)
//!
//! # Design Decisions
//! - Security headers never overwrite a header the handler already set
//! - Rejections are built by `GatewayError` so every failure looks the same

use axum::{
    body::Bytes,
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Response},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::redirect::home_page;
use crate::routing::ReservedPath;

/// Static response for a reserved path.
pub fn reserved_response(path: ReservedPath, version: &Bytes) -> Response {
    match path {
        ReservedPath::Home => Html(home_page()).into_response(),
        ReservedPath::Version => (
            [(header::CONTENT_TYPE, "application/json")],
            version.clone(),
        )
            .into_response(),
        ReservedPath::Heartbeat | ReservedPath::LbHeartbeat => "OK".into_response(),
    }
}

/// Wrap `router` with `X-Content-Type-Options` and `X-Frame-Options`.
pub fn with_security_headers(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}
