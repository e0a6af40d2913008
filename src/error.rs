//! Request rejection reasons.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Body returned for every rejected request.
pub const INVALID_ADDRESS: &str = "Invalid address.";

/// Why a redirect request was refused.
///
/// The variants only exist for logs and metrics. Callers always see the same
/// status and body, so a bad path cannot be told apart from a bad signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Path does not have the `v1/<signature>/<destination>` shape.
    #[error("malformed path")]
    MalformedPath,

    /// No signature scheme accepted the signature.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// Destination uses a denylisted scheme.
    #[error("unsafe scheme")]
    UnsafeScheme,
}

impl GatewayError {
    /// Label used for the `outcome` metric.
    pub fn as_label(&self) -> &'static str {
        match self {
            GatewayError::MalformedPath => "malformed_path",
            GatewayError::SignatureMismatch => "signature_mismatch",
            GatewayError::UnsafeScheme => "unsafe_scheme",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, INVALID_ADDRESS).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_rejections_look_identical() {
        for err in [
            GatewayError::MalformedPath,
            GatewayError::SignatureMismatch,
            GatewayError::UnsafeScheme,
        ] {
            let resp = err.into_response();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
            assert_eq!(&body[..], INVALID_ADDRESS.as_bytes());
        }
    }
}
