//! HTTP server setup and the gateway handler.
//!
//! # Responsibilities
//! - Create the Axum router with the gateway handler
//! - Wire up middleware (tracing, timeout, request ID, security headers)
//! - Dispatch reserved paths before any signature work
//! - Verify signed paths and render the redirect page
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Bytes,
    extract::State,
    http::Uri,
    response::{Html, IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{GatewayConfig, SecretKey};
use crate::error::GatewayError;
use crate::http::request::{make_span, MakeRequestUuid, X_REQUEST_ID};
use crate::http::response::{reserved_response, with_security_headers};
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::redirect::{self, render_redirect};
use crate::routing::{decoder, ReservedPath, SignedPath};
use crate::signature::SignatureVerifier;

/// Application state injected into handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub secret: Arc<SecretKey>,
    pub verifier: Arc<SignatureVerifier>,
    pub version: Bytes,
    pub debug: bool,
}

impl AppState {
    pub fn new(config: &GatewayConfig, version: Bytes) -> Self {
        Self {
            secret: Arc::new(config.signing.secret_key.clone()),
            verifier: Arc::new(SignatureVerifier::default()),
            version,
            debug: config.observability.debug,
        }
    }
}

/// HTTP server for the redirect gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and version
    /// document.
    pub fn new(config: GatewayConfig, version: Bytes) -> Self {
        let state = AppState::new(&config, version);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        let router = Router::new()
            .fallback(gateway_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        let router = if config.security.enable_headers {
            with_security_headers(router)
        } else {
            router
        };

        router
            .layer(TraceLayer::new_for_http().make_span_with(make_span))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// The fully layered router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Entry point for every request.
async fn gateway_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let start = Instant::now();

    let path = match decoder::percent_decode_path(uri.path()) {
        Ok(p) => p,
        Err(error) => return reject(&state, Rejection { error, signed: None }, start),
    };

    if let Some(reserved) = ReservedPath::from_path(&path) {
        metrics::record_request(reserved.as_label(), start);
        return reserved_response(reserved, &state.version);
    }

    match bounce(&state, &path) {
        Ok(page) => {
            metrics::record_request(metrics::OUTCOME_REDIRECT, start);
            Html(page).into_response()
        }
        Err(rejection) => reject(&state, rejection, start),
    }
}

/// A refused request, with the signed parts when the path could be split.
struct Rejection {
    error: GatewayError,
    signed: Option<SignedPath>,
}

/// Verify a decoded path and render its redirect page.
fn bounce(state: &AppState, path: &str) -> Result<String, Rejection> {
    let (signature, destination) = decoder::split_signed_path(path)
        .map_err(|error| Rejection { error, signed: None })?;
    let rejection = |error: GatewayError| Rejection {
        error,
        signed: Some(SignedPath {
            signature: signature.to_string(),
            destination: destination.to_string(),
        }),
    };

    match state
        .verifier
        .accepting_scheme(destination, signature, state.secret.expose())
    {
        Some(scheme) => tracing::debug!(scheme, "Signature accepted"),
        None => return Err(rejection(GatewayError::SignatureMismatch)),
    }

    let url = redirect::apply(destination).map_err(rejection)?;
    Ok(render_redirect(&url))
}

fn reject(state: &AppState, rejection: Rejection, start: Instant) -> Response {
    let Rejection { error, signed } = rejection;
    if state.debug {
        match signed {
            Some(signed) => tracing::debug!(
                reason = %error,
                destination = %signed.destination,
                signature = %signed.signature,
                "Rejected redirect"
            ),
            None => tracing::debug!(reason = %error, "Rejected redirect"),
        }
    }
    metrics::record_request(error.as_label(), start);
    error.into_response()
}
