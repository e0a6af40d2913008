//! Signed open-redirect gateway.
//!
//! Issues a redirect page for `…/v1/<signature>/<destination>` only when the
//! signature proves a holder of the shared secret authorized the destination.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────▶ http::server ──▶ routing::reserved ──▶ static body (200)
//!                  │
//!                  ▼
//!             routing::decoder ──▶ signature::SignatureVerifier
//!                                        │
//!                                        ▼
//!                                  redirect::policy ──▶ redirect::page (200)
//!
//!     any rejection ──▶ 400 "Invalid address."
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod redirect;
pub mod routing;
pub mod signature;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
