//! Signature verification subsystem.
//!
//! # Data Flow
//! ```text
//! (destination, signature, secret)
//!     → verifier.rs (try each scheme in order)
//!     → scheme.rs   (HMAC-SHA256, legacy SHA-1)
//!     → accepted if any scheme matches
//! ```
//!
//! # Design Decisions
//! - Each scheme is a pure function behind a trait object
//! - Both schemes stay enabled so previously issued links keep working
//! - link.rs is the signer side, used by `outgoing-sign` and tests

pub mod link;
pub mod scheme;
pub mod verifier;

pub use link::signed_path;
pub use scheme::{HmacSha256Scheme, LegacySha1, SignatureScheme};
pub use verifier::{validate, SignatureVerifier};
