//! Request routing subsystem.
//!
//! # Data Flow
//! ```text
//! request path
//!     → reserved.rs (home, version, heartbeats: answered directly)
//!     → decoder.rs  (percent-decode, split signature and destination)
//!     → signature verification
//! ```
//!
//! # Design Decisions
//! - Reserved paths are exact matches and never reach the verifier
//! - No regex to guarantee O(n) matching

pub mod decoder;
pub mod reserved;

pub use decoder::{decode, SignedPath};
pub use reserved::ReservedPath;
