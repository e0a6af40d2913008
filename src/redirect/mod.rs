//! Redirect rendering subsystem.
//!
//! # Data Flow
//! ```text
//! verified destination
//!     → policy.rs (escape, denylist, default scheme) → SafeUrl
//!     → page.rs   (meta refresh + fallback link)
//! ```
//!
//! # Design Decisions
//! - The page renderer only takes a `SafeUrl`, so an unescaped destination
//!   cannot reach the template
//! - Escaping happens before the denylist check and exactly once

pub mod escape;
pub mod page;
pub mod policy;

pub use page::{home_page, render_redirect};
pub use policy::{apply, SafeUrl};
