//! Signature schemes.
//!
//! # Responsibilities
//! - Compute the lowercase-hex digest a signer would attach to a destination
//! - Compare a presented signature against that digest
//!
//! # Design Decisions
//! - Comparison is exact, case-sensitive string equality
//! - Not constant-time; links are public once issued

use hmac::{Hmac, Mac};
use sha1::{Digest, Sha1};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// One way of proving a destination was authorized.
pub trait SignatureScheme: Send + Sync + std::fmt::Debug {
    /// Short name used in logs and metrics.
    fn name(&self) -> &'static str;

    /// Signature a trusted signer would produce for `destination`.
    fn sign(&self, destination: &str, secret: &str) -> String;

    /// Returns true if `signature` authorizes `destination` under `secret`.
    fn verify(&self, destination: &str, signature: &str, secret: &str) -> bool {
        self.sign(destination, secret) == signature
    }
}

/// `hex(SHA1(secret ++ destination))`, kept for links signed before the
/// move to HMAC.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacySha1;

impl SignatureScheme for LegacySha1 {
    fn name(&self) -> &'static str {
        "sha1"
    }

    fn sign(&self, destination: &str, secret: &str) -> String {
        let mut hasher = Sha1::new();
        hasher.update(secret.as_bytes());
        hasher.update(destination.as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// `hex(HMAC-SHA256(key = secret, message = destination))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha256Scheme;

impl SignatureScheme for HmacSha256Scheme {
    fn name(&self) -> &'static str {
        "hmac-sha256"
    }

    fn sign(&self, destination: &str, secret: &str) -> String {
        // HMAC accepts keys of any length
        let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
            Ok(m) => m,
            Err(_) => return String::new(),
        };
        mac.update(destination.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn verify(&self, destination: &str, signature: &str, secret: &str) -> bool {
        let expected = self.sign(destination, secret);
        !expected.is_empty() && expected == signature
    }
}
