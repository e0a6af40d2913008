//! Combines signature schemes with OR semantics.

use crate::signature::scheme::{HmacSha256Scheme, LegacySha1, SignatureScheme};

/// Ordered list of accepted schemes.
///
/// A destination is authorized if any scheme accepts the signature.
/// Retiring a scheme means dropping it from this list.
#[derive(Debug)]
pub struct SignatureVerifier {
    schemes: Vec<Box<dyn SignatureScheme>>,
}

impl SignatureVerifier {
    pub fn new(schemes: Vec<Box<dyn SignatureScheme>>) -> Self {
        Self { schemes }
    }

    /// Name of the first scheme that accepts the signature, if any.
    pub fn accepting_scheme(
        &self,
        destination: &str,
        signature: &str,
        secret: &str,
    ) -> Option<&'static str> {
        self.schemes
            .iter()
            .find(|s| s.verify(destination, signature, secret))
            .map(|s| s.name())
    }

    pub fn verify(&self, destination: &str, signature: &str, secret: &str) -> bool {
        self.accepting_scheme(destination, signature, secret).is_some()
    }

    pub fn schemes(&self) -> impl Iterator<Item = &dyn SignatureScheme> {
        self.schemes.iter().map(|s| s.as_ref())
    }
}

impl Default for SignatureVerifier {
    /// Current HMAC scheme first, legacy SHA-1 second.
    fn default() -> Self {
        Self::new(vec![Box::new(HmacSha256Scheme), Box::new(LegacySha1)])
    }
}

/// Returns true if `signature` authorizes `destination` under any default scheme.
pub fn validate(destination: &str, signature: &str, secret: &str) -> bool {
    SignatureVerifier::default().verify(destination, signature, secret)
}
