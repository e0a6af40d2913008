//! Signed path decoding.
//!
//! # Responsibilities
//! - Percent-decode the request path
//! - Split `<prefix>v1/<signature>/<destination>` into its two captures
//!
//! # Design Decisions
//! - No regex: scan for the `v1/` marker and cut, O(n) in the path length
//! - The first `v1/` followed by a non-empty signature segment wins, so a
//!   destination may itself contain `v1/`
//! - The destination is everything after the separating `/`, untouched

use percent_encoding::percent_decode_str;

use crate::error::GatewayError;

const MARKER: &str = "v1/";

/// Signature and destination pulled out of a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPath {
    pub signature: String,
    pub destination: String,
}

/// Decode percent-escapes in a raw request path.
///
/// Malformed escapes and non UTF-8 results are rejected.
pub fn percent_decode_path(raw: &str) -> Result<String, GatewayError> {
    let bytes = raw.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .map(|pair| pair.iter().all(u8::is_ascii_hexdigit))
                .unwrap_or(false);
            if !valid {
                return Err(GatewayError::MalformedPath);
            }
        }
    }

    percent_decode_str(raw)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| GatewayError::MalformedPath)
}

/// Split an already decoded path into `(signature, destination)`.
pub fn split_signed_path(path: &str) -> Result<(&str, &str), GatewayError> {
    for (idx, _) in path.match_indices(MARKER) {
        let rest = &path[idx + MARKER.len()..];
        let Some(slash) = rest.find('/') else {
            // No separator after this marker, so none after any later one either.
            break;
        };
        if slash == 0 {
            continue;
        }

        let signature = &rest[..slash];
        let destination = &rest[slash + 1..];
        if destination.is_empty() {
            return Err(GatewayError::MalformedPath);
        }
        return Ok((signature, destination));
    }

    Err(GatewayError::MalformedPath)
}

/// Decode a raw request path into a [`SignedPath`].
pub fn decode(raw_path: &str) -> Result<SignedPath, GatewayError> {
    let path = percent_decode_path(raw_path)?;
    let (signature, destination) = split_signed_path(&path)?;
    Ok(SignedPath {
        signature: signature.to_string(),
        destination: destination.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let (sig, dest) = split_signed_path("/v1/abc123/http://a.com/").unwrap();
        assert_eq!(sig, "abc123");
        assert_eq!(dest, "http://a.com/");
    }

    #[test]
    fn test_arbitrary_prefix() {
        let (sig, dest) = split_signed_path("/outgoing/prefix/v1/abc/www.a.com").unwrap();
        assert_eq!(sig, "abc");
        assert_eq!(dest, "www.a.com");

        let (sig, _) = split_signed_path("xv1/abc/d").unwrap();
        assert_eq!(sig, "abc");
    }

    #[test]
    fn test_destination_keeps_everything() {
        let (_, dest) =
            split_signed_path("/v1/s/http://a.com/v1/x/y?foo=bar&boo=baz:1").unwrap();
        assert_eq!(dest, "http://a.com/v1/x/y?foo=bar&boo=baz:1");
    }

    #[test]
    fn test_skips_marker_with_empty_signature() {
        let (sig, dest) = split_signed_path("/v1//v1/sig/dest").unwrap();
        assert_eq!(sig, "sig");
        assert_eq!(dest, "dest");
    }

    #[test]
    fn test_rejects_missing_parts() {
        assert_eq!(split_signed_path("/"), Err(GatewayError::MalformedPath));
        assert_eq!(split_signed_path("/foo"), Err(GatewayError::MalformedPath));
        assert_eq!(split_signed_path("/v1/"), Err(GatewayError::MalformedPath));
        assert_eq!(split_signed_path("/v1/sig"), Err(GatewayError::MalformedPath));
        assert_eq!(split_signed_path("/v1/sig/"), Err(GatewayError::MalformedPath));
        assert_eq!(split_signed_path("/v2/sig/dest"), Err(GatewayError::MalformedPath));
    }

    #[test]
    fn test_percent_decoding() {
        let signed = decode("/v1/abc/http%3A//www.mozilla.org/%3Ffoo=bar&boo=baz").unwrap();
        assert_eq!(signed.signature, "abc");
        assert_eq!(signed.destination, "http://www.mozilla.org/?foo=bar&boo=baz");
    }

    #[test]
    fn test_encoded_slash_counts_as_separator() {
        let signed = decode("/v1%2Fabc%2Fwww.a.com").unwrap();
        assert_eq!(signed.signature, "abc");
        assert_eq!(signed.destination, "www.a.com");
    }

    #[test]
    fn test_plus_is_literal() {
        let signed = decode("/v1/abc/a+b").unwrap();
        assert_eq!(signed.destination, "a+b");
    }

    #[test]
    fn test_bad_escapes_rejected() {
        assert_eq!(decode("/v1/abc/%zz"), Err(GatewayError::MalformedPath));
        assert_eq!(decode("/v1/abc/50%"), Err(GatewayError::MalformedPath));
        assert_eq!(decode("/v1/abc/%ff%fe"), Err(GatewayError::MalformedPath));
    }

    #[test]
    fn test_latin1_destination_rejected() {
        // A Latin-1 é is not UTF-8; such links cannot be signed for this gateway.
        assert_eq!(decode("/v1/abc/http://example.com/caf%E9"), Err(GatewayError::MalformedPath));
        assert_eq!(
            decode("/v1/abc/http://example.com/caf%C3%A9").unwrap().destination,
            "http://example.com/café"
        );
    }
}
