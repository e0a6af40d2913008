//! Building signed gateway links.
//!
//! The signer side of the protocol: given a destination and the shared
//! secret, produce the `v1/<signature>/<destination>` path the gateway
//! accepts.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::signature::scheme::SignatureScheme;

/// Characters that would otherwise be cut off or reinterpreted before the
/// gateway sees the path. `/` and `:` are left alone.
const DESTINATION: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode a destination for use as the tail of a gateway path.
pub fn encode_destination(destination: &str) -> String {
    utf8_percent_encode(destination, DESTINATION).to_string()
}

/// `/v1/<signature>/<encoded destination>` for `destination`.
pub fn signed_path(scheme: &dyn SignatureScheme, destination: &str, secret: &str) -> String {
    format!(
        "/v1/{}/{}",
        scheme.sign(destination, secret),
        encode_destination(destination)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::decode;
    use crate::signature::{validate, HmacSha256Scheme, LegacySha1};

    #[test]
    fn test_query_and_fragment_are_encoded() {
        assert_eq!(
            encode_destination("http://a.com/p?x=1&y=2#top"),
            "http://a.com/p%3Fx=1&y=2%23top"
        );
        assert_eq!(encode_destination("http://a.com/100%"), "http://a.com/100%25");
    }

    #[test]
    fn test_signed_path_decodes_back() {
        let destinations = [
            "http://www.mozilla.org/?foo=bar&boo=baz",
            "www.example.com",
            "https://example.com/a b/ü?q=\"x\"#frag",
            "https://example.com/50%25off",
        ];
        for dest in destinations {
            for scheme in [&HmacSha256Scheme as &dyn SignatureScheme, &LegacySha1] {
                let path = signed_path(scheme, dest, "secret");
                let signed = decode(&path).unwrap();
                assert_eq!(signed.destination, dest);
                assert!(validate(&signed.destination, &signed.signature, "secret"));
            }
        }
    }
}
