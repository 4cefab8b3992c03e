use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::Serialize;
use serde_json::Value;

use crate::error::TokenError;

// JWT segments are normally unpadded, but tokens copied out of other tools
// sometimes carry padding; accept both.
const URL_SAFE_FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// The three parts of a decoded compact token.
///
/// `header` and `payload` are pretty-printed JSON (2-space indent). The
/// `signature` is the third segment exactly as it appeared in the token:
/// never decoded, never validated. Decoding a token proves nothing about
/// who issued it — this type carries unverified data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedToken {
    pub header: String,
    pub payload: String,
    pub signature: String,
}

/// Decodes a compact three-segment token (JWS compact serialization, as used
/// by JWTs) without verifying its signature.
///
/// The token must split on `.` into exactly three non-empty segments or the
/// result is [`TokenError::Structure`]. The first two segments are
/// base64url-decoded, read as UTF-8, and parsed as JSON; any of those steps
/// failing yields [`TokenError::Decode`] and no partial result — header and
/// payload are either both produced or neither is.
///
/// # Example
///
/// ```rust
/// use base64::engine::general_purpose::URL_SAFE_NO_PAD;
/// use base64::Engine;
///
/// let token = format!(
///     "{}.{}.sig",
///     URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#),
///     URL_SAFE_NO_PAD.encode(r#"{"sub":"42"}"#),
/// );
/// let decoded = devsnips::decode_token(&token).unwrap();
/// assert_eq!(decoded.payload, "{\n  \"sub\": \"42\"\n}");
/// assert_eq!(decoded.signature, "sig");
/// ```
pub fn decode_token(token: &str) -> Result<DecodedToken, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
        return Err(TokenError::Structure);
    }

    let header = decode_segment(parts[0])?;
    let payload = decode_segment(parts[1])?;

    Ok(DecodedToken {
        header,
        payload,
        signature: parts[2].to_string(),
    })
}

fn decode_segment(segment: &str) -> Result<String, TokenError> {
    let bytes = URL_SAFE_FORGIVING
        .decode(segment)
        .map_err(|e| TokenError::Decode(format!("invalid base64url: {}", e)))?;
    let text = String::from_utf8(bytes)
        .map_err(|_| TokenError::Decode("decoded segment is not valid UTF-8".to_string()))?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| TokenError::Decode(format!("decoded segment is not valid JSON: {}", e)))?;
    serde_json::to_string_pretty(&value).map_err(|e| TokenError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

    fn token_of(header: &str, payload: &str, signature: &str) -> String {
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(header),
            URL_SAFE_NO_PAD.encode(payload),
            signature
        )
    }

    #[test]
    fn round_trip_preserves_json_and_signature() {
        let header = r#"{"alg":"HS256","typ":"JWT"}"#;
        let payload = r#"{"sub":"1234567890","name":"John Doe","admin":true}"#;
        let decoded = decode_token(&token_of(header, payload, "abc123-_")).unwrap();

        assert_eq!(decoded.header, crate::normalize(header));
        assert_eq!(decoded.payload, crate::normalize(payload));
        assert_eq!(decoded.signature, "abc123-_");
    }

    #[test]
    fn pretty_prints_with_two_space_indent() {
        let decoded = decode_token(&token_of(r#"{"alg":"none"}"#, r#"{"a":1}"#, "s")).unwrap();
        assert_eq!(decoded.header, "{\n  \"alg\": \"none\"\n}");
        assert_eq!(decoded.payload, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn padded_segments_decode_too() {
        let token = format!(
            "{}.{}.s",
            URL_SAFE.encode(r#"{"alg":"none"}"#),
            URL_SAFE.encode(r#"{"ok":true}"#),
        );
        let decoded = decode_token(&token).unwrap();
        assert_eq!(decoded.payload, "{\n  \"ok\": true\n}");
    }

    #[test]
    fn wrong_segment_count_is_a_structure_error() {
        assert_eq!(decode_token("onlyone").unwrap_err(), TokenError::Structure);
        assert_eq!(decode_token("a.b").unwrap_err(), TokenError::Structure);
        assert_eq!(decode_token("a.b.c.d").unwrap_err(), TokenError::Structure);
    }

    #[test]
    fn empty_segment_is_a_structure_error() {
        assert_eq!(decode_token("..sig").unwrap_err(), TokenError::Structure);
        assert_eq!(decode_token("a.b.").unwrap_err(), TokenError::Structure);
    }

    #[test]
    fn garbage_segments_are_decode_errors() {
        // "a" is one base64 character: not a decodable length.
        assert!(matches!(
            decode_token("a.b.c").unwrap_err(),
            TokenError::Decode(_)
        ));
    }

    #[test]
    fn non_utf8_bytes_are_a_decode_error() {
        let bad = URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd]);
        let token = format!("{}.{}.s", bad, URL_SAFE_NO_PAD.encode("{}"));
        assert!(matches!(decode_token(&token).unwrap_err(), TokenError::Decode(_)));
    }

    #[test]
    fn non_json_text_is_a_decode_error() {
        let token = token_of(r#"{"alg":"none"}"#, "hello there", "s");
        assert!(matches!(decode_token(&token).unwrap_err(), TokenError::Decode(_)));
    }

    #[test]
    fn bad_payload_means_no_header_either() {
        let token = token_of(r#"{"alg":"none"}"#, "not json", "s");
        assert!(decode_token(&token).is_err());
    }
}
