//! JWT compact-form parser.
//!
//! Splits a token into header, payload and signature, then decodes the first
//! two from base64url into JSON. Signatures are carried through untouched and
//! never verified.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde_json::Value;
use thiserror::Error;

/// Standard alphabet, padding optional, trailing bits ignored (the way
/// browsers' `atob` accepts them).
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Why a token could not be decoded.
///
/// Variants are listed in evaluation order; `parse` reports the first one hit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("token is empty")]
    EmptyInput,

    #[error("malformed JWT: expected 3 dot-separated segments")]
    MalformedStructure,

    #[error("header decode failed")]
    HeaderDecodeFailure,

    #[error("header is not valid JSON")]
    HeaderJsonSyntax,

    #[error("payload decode failed")]
    PayloadDecodeFailure,

    #[error("payload is not valid JSON")]
    PayloadJsonSyntax,
}

/// The three segments exactly as they appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSegments {
    pub header: String,
    pub payload: String,
    pub signature: String,
}

/// A successfully decoded token.
///
/// `header` and `payload` hold whatever JSON the segments contained. A
/// conforming JWT has objects here, but arrays and scalars are passed through.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    pub header: Value,
    pub payload: Value,
    pub signature: String,
    pub raw: RawSegments,
}

pub type ParseResult = Result<DecodedToken, ParseError>;

/// Parse a compact-serialized JWT.
///
/// Never panics; every failure is reported as a [`ParseError`].
pub fn parse(token: &str) -> ParseResult {
    if token.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let segments: Vec<&str> = token.trim().split('.').collect();
    let &[header_part, payload_part, signature_part] = segments.as_slice() else {
        return Err(ParseError::MalformedStructure);
    };

    let header_text = decode_segment(header_part).ok_or(ParseError::HeaderDecodeFailure)?;
    let header: Value =
        serde_json::from_str(&header_text).map_err(|_| ParseError::HeaderJsonSyntax)?;

    let payload_text = decode_segment(payload_part).ok_or(ParseError::PayloadDecodeFailure)?;
    let payload: Value =
        serde_json::from_str(&payload_text).map_err(|_| ParseError::PayloadJsonSyntax)?;

    Ok(DecodedToken {
        header,
        payload,
        signature: signature_part.to_string(),
        raw: RawSegments {
            header: header_part.to_string(),
            payload: payload_part.to_string(),
            signature: signature_part.to_string(),
        },
    })
}

/// Decode one base64url segment into UTF-8 text.
///
/// Returns `None` for bad alphabet, bad padding, invalid UTF-8, or text that
/// decodes to nothing at all.
pub fn decode_segment(segment: &str) -> Option<String> {
    let mut base64: String = segment
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    while base64.len() % 4 != 0 {
        base64.push('=');
    }

    let bytes = LENIENT_STANDARD.decode(base64.as_bytes()).ok()?;
    let text = String::from_utf8(bytes).ok()?;

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use serde_json::json;

    fn encode(text: &str) -> String {
        URL_SAFE_NO_PAD.encode(text.as_bytes())
    }

    fn token(header: &str, payload: &str) -> String {
        format!("{}.{}.sig", encode(header), encode(payload))
    }

    #[test]
    fn test_parse_example_token() {
        let decoded = parse(crate::token::EXAMPLE_TOKEN).unwrap();
        assert_eq!(decoded.header, json!({"alg": "HS256", "typ": "JWT"}));
        assert_eq!(decoded.payload["sub"], "1234567890");
        assert_eq!(decoded.payload["name"], "John Doe");
        assert_eq!(decoded.payload["admin"], true);
        assert_eq!(decoded.signature, "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c");
        assert_eq!(decoded.raw.signature, decoded.signature);
        assert_eq!(decoded.raw.header, "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_parse_whitespace_only_is_malformed() {
        assert_eq!(parse("   "), Err(ParseError::MalformedStructure));
    }

    #[test]
    fn test_parse_wrong_segment_counts() {
        for input in ["abc", "a.b", "a.b.c.d", "a.b.c.d.e", "....", "no dots here"] {
            assert_eq!(
                parse(input),
                Err(ParseError::MalformedStructure),
                "input {input:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let input = format!("  \n{}\t ", crate::token::EXAMPLE_TOKEN);
        let decoded = parse(&input).unwrap();
        assert_eq!(decoded.header["alg"], "HS256");
        assert_eq!(decoded.raw.signature, "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c");
    }

    #[test]
    fn test_parse_round_trip() {
        let header = json!({"alg": "ES256", "kid": "key-1"});
        let payload = json!({"iss": "https://issuer", "aud": ["a", "b"], "nested": {"x": 1.5}});
        let input = token(&header.to_string(), &payload.to_string());

        let decoded = parse(&input).unwrap();
        assert_eq!(decoded.header, header);
        assert_eq!(decoded.payload, payload);
        assert_eq!(decoded.signature, "sig");
    }

    #[test]
    fn test_parse_allows_empty_signature() {
        let input = format!("{}.{}.", encode("{}"), encode("{}"));
        let decoded = parse(&input).unwrap();
        assert_eq!(decoded.signature, "");
    }

    #[test]
    fn test_parse_invalid_alphabet_by_position() {
        assert_eq!(parse("!!!.abc.sig"), Err(ParseError::HeaderDecodeFailure));

        let input = format!("{}.!!!.sig", encode(r#"{"alg":"none"}"#));
        assert_eq!(parse(&input), Err(ParseError::PayloadDecodeFailure));
    }

    #[test]
    fn test_parse_empty_header_segment_is_decode_failure() {
        let input = format!(".{}.sig", encode("{}"));
        assert_eq!(parse(&input), Err(ParseError::HeaderDecodeFailure));
    }

    #[test]
    fn test_parse_invalid_utf8_is_decode_failure() {
        let header = URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd]);
        let input = format!("{header}.{}.sig", encode("{}"));
        assert_eq!(parse(&input), Err(ParseError::HeaderDecodeFailure));
    }

    #[test]
    fn test_parse_header_json_error_is_not_masked_by_payload() {
        let input = format!("{}.!!!.sig", encode("{not json"));
        assert_eq!(parse(&input), Err(ParseError::HeaderJsonSyntax));
    }

    #[test]
    fn test_parse_payload_json_error() {
        assert_eq!(
            parse(&token(r#"{"alg":"HS256"}"#, "{not json")),
            Err(ParseError::PayloadJsonSyntax)
        );
    }

    #[test]
    fn test_parse_accepts_numbers_beyond_f64() {
        let decoded = parse(&token(r#"{"alg":"HS256"}"#, r#"{"exp":1e400}"#)).unwrap();
        assert!(decoded.payload["exp"].is_number());
        assert_eq!(decoded.payload["exp"].to_string(), "1e400");
    }

    #[test]
    fn test_parse_rejects_lone_surrogate_escape() {
        assert_eq!(
            parse(&token(r#"{"alg":"HS256"}"#, r#"{"name":"\ud800"}"#)),
            Err(ParseError::PayloadJsonSyntax)
        );
    }

    #[test]
    fn test_parse_accepts_non_object_json() {
        let decoded = parse(&token("[1,2]", "42")).unwrap();
        assert_eq!(decoded.header, json!([1, 2]));
        assert_eq!(decoded.payload, json!(42));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ParseError::EmptyInput.to_string(), "token is empty");
        assert_eq!(
            ParseError::MalformedStructure.to_string(),
            "malformed JWT: expected 3 dot-separated segments"
        );
        assert_eq!(ParseError::HeaderDecodeFailure.to_string(), "header decode failed");
        assert_eq!(ParseError::PayloadDecodeFailure.to_string(), "payload decode failed");
        assert_eq!(ParseError::HeaderJsonSyntax.to_string(), "header is not valid JSON");
        assert_eq!(ParseError::PayloadJsonSyntax.to_string(), "payload is not valid JSON");
    }

    #[test]
    fn test_decode_segment_padding_and_url_alphabet() {
        // "??>" encodes to "Pz8-" in base64url and "Pz8+" in standard base64
        assert_eq!(decode_segment("Pz8-").as_deref(), Some("??>"));
        assert_eq!(decode_segment("Pz8+").as_deref(), Some("??>"));
        assert_eq!(decode_segment("YQ").as_deref(), Some("a"));
        assert_eq!(decode_segment("YQ==").as_deref(), Some("a"));
        assert_eq!(decode_segment("YWI").as_deref(), Some("ab"));
    }

    #[test]
    fn test_decode_segment_ignores_inner_whitespace() {
        assert_eq!(decode_segment("eyJh\nIjoxfQ").as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_decode_segment_rejects_impossible_length() {
        // one leftover character can never form a byte
        assert_eq!(decode_segment("YWJjZ"), None);
    }

    #[test]
    fn test_decode_segment_empty() {
        assert_eq!(decode_segment(""), None);
    }
}
