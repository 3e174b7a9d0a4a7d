// Candidate text encodings for OneTab exports

use encoding_rs::{UTF_8, WINDOWS_1252};
use serde::Serialize;
use std::fmt;

/// Byte values Windows-1252 leaves unassigned.
const WINDOWS_1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextEncoding {
    Utf8,
    Windows1252,
    Latin1,
}

impl TextEncoding {
    /// Encodings tried when loading an export, in priority order.
    pub const CANDIDATES: [TextEncoding; 3] = [
        TextEncoding::Utf8,
        TextEncoding::Windows1252,
        TextEncoding::Latin1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Windows1252 => "cp1252",
            TextEncoding::Latin1 => "latin-1",
        }
    }

    /// Strictly decode the whole buffer, or `None` if any byte sequence is
    /// invalid under this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                UTF_8
                    .decode_without_bom_handling_and_without_replacement(body)
                    .map(|text| text.into_owned())
            }
            TextEncoding::Windows1252 => {
                // encoding_rs maps the unassigned bytes to C1 controls
                if bytes.iter().any(|b| WINDOWS_1252_UNDEFINED.contains(b)) {
                    return None;
                }
                WINDOWS_1252
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(|text| text.into_owned())
            }
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }

    /// Comma separated names, used in error messages.
    pub fn list(encodings: &[TextEncoding]) -> String {
        encodings
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode with the first candidate that accepts the entire buffer.
pub fn decode_first(bytes: &[u8], candidates: &[TextEncoding]) -> Option<(TextEncoding, String)> {
    candidates
        .iter()
        .find_map(|enc| enc.decode(bytes).map(|text| (*enc, text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_strips_byte_order_mark() {
        let bytes = b"\xEF\xBB\xBFhttps://example.com";
        assert_eq!(
            TextEncoding::Utf8.decode(bytes).as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn utf8_rejects_lone_continuation_byte() {
        assert!(TextEncoding::Utf8.decode(b"caf\xE9").is_none());
    }

    #[test]
    fn windows_1252_maps_smart_quotes() {
        let decoded = TextEncoding::Windows1252.decode(b"\x93quoted\x94").unwrap();
        assert_eq!(decoded, "\u{201C}quoted\u{201D}");
    }

    #[test]
    fn windows_1252_rejects_unassigned_bytes() {
        for b in WINDOWS_1252_UNDEFINED {
            assert!(TextEncoding::Windows1252.decode(&[b'a', b]).is_none());
        }
    }

    #[test]
    fn latin1_accepts_every_byte() {
        let all: Vec<u8> = (0..=255u8).collect();
        let decoded = TextEncoding::Latin1.decode(&all).unwrap();
        assert_eq!(decoded.chars().count(), 256);
        assert_eq!(decoded.chars().nth(0x81), Some('\u{81}'));
    }

    #[test]
    fn decode_first_picks_earliest_success() {
        let (enc, _) = decode_first(b"plain ascii", &TextEncoding::CANDIDATES).unwrap();
        assert_eq!(enc, TextEncoding::Utf8);

        let (enc, text) = decode_first(b"caf\xE9", &TextEncoding::CANDIDATES).unwrap();
        assert_eq!(enc, TextEncoding::Windows1252);
        assert_eq!(text, "caf\u{e9}");

        let (enc, _) = decode_first(b"\x81", &TextEncoding::CANDIDATES).unwrap();
        assert_eq!(enc, TextEncoding::Latin1);
    }

    #[test]
    fn decode_first_with_no_match() {
        assert!(decode_first(b"\x81", &[TextEncoding::Utf8, TextEncoding::Windows1252]).is_none());
        assert!(decode_first(b"anything", &[]).is_none());
    }

    #[test]
    fn list_joins_names() {
        assert_eq!(
            TextEncoding::list(&TextEncoding::CANDIDATES),
            "utf-8, cp1252, latin-1"
        );
    }
}
