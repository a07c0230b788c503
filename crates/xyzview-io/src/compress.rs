//! Compression support
//!
//! Turns raw file bytes into text, transparently handling gzip.

use std::io::{Error, ErrorKind, Read};

use flate2::read::GzDecoder;

/// Gzip magic bytes
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Check if a buffer is gzip compressed by looking at magic bytes
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[..2] == GZIP_MAGIC
}

/// Decode raw bytes into text
///
/// Gzip payloads are decompressed first. Invalid UTF-8 and broken gzip
/// streams are reported as `ErrorKind::InvalidData`.
pub fn decode_text(bytes: &[u8]) -> std::io::Result<String> {
    if is_gzip(bytes) {
        let mut text = String::new();
        GzDecoder::new(bytes).read_to_string(&mut text)?;
        return Ok(text);
    }

    String::from_utf8(bytes.to_vec()).map_err(|e| Error::new(ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_plain_text() {
        assert_eq!(decode_text(b"1\nc\nH 0 0 0\n").unwrap(), "1\nc\nH 0 0 0\n");
    }

    #[test]
    fn test_gzip_roundtrip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"1\nc\nH 0 0 0\n").unwrap();
        let compressed = encoder.finish().unwrap();

        assert!(is_gzip(&compressed));
        assert_eq!(decode_text(&compressed).unwrap(), "1\nc\nH 0 0 0\n");
    }

    #[test]
    fn test_invalid_utf8() {
        let err = decode_text(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_truncated_gzip() {
        assert!(decode_text(&[0x1f, 0x8b, 0x08]).is_err());
    }
}
