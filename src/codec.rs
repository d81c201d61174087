//! Binary spectral codec
//!
//! Library documents store the m/z and abundance arrays of every spectrum as
//! Base64 text. Underneath the text is a tightly packed array of 64-bit
//! IEEE-754 floats in the host's native byte order, with no compression and
//! no padding between values. Decoding runs in two stages:
//!
//! 1. Base64 text to bytes. Decoding is lenient: the first symbol outside the
//!    64-symbol alphabet (padding `=` and whitespace included) ends the stream
//!    instead of failing it.
//! 2. Bytes to `f64`, taking consecutive 8-byte windows. A trailing remainder
//!    shorter than 8 bytes is dropped.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::prelude::*;
use byteorder::{ByteOrder, NativeEndian};

/// Engine used once the symbol stream has been cut at its first invalid symbol
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Size in bytes of one encoded value
pub const VALUE_SIZE: usize = std::mem::size_of::<f64>();

/// Errors that can occur while decoding a spectral array
///
/// Both variants are recoverable: the library builder drops the affected
/// spectrum and carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The field holding the encoded array is absent
    #[error("Missing binary field: {0}")]
    MissingField(String),

    /// The text is non-empty but starts with a symbol outside the alphabet
    #[error("Encoded text yields no usable bytes")]
    NoUsableBytes,
}

/// Decoder and encoder for library spectral arrays
pub struct SpectralCodec;

impl SpectralCodec {
    /// Decode a Base64 text into its `f64` values
    ///
    /// Empty text decodes to an empty array. Text that is non-empty but does
    /// not produce a single byte is reported as [`CodecError::NoUsableBytes`].
    pub fn decode(text: &str) -> Result<Vec<f64>, CodecError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let bytes = Self::decode_bytes(trimmed);
        if bytes.is_empty() {
            return Err(CodecError::NoUsableBytes);
        }

        Ok(Self::bytes_to_values(&bytes))
    }

    /// Decode an optional document field, naming the field if it is absent
    pub fn decode_field(name: &str, field: Option<&str>) -> Result<Vec<f64>, CodecError> {
        match field {
            Some(text) => Self::decode(text),
            None => Err(CodecError::MissingField(name.to_string())),
        }
    }

    /// Stage one: symbols to bytes, stopping at the first invalid symbol
    pub fn decode_bytes(text: &str) -> Vec<u8> {
        let end = text
            .bytes()
            .position(|b| !is_symbol(b))
            .unwrap_or(text.len());

        // A lone symbol in the last group carries only 6 bits
        let end = if end % 4 == 1 { end - 1 } else { end };

        // Only alphabet symbols remain and the length is never 1 mod 4, which
        // the lenient engine always accepts
        LENIENT.decode(&text[..end]).unwrap_or_default()
    }

    /// Stage two: bytes to values, dropping a trailing partial value
    pub fn bytes_to_values(bytes: &[u8]) -> Vec<f64> {
        bytes
            .chunks_exact(VALUE_SIZE)
            .map(NativeEndian::read_f64)
            .collect()
    }

    /// Encode values as native-endian bytes wrapped in padded Base64
    pub fn encode(values: &[f64]) -> String {
        let mut bytes = vec![0u8; values.len() * VALUE_SIZE];
        NativeEndian::write_f64_into(values, &mut bytes);
        Self::encode_bytes(&bytes)
    }

    /// Encode raw bytes as padded Base64
    pub fn encode_bytes(bytes: &[u8]) -> String {
        BASE64_STANDARD.encode(bytes)
    }
}

fn is_symbol(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'+' || b == b'/'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_two_values() {
        let values = [100.0, 200.0];
        let text = SpectralCodec::encode(&values);

        let decoded = SpectralCodec::decode(&text).unwrap();

        assert_eq!(decoded, values);
    }

    #[test]
    fn test_decode_empty() {
        assert!(SpectralCodec::decode("").unwrap().is_empty());
        assert!(SpectralCodec::decode("   ").unwrap().is_empty());
    }

    #[test]
    fn test_decode_drops_partial_value() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&57.05f64.to_ne_bytes());
        bytes.extend_from_slice(&[1, 2, 3]);
        let text = SpectralCodec::encode_bytes(&bytes);

        let decoded = SpectralCodec::decode(&text).unwrap();

        assert_eq!(decoded, vec![57.05]);
    }

    #[test]
    fn test_invalid_symbol_terminates_stream() {
        let mut text = SpectralCodec::encode(&[1.0, 2.0]);
        text.insert(12, '!');
        text.push_str("garbage");

        // 12 symbols survive: 9 bytes, one full value
        let bytes = SpectralCodec::decode_bytes(&text);
        assert_eq!(bytes.len(), 9);
        assert_eq!(SpectralCodec::decode(&text).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_lone_trailing_symbol_is_ignored() {
        assert_eq!(SpectralCodec::decode_bytes("QUJDR"), b"ABC");
    }

    #[test]
    fn test_every_symbol_run_length_decodes() {
        let run = "AQID".repeat(4);
        for len in 0..=run.len() {
            // 6 bits per symbol, partial bytes dropped
            assert_eq!(SpectralCodec::decode_bytes(&run[..len]).len(), len * 6 / 8);
        }
    }

    #[test]
    fn test_no_usable_bytes() {
        assert_eq!(
            SpectralCodec::decode("=AAAA"),
            Err(CodecError::NoUsableBytes)
        );
        assert_eq!(SpectralCodec::decode("Q"), Err(CodecError::NoUsableBytes));
    }

    #[test]
    fn test_missing_field() {
        let err = SpectralCodec::decode_field("MzValues", None).unwrap_err();
        assert_eq!(err, CodecError::MissingField("MzValues".to_string()));
        assert_eq!(err.to_string(), "Missing binary field: MzValues");
    }

    #[test]
    fn test_padding_is_normalized() {
        let bytes = b"spectra";
        let text = SpectralCodec::encode_bytes(bytes);
        assert!(text.ends_with('='));

        let unpadded = text.trim_end_matches('=');
        assert_eq!(SpectralCodec::decode_bytes(unpadded), bytes);
        assert_eq!(SpectralCodec::decode_bytes(&text), bytes);
    }
}
