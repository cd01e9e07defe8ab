use crate::envelope::{
    errors::{EnvelopeError, EnvelopeErrorKind},
    model::ExchangeMetadata,
};
use base64::Engine;
use std::io::Read;

/// Decodes an envelope payload into its raw bytes
///
/// The payload is base64 decoded and, when the metadata flags it as
/// compressed, inflated as a gzip stream. Protected payloads are
/// rejected up front: there is no decryption scheme to apply, and
/// passing ciphertext through as if it were content would only produce
/// garbage downstream.
pub fn decode(data: &str, metadata: &ExchangeMetadata) -> Result<Vec<u8>, EnvelopeError> {
    if metadata.data_protection {
        return Err(EnvelopeErrorKind::UnsupportedProtection.into());
    }

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(data)
        .map_err(EnvelopeErrorKind::InvalidEncoding)?;

    if metadata.compression_flag {
        inflate(&decoded)
    } else {
        Ok(decoded)
    }
}

fn inflate(data: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
    let mut decoder = flate2::read::GzDecoder::new(data);
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .map_err(EnvelopeErrorKind::DecompressionFailed)?;
    Ok(inflated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    fn encode(data: &[u8]) -> String {
        base64::engine::general_purpose::STANDARD.encode(data)
    }

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn plain_payload_passes_through() {
        let metadata = ExchangeMetadata::default();
        let decoded = decode(&encode(b"<a></a>"), &metadata).unwrap();
        assert_eq!(decoded, b"<a></a>");
    }

    #[test]
    fn compressed_payload_round_trips() {
        let metadata = ExchangeMetadata {
            compression_flag: true,
            data_protection: false,
        };
        let decoded = decode(&encode(&gzip(b"<a><b>hi</b></a>")), &metadata).unwrap();
        assert_eq!(decoded, b"<a><b>hi</b></a>");
    }

    #[test]
    fn malformed_base64_is_invalid_encoding() {
        let metadata = ExchangeMetadata::default();
        let err = decode("not base64!", &metadata).unwrap_err();
        assert!(matches!(err.kind(), EnvelopeErrorKind::InvalidEncoding(_)));
    }

    #[test]
    fn truncated_gzip_is_decompression_failed() {
        let metadata = ExchangeMetadata {
            compression_flag: true,
            data_protection: false,
        };
        let mut compressed = gzip(b"<a>truncate me</a>");
        compressed.truncate(compressed.len() / 2);
        let err = decode(&encode(&compressed), &metadata).unwrap_err();
        assert!(matches!(
            err.kind(),
            EnvelopeErrorKind::DecompressionFailed(_)
        ));
    }

    #[test]
    fn uncompressed_bytes_with_compression_flag_fail() {
        let metadata = ExchangeMetadata {
            compression_flag: true,
            data_protection: false,
        };
        let err = decode(&encode(b"<a>plain</a>"), &metadata).unwrap_err();
        assert!(matches!(
            err.kind(),
            EnvelopeErrorKind::DecompressionFailed(_)
        ));
    }

    #[test]
    fn protected_payload_is_rejected_before_decoding() {
        let metadata = ExchangeMetadata {
            compression_flag: false,
            data_protection: true,
        };

        // even a payload that is not valid base64 reports protection
        let err = decode("not base64!", &metadata).unwrap_err();
        assert!(matches!(
            err.kind(),
            EnvelopeErrorKind::UnsupportedProtection
        ));
    }

    #[test]
    fn protection_takes_precedence_over_compression() {
        let metadata = ExchangeMetadata {
            compression_flag: true,
            data_protection: true,
        };
        let err = decode(&encode(&gzip(b"<a></a>")), &metadata).unwrap_err();
        assert!(matches!(
            err.kind(),
            EnvelopeErrorKind::UnsupportedProtection
        ));
    }
}
