use base64::Engine;
use flate2::{write::GzEncoder, Compression};
use quickcheck_macros::quickcheck;
use secom_content::{
    decode, DataResponse, EnvelopeErrorKind, ExchangeMetadata, GetResponse,
};
use std::io::Write;

fn encode(data: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(data)
}

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn plain(data: &[u8]) -> DataResponse {
    DataResponse {
        data: encode(data),
        exchange_metadata: ExchangeMetadata::default(),
    }
}

fn compressed(data: &[u8]) -> DataResponse {
    DataResponse {
        data: encode(&gzip(data)),
        exchange_metadata: ExchangeMetadata {
            compression_flag: true,
            data_protection: false,
        },
    }
}

#[test]
fn wire_response_decodes_end_to_end() {
    let response = GetResponse::from_json(&format!(
        r#"{{
            "dataResponseObject": {{
                "data": "{}",
                "exchangeMetadata": {{
                    "compressionFlag": false,
                    "dataProtection": false
                }}
            }}
        }}"#,
        encode(b"<r><v>1</v></r>")
    ))
    .unwrap();

    let envelope = response.data_response_object.unwrap();
    assert_eq!(envelope.decode().unwrap(), b"<r><v>1</v></r>");
}

#[test]
fn compressed_wire_response_decodes_end_to_end() {
    let payload = b"<DataSet><member><BeaconCardinal/></member></DataSet>";
    assert_eq!(compressed(payload).decode().unwrap(), payload);
}

#[test]
fn large_payload_is_not_truncated() {
    let payload = "<member><id>0123456789</id></member>".repeat(50_000);
    let decoded = compressed(payload.as_bytes()).decode().unwrap();
    assert_eq!(decoded.len(), payload.len());
    assert_eq!(decoded, payload.as_bytes());
}

#[test]
fn protected_envelope_reports_unsupported_protection() {
    let mut envelope = plain(b"<a></a>");
    envelope.exchange_metadata.data_protection = true;
    let err = envelope.decode().unwrap_err();
    assert!(matches!(
        err.kind(),
        EnvelopeErrorKind::UnsupportedProtection
    ));
    assert_eq!(
        err.to_string(),
        "payload is encrypted and decryption is not supported"
    );
}

#[test]
fn corrupt_base64_reports_invalid_encoding() {
    let envelope = DataResponse {
        data: String::from("%%%not-base64%%%"),
        exchange_metadata: ExchangeMetadata::default(),
    };
    let err = envelope.decode().unwrap_err();
    assert!(matches!(err.kind(), EnvelopeErrorKind::InvalidEncoding(_)));
}

#[test]
fn corrupt_gzip_reports_decompression_failed() {
    // a valid gzip header followed by an invalid deflate block
    let mut bytes = gzip(b"<a>corrupt me</a>")[..10].to_vec();
    bytes.extend_from_slice(&[0xff; 8]);
    let envelope = DataResponse {
        data: encode(&bytes),
        exchange_metadata: ExchangeMetadata {
            compression_flag: true,
            data_protection: false,
        },
    };

    let err = envelope.decode().unwrap_err();
    assert!(matches!(
        err.kind(),
        EnvelopeErrorKind::DecompressionFailed(_)
    ));
}

#[quickcheck]
fn plain_decode_matches_base64_decode(data: Vec<u8>) -> bool {
    decode(&encode(&data), &ExchangeMetadata::default()).unwrap() == data
}

#[quickcheck]
fn compressed_decode_round_trips(data: Vec<u8>) -> bool {
    compressed(&data).decode().unwrap() == data
}

#[quickcheck]
fn protection_always_wins(data: Vec<u8>, compression_flag: bool) -> bool {
    let metadata = ExchangeMetadata {
        compression_flag,
        data_protection: true,
    };
    matches!(
        decode(&encode(&data), &metadata).unwrap_err().kind(),
        EnvelopeErrorKind::UnsupportedProtection
    )
}
