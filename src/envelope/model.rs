use crate::envelope::{
    decoder,
    errors::{EnvelopeError, EnvelopeErrorKind},
};
use serde::Deserialize;

/// The top-level document returned by a SECOM content-retrieval request
///
/// An absent [`data_response_object`](Self::data_response_object) is a
/// legitimate "no data" outcome, not an error.
///
/// ```
/// use secom_content::GetResponse;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let response = GetResponse::from_json("{}")?;
/// assert!(response.data_response_object.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResponse {
    /// The envelope carrying the dataset content, if any matched
    #[serde(default)]
    pub data_response_object: Option<DataResponse>,

    /// How the matching entries were paged
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl GetResponse {
    /// Parses a get response from its wire-level JSON document
    pub fn from_json(data: &str) -> Result<GetResponse, EnvelopeError> {
        serde_json::from_str(data).map_err(|err| EnvelopeErrorKind::Json(err).into())
    }
}

/// The envelope wrapping one dataset's content
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse {
    /// The payload, base64 encoded
    pub data: String,

    /// Flags describing how the payload was treated before encoding
    #[serde(default)]
    pub exchange_metadata: ExchangeMetadata,
}

impl DataResponse {
    /// Decodes the envelope into the raw payload bytes
    ///
    /// Reverses the base64 encoding and, when
    /// [`compression_flag`](ExchangeMetadata::compression_flag) is set,
    /// inflates the gzip stream. The full byte sequence is returned,
    /// however large. Envelopes flagged with
    /// [`data_protection`](ExchangeMetadata::data_protection) fail with
    /// [`EnvelopeErrorKind::UnsupportedProtection`] before any decoding
    /// work.
    ///
    /// ```
    /// use secom_content::{DataResponse, ExchangeMetadata};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let envelope = DataResponse {
    ///     data: String::from("aGVsbG8="),
    ///     exchange_metadata: ExchangeMetadata::default(),
    /// };
    /// assert_eq!(envelope.decode()?, b"hello");
    /// # Ok(())
    /// # }
    /// ```
    pub fn decode(&self) -> Result<Vec<u8>, EnvelopeError> {
        decoder::decode(&self.data, &self.exchange_metadata)
    }
}

/// Exchange metadata flags attached to an envelope
///
/// Absent flags deserialize as `false`, the wire default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExchangeMetadata {
    /// The payload was gzip compressed before base64 encoding
    pub compression_flag: bool,

    /// The payload was encrypted before base64 encoding
    pub data_protection: bool,
}

/// Paging information attached to a get response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Total number of entries matching the request
    #[serde(default)]
    pub total_items: Option<u64>,

    /// Maximum number of entries returned per page
    #[serde(default)]
    pub max_items_per_page: Option<u64>,
}
