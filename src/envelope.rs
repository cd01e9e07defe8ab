//! Expose data within SECOM dataset content envelopes.
//!
//! A content-retrieval request against an AtoN service yields zero or one
//! [`DataResponse`] records, each carrying the dataset payload as a base64
//! string plus [`ExchangeMetadata`] flags describing how the payload was
//! treated on the way out:
//!
//! 1. Data - The S-100 dataset serialized as XML
//! 2. Compression - Optionally gzip compressed before encoding
//! 3. Protection - Optionally encrypted (no deployed scheme exists)
//!
//! This module provides the wire model for the response JSON and the
//! decoder that reverses the treatment, exposing the raw dataset bytes in
//! a type-safe way:
//!
//! ```text
//! GetResponse
//! ├── data_response_object → Option<DataResponse> (absence is "no data")
//! └── pagination → Option<Pagination>
//!
//! DataResponse::decode
//! ├── base64 decode (standard alphabet, padded)
//! ├── gzip inflate when compression_flag is set
//! └── UnsupportedProtection when data_protection is set
//! ```

mod decoder;
mod errors;
mod model;

pub use decoder::*;
pub use errors::*;
pub use model::*;
