/// Error type for envelope operations
#[derive(Debug)]
pub struct EnvelopeError {
    kind: EnvelopeErrorKind,
}

impl EnvelopeError {
    /// Return the specific kind of error
    pub fn kind(&self) -> &EnvelopeErrorKind {
        &self.kind
    }
}

impl From<EnvelopeErrorKind> for EnvelopeError {
    fn from(kind: EnvelopeErrorKind) -> Self {
        EnvelopeError { kind }
    }
}

/// Specific kind of envelope error
#[derive(Debug)]
pub enum EnvelopeErrorKind {
    /// The get response document is not the expected JSON shape
    Json(serde_json::Error),
    /// The payload is not valid base64
    InvalidEncoding(base64::DecodeError),
    /// The payload claimed to be gzip compressed but did not inflate
    DecompressionFailed(std::io::Error),
    /// The payload is encrypted and no decryption scheme is supported
    UnsupportedProtection,
}

impl std::error::Error for EnvelopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            EnvelopeErrorKind::Json(err) => Some(err),
            EnvelopeErrorKind::InvalidEncoding(err) => Some(err),
            EnvelopeErrorKind::DecompressionFailed(err) => Some(err),
            EnvelopeErrorKind::UnsupportedProtection => None,
        }
    }
}

impl std::fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            EnvelopeErrorKind::Json(err) => write!(f, "malformed get response: {}", err),
            EnvelopeErrorKind::InvalidEncoding(err) => {
                write!(f, "malformed base64 payload: {}", err)
            }
            EnvelopeErrorKind::DecompressionFailed(err) => {
                write!(f, "unable to inflate compressed payload: {}", err)
            }
            EnvelopeErrorKind::UnsupportedProtection => {
                write!(f, "payload is encrypted and decryption is not supported")
            }
        }
    }
}
