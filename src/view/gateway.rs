use crate::envelope::DataResponse;

/// Reference identifying the dataset whose content is requested
pub type DatasetRef = uuid::Uuid;

/// Collaborator interface for the content-retrieval endpoint
///
/// An implementation wraps however the surrounding application reaches
/// the service (HTTP client, test fixture, cache). Zero-or-one envelope
/// records exist per dataset reference: `Ok(None)` is the legitimate
/// "no data" outcome, not an error.
pub trait ContentGateway {
    /// Fetches the content envelope for the given dataset, if any
    fn fetch(&self, reference: &DatasetRef) -> Result<Option<DataResponse>, GatewayError>;
}

/// A failure reported by the content-retrieval collaborator
///
/// Carries the human-readable message the transport surfaced (the AtoN
/// service reports its reason in an error header on non-2xx responses).
#[derive(Debug, Clone)]
pub struct GatewayError {
    message: String,
}

impl GatewayError {
    /// Creates an error from the transport's message
    pub fn new(message: impl Into<String>) -> Self {
        GatewayError {
            message: message.into(),
        }
    }

    /// The human-readable failure message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::error::Error for GatewayError {}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
