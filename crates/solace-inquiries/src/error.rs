use thiserror::Error;

#[derive(Debug, Error)]
pub enum InquiryClientError {
    #[error("enquiry API request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("unexpected enquiry payload: {0}")]
    Payload(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("enquiry {0} not found")]
    NotFound(String),
}
