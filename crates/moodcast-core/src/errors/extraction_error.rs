/// Text-understanding collaborator errors. A failed call means the batch
/// is skipped and retried later; a malformed response is rejected at the
/// adapter boundary candidate by candidate.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("extraction provider unavailable: {reason}")]
    ProviderUnavailable { reason: String },

    #[error("malformed extraction response: {reason}")]
    MalformedResponse { reason: String },
}
