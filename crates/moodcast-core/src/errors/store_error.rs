/// Pattern-store errors. Local failures are the only ones callers may
/// ever see; remote failures are advisory and logged, not surfaced.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("local storage write failed: {reason}")]
    LocalWrite { reason: String },

    #[error("local storage read failed: {reason}")]
    LocalRead { reason: String },

    #[error("remote store unavailable: {reason}")]
    RemoteUnavailable { reason: String },

    #[error("pattern not found: {id}")]
    NotFound { id: String },
}
