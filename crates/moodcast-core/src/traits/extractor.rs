use std::future::Future;

use crate::errors::MoodcastResult;
use crate::models::LlmExtractionResponse;

/// Text-understanding collaborator: one call turns a batch of journal
/// texts into structured pattern candidates. The response is untrusted;
/// validation lives in the extraction adapter, not here.
pub trait IPatternExtractor: Send + Sync {
    fn extract_patterns(
        &self,
        entry_texts: &[String],
    ) -> impl Future<Output = MoodcastResult<LlmExtractionResponse>> + Send;
}
