//! Wire types for the text-understanding collaborator's response.
//!
//! Every field is optional: the response is untrusted structured output
//! from an LLM, modeled as parse-then-validate. Deserialization accepts
//! anything shape-compatible; the extraction adapter owns validation and
//! drops or clamps whatever is malformed.

use serde::{Deserialize, Serialize};

/// The full structured response of one extraction call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmExtractionResponse {
    /// At most one occupation classification per batch.
    #[serde(default)]
    pub occupation: Option<LlmOccupation>,
    #[serde(default)]
    pub significant_dates: Vec<LlmSignificantDate>,
    #[serde(default)]
    pub weekday_patterns: Vec<LlmWeekdayPattern>,
    #[serde(default)]
    pub trigger_groups: Vec<LlmTriggerGroup>,
    /// Optional compressed free-text summary of the analyzed entries.
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmOccupation {
    pub occupation: Option<String>,
    pub confidence: Option<f64>,
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmSignificantDate {
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub description: Option<String>,
    /// "positive" or "negative"; wins over the impact sign when they
    /// disagree.
    pub polarity: Option<String>,
    pub impact: Option<f64>,
    pub confidence: Option<f64>,
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmWeekdayPattern {
    pub day_name: Option<String>,
    pub description: Option<String>,
    pub impact: Option<f64>,
    pub confidence: Option<f64>,
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmTriggerGroup {
    #[serde(default)]
    pub keywords: Vec<String>,
    pub description: Option<String>,
    pub impact: Option<f64>,
    pub confidence: Option<f64>,
    pub snippet: Option<String>,
}
