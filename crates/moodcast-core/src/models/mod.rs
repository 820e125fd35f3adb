pub mod calendar;
pub mod context;
pub mod journal_entry;
pub mod llm;
pub mod prediction;
pub mod profile;
pub mod weather;

pub use calendar::{MoonPhase, Season};
pub use context::{ContextFactor, ContextualFactors, FactorKind};
pub use journal_entry::JournalEntry;
pub use llm::{
    LlmExtractionResponse, LlmOccupation, LlmSignificantDate, LlmTriggerGroup, LlmWeekdayPattern,
};
pub use prediction::{MoodPrediction, MoodScore, PredictionFactor};
pub use profile::UserMoodProfile;
pub use weather::{Coordinates, WeatherCondition, WeatherData, WeatherSource};
