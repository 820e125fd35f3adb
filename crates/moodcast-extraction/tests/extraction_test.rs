//! End-to-end tests of the extraction adapter: a canned collaborator
//! response flows through validation and into the store.

use chrono::{Duration, TimeZone, Utc};

use moodcast_core::config::ExtractionConfig;
use moodcast_core::errors::{ExtractionError, MoodcastError, MoodcastResult};
use moodcast_core::models::{
    JournalEntry, LlmExtractionResponse, LlmOccupation, LlmSignificantDate, LlmTriggerGroup,
    LlmWeekdayPattern,
};
use moodcast_core::pattern::{Occupation, PatternType, PersonalPattern};
use moodcast_core::traits::{IPatternExtractor, IRemotePatternStore};
use moodcast_extraction::ExtractionAdapter;
use moodcast_patterns::{InMemoryStorage, PatternStore};

struct NullRemote;

impl IRemotePatternStore for NullRemote {
    async fn load_patterns(&self, _user_id: &str) -> MoodcastResult<Vec<PersonalPattern>> {
        Ok(Vec::new())
    }
    async fn save_pattern(&self, _pattern: &PersonalPattern) -> MoodcastResult<()> {
        Ok(())
    }
    async fn delete_pattern(&self, _id: &str) -> MoodcastResult<()> {
        Ok(())
    }
    async fn save_occupation(
        &self,
        _user_id: &str,
        _occupation: Occupation,
    ) -> MoodcastResult<()> {
        Ok(())
    }
}

struct CannedExtractor {
    response: LlmExtractionResponse,
}

impl IPatternExtractor for CannedExtractor {
    async fn extract_patterns(
        &self,
        _entry_texts: &[String],
    ) -> MoodcastResult<LlmExtractionResponse> {
        Ok(self.response.clone())
    }
}

struct DownExtractor;

impl IPatternExtractor for DownExtractor {
    async fn extract_patterns(
        &self,
        _entry_texts: &[String],
    ) -> MoodcastResult<LlmExtractionResponse> {
        Err(ExtractionError::ProviderUnavailable {
            reason: "canned outage".into(),
        }
        .into())
    }
}

fn entry(id: &str, days_ago: i64, content: &str) -> JournalEntry {
    let base = Utc.with_ymd_and_hms(2025, 6, 20, 12, 0, 0).single().unwrap();
    JournalEntry {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        created_at: base - Duration::days(days_ago),
        content: content.to_string(),
        mood: Some(6),
        anxiety: None,
        stress: None,
        gratitude_items: None,
        tags: None,
    }
}

fn open_store(
    storage: &InMemoryStorage,
) -> PatternStore<&InMemoryStorage, NullRemote> {
    PatternStore::open("user-1", storage, std::sync::Arc::new(NullRemote)).unwrap()
}

#[tokio::test]
async fn malformed_candidates_are_rejected_without_aborting_the_batch() {
    let storage = InMemoryStorage::new();
    let store = open_store(&storage);
    let response = LlmExtractionResponse {
        weekday_patterns: vec![
            LlmWeekdayPattern {
                day_name: Some("someday".to_string()),
                impact: Some(-1.0),
                confidence: Some(0.7),
                ..LlmWeekdayPattern::default()
            },
            LlmWeekdayPattern {
                day_name: Some("Friday".to_string()),
                description: Some("Fridays lift your mood".to_string()),
                impact: Some(1.2),
                confidence: Some(0.8),
                ..LlmWeekdayPattern::default()
            },
        ],
        significant_dates: vec![LlmSignificantDate {
            month: Some(2),
            day: Some(30),
            impact: Some(-2.0),
            confidence: Some(0.9),
            ..LlmSignificantDate::default()
        }],
        ..LlmExtractionResponse::default()
    };
    let adapter = ExtractionAdapter::new(
        CannedExtractor { response },
        ExtractionConfig::default(),
    );

    let outcome = adapter
        .run(&[entry("e1", 0, "journal text")], &store)
        .await
        .unwrap();

    assert_eq!(outcome.accepted, 1);
    assert_eq!(outcome.rejected, 2);
    let patterns = store.patterns();
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].pattern_type, PatternType::WeekdayPreference);
    assert_eq!(patterns[0].day_of_week, Some(6));
}

#[tokio::test]
async fn accepted_candidates_carry_provenance_from_the_newest_entry() {
    let storage = InMemoryStorage::new();
    let store = open_store(&storage);
    let response = LlmExtractionResponse {
        trigger_groups: vec![LlmTriggerGroup {
            keywords: vec!["deadline".to_string(), "review".to_string()],
            impact: Some(-1.0),
            confidence: Some(0.75),
            snippet: Some("another deadline crunch this week".to_string()),
            ..LlmTriggerGroup::default()
        }],
        ..LlmExtractionResponse::default()
    };
    let adapter = ExtractionAdapter::new(
        CannedExtractor { response },
        ExtractionConfig::default(),
    );

    // e-old is three days older than e-new; provenance must name e-new.
    let entries = vec![entry("e-old", 3, "older"), entry("e-new", 0, "newest")];
    let outcome = adapter.run(&entries, &store).await.unwrap();

    assert_eq!(outcome.accepted, 1);
    let patterns = store.patterns();
    assert_eq!(
        patterns[0].extracted_from_entry_id.as_deref(),
        Some("e-new")
    );
    assert_eq!(
        patterns[0].extracted_snippet.as_deref(),
        Some("another deadline crunch this week")
    );
    assert!(patterns[0].last_validated.is_some());
}

#[tokio::test]
async fn occupation_without_confidence_defaults_to_moderate() {
    let storage = InMemoryStorage::new();
    let store = open_store(&storage);
    let response = LlmExtractionResponse {
        occupation: Some(LlmOccupation {
            occupation: Some("student".to_string()),
            confidence: None,
            snippet: None,
        }),
        summary: Some("Exams dominate the week".to_string()),
        ..LlmExtractionResponse::default()
    };
    let adapter = ExtractionAdapter::new(
        CannedExtractor { response },
        ExtractionConfig::default(),
    );

    let outcome = adapter
        .run(&[entry("e1", 0, "studying again")], &store)
        .await
        .unwrap();

    assert_eq!(outcome.occupation, Some(Occupation::Student));
    let patterns = store.patterns();
    let occ = patterns
        .iter()
        .find(|p| p.pattern_type == PatternType::OccupationType)
        .unwrap();
    assert!((occ.confidence.value() - 0.5).abs() < 1e-9);

    let profile = store.profile();
    assert_eq!(profile.occupation, Occupation::Student);
    assert_eq!(profile.llm_summary.as_deref(), Some("Exams dominate the week"));
    assert_eq!(profile.total_entries_analyzed, 1);
    assert!(profile.last_extraction_date.is_some());
}

#[tokio::test]
async fn truncated_batch_counts_only_what_was_submitted() {
    let storage = InMemoryStorage::new();
    let store = open_store(&storage);
    let config = ExtractionConfig {
        max_entries_per_batch: 2,
        ..ExtractionConfig::default()
    };
    let adapter = ExtractionAdapter::new(
        CannedExtractor {
            response: LlmExtractionResponse::default(),
        },
        config,
    );

    let entries = vec![
        entry("e-oldest", 5, "old"),
        entry("e-mid", 2, "middle"),
        entry("e-new", 0, "newest"),
    ];
    adapter.run(&entries, &store).await.unwrap();

    assert_eq!(store.profile().total_entries_analyzed, 2);
}

#[tokio::test]
async fn classified_occupation_never_overrides_an_explicit_one() {
    let storage = InMemoryStorage::new();
    let store = open_store(&storage);
    store.set_occupation(Occupation::Freelancer).unwrap();

    let response = LlmExtractionResponse {
        occupation: Some(LlmOccupation {
            occupation: Some("employee".to_string()),
            confidence: Some(0.9),
            snippet: None,
        }),
        ..LlmExtractionResponse::default()
    };
    let adapter = ExtractionAdapter::new(
        CannedExtractor { response },
        ExtractionConfig::default(),
    );
    adapter
        .run(&[entry("e1", 0, "office day")], &store)
        .await
        .unwrap();

    assert_eq!(store.profile().occupation, Occupation::Freelancer);
}

#[tokio::test]
async fn provider_outage_surfaces_and_leaves_store_untouched() {
    let storage = InMemoryStorage::new();
    let store = open_store(&storage);
    let adapter = ExtractionAdapter::new(DownExtractor, ExtractionConfig::default());

    let err = adapter
        .run(&[entry("e1", 0, "text")], &store)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        MoodcastError::Extraction(ExtractionError::ProviderUnavailable { .. })
    ));
    assert!(store.patterns().is_empty());
    assert_eq!(store.profile().total_entries_analyzed, 0);
}

#[tokio::test]
async fn empty_batch_is_a_no_op() {
    let storage = InMemoryStorage::new();
    let store = open_store(&storage);
    let adapter = ExtractionAdapter::new(DownExtractor, ExtractionConfig::default());

    let outcome = adapter.run(&[], &store).await.unwrap();

    assert_eq!(outcome.accepted, 0);
    assert_eq!(outcome.rejected, 0);
}
