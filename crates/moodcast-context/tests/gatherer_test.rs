use std::sync::Arc;

use chrono::NaiveDate;
use moodcast_context::ContextGatherer;
use moodcast_core::config::WeatherConfig;
use moodcast_core::errors::{MoodcastResult, WeatherError};
use moodcast_core::models::{
    Coordinates, FactorKind, WeatherCondition, WeatherData, WeatherSource,
};
use moodcast_core::pattern::{
    Confidence, MonthDay, MoodImpact, Occupation, PatternType, PersonalPattern,
};
use moodcast_core::traits::{IRemotePatternStore, IWeatherProvider};
use moodcast_patterns::{InMemoryStorage, PatternStore};

// ── Mocks ─────────────────────────────────────────────────────────────────

struct DownWeather;

impl IWeatherProvider for DownWeather {
    async fn fetch_weather(&self, _location: Coordinates) -> MoodcastResult<WeatherData> {
        Err(WeatherError::Unavailable {
            reason: "no network".to_string(),
        }
        .into())
    }
}

struct SunnyWeather;

impl IWeatherProvider for SunnyWeather {
    async fn fetch_weather(&self, _location: Coordinates) -> MoodcastResult<WeatherData> {
        Ok(WeatherData {
            temperature: 24.0,
            condition: WeatherCondition::Sunny,
            humidity: 45,
            uv_index: 6,
        })
    }
}

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

fn empty_store() -> PatternStore<InMemoryStorage, NullRemote> {
    PatternStore::open("user-1", InMemoryStorage::new(), Arc::new(NullRemote)).unwrap()
}

fn here() -> Coordinates {
    Coordinates {
        latitude: 52.52,
        longitude: 13.405,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn fallback_is_deterministic_when_provider_is_down() {
    let gatherer = ContextGatherer::new(DownWeather, WeatherConfig::default());
    let store = empty_store();
    let date = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();

    let first = gatherer.gather(date, Some(here()), &store).await;
    let second = gatherer.gather(date, Some(here()), &store).await;

    assert_eq!(first.weather_source, WeatherSource::Simulated);
    assert_eq!(second.weather_source, WeatherSource::Simulated);
    assert_eq!(first.weather, second.weather);
    assert_eq!(first.factors.len(), second.factors.len());
}

#[tokio::test]
async fn missing_location_uses_simulation() {
    let gatherer = ContextGatherer::new(SunnyWeather, WeatherConfig::default());
    let store = empty_store();
    let date = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();

    let bundle = gatherer.gather(date, None, &store).await;
    assert_eq!(bundle.weather_source, WeatherSource::Simulated);
    // January simulation is cloudy, not an error.
    assert_eq!(bundle.weather.condition, WeatherCondition::Cloudy);
}

#[tokio::test]
async fn live_weather_is_used_when_available() {
    let gatherer = ContextGatherer::new(SunnyWeather, WeatherConfig::default());
    let store = empty_store();
    let date = NaiveDate::from_ymd_opt(2025, 8, 20).unwrap();

    let bundle = gatherer.gather(date, Some(here()), &store).await;
    assert_eq!(bundle.weather_source, WeatherSource::Live);
    let weather = bundle
        .factors
        .iter()
        .find(|f| f.kind == FactorKind::Weather)
        .unwrap();
    assert!((weather.raw_impact - 0.8).abs() < 1e-9);
    assert!((weather.multiplier - 0.70).abs() < 1e-9);
}

#[tokio::test]
async fn applicable_patterns_become_factors() {
    let store = empty_store();
    let mut p = PersonalPattern::new(
        "user-1",
        PatternType::SignificantDate,
        "Anniversary of a loss",
        "A hard day each year",
        MoodImpact::new(-2.0),
        Confidence::new(0.9),
    );
    p.month_day = MonthDay::new(3, 15);
    store.add_pattern(p).unwrap();

    let gatherer = ContextGatherer::new(DownWeather, WeatherConfig::default());
    let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    let bundle = gatherer.gather(date, None, &store).await;

    let factor = bundle
        .factors
        .iter()
        .find(|f| f.kind == FactorKind::PersonalPattern)
        .unwrap();
    assert!((factor.raw_impact - (-2.0)).abs() < 1e-9);
    // Personal patterns apply at full weight.
    assert!((factor.multiplier - 1.0).abs() < 1e-9);
    assert_eq!(bundle.applicable_patterns.len(), 1);
}

#[tokio::test]
async fn employee_gets_work_rhythm_factor_on_friday() {
    let store = empty_store();
    store.set_occupation(Occupation::Employee).unwrap();
    let gatherer = ContextGatherer::new(DownWeather, WeatherConfig::default());

    // 2025-06-06 is a Friday, 2025-06-02 a Monday.
    let friday = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
    let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

    let friday_bundle = gatherer.gather(friday, None, &store).await;
    let monday_bundle = gatherer.gather(monday, None, &store).await;

    let rhythm = |bundle: &moodcast_core::models::ContextualFactors| {
        bundle
            .factors
            .iter()
            .find(|f| f.name == "Work rhythm")
            .map(|f| f.raw_impact)
            .unwrap()
    };
    assert!(rhythm(&friday_bundle) > 0.0);
    assert!(rhythm(&monday_bundle) < 0.0);
}

#[tokio::test]
async fn seasonal_factors_reflect_month() {
    let gatherer = ContextGatherer::new(DownWeather, WeatherConfig::default());
    let store = empty_store();

    let july = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();
    let bundle = gatherer.gather(july, None, &store).await;
    let season = bundle
        .factors
        .iter()
        .find(|f| f.kind == FactorKind::Season)
        .unwrap();
    assert!((season.raw_impact - 0.7).abs() < 1e-9);

    // Fall is neutral: no season factor emitted at all.
    let october = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
    let bundle = gatherer.gather(october, None, &store).await;
    assert!(!bundle.factors.iter().any(|f| f.kind == FactorKind::Season));
}
