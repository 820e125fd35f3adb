//! ContextGatherer — assembles the ContextualFactors bundle for a target
//! date and optional location.

use std::time::Duration;

use chrono::{Datelike, NaiveDate};

use moodcast_core::config::WeatherConfig;
use moodcast_core::constants::{
    MOON_SCALE, PATTERN_SCALE, SEASON_SCALE, WEATHER_SCALE,
};
use moodcast_core::models::{
    ContextFactor, ContextualFactors, Coordinates, FactorKind, MoonPhase, Season, WeatherData,
    WeatherSource,
};
use moodcast_core::pattern::{Occupation, PatternType};
use moodcast_core::traits::{IPatternStorage, IRemotePatternStore, IWeatherProvider};
use moodcast_patterns::PatternStore;

use crate::calendar::calendar_factors;
use crate::moon::phase_for;
use crate::simulation::simulated_weather;

pub struct ContextGatherer<W> {
    weather: W,
    config: WeatherConfig,
}

impl<W: IWeatherProvider> ContextGatherer<W> {
    pub fn new(weather: W, config: WeatherConfig) -> Self {
        Self { weather, config }
    }

    /// Assemble the full context bundle. Infallible by design: every
    /// collaborator failure has a documented fallback.
    pub async fn gather<L, R>(
        &self,
        target_date: NaiveDate,
        location: Option<Coordinates>,
        store: &PatternStore<L, R>,
    ) -> ContextualFactors
    where
        L: IPatternStorage,
        R: IRemotePatternStore + 'static,
    {
        let (weather, weather_source) = self.weather_or_simulation(target_date, location).await;
        let season = Season::from_month(target_date.month());
        let moon_phase = phase_for(target_date);
        let applicable_patterns = store.patterns_affecting(target_date);

        let mut factors = Vec::new();

        factors.push(weather_factor(&weather));

        if season.mood_delta() != 0.0 {
            factors.push(ContextFactor {
                name: "Season".to_string(),
                kind: FactorKind::Season,
                raw_impact: season.mood_delta(),
                multiplier: SEASON_SCALE,
                description: season_description(season),
            });
        }

        if moon_phase.mood_delta() != 0.0 {
            factors.push(ContextFactor {
                name: "Moon phase".to_string(),
                kind: FactorKind::MoonPhase,
                raw_impact: moon_phase.mood_delta(),
                multiplier: MOON_SCALE,
                description: format!("A {moon_phase} has a subtle effect for some people"),
            });
        }

        factors.extend(calendar_factors(target_date));

        for pattern in &applicable_patterns {
            // Occupation patterns carry no stored impact; their
            // contribution is the curve factor below.
            if pattern.pattern_type == PatternType::OccupationType {
                continue;
            }
            factors.push(ContextFactor {
                name: pattern.name.clone(),
                kind: FactorKind::PersonalPattern,
                raw_impact: pattern.mood_impact.value(),
                multiplier: PATTERN_SCALE,
                description: pattern.description.clone(),
            });
        }

        if let Some(factor) = occupation_factor(store.occupation(), target_date) {
            factors.push(factor);
        }

        tracing::debug!(
            %target_date,
            factor_count = factors.len(),
            source = ?weather_source,
            "context gathered"
        );

        ContextualFactors {
            target_date,
            weather,
            weather_source,
            season,
            moon_phase,
            applicable_patterns,
            factors,
        }
    }

    /// Live weather under a deadline, or the seasonal simulation. The
    /// fallback is a correctness requirement: no location, no network, a
    /// provider error, or a timeout all land here, and the gatherer never
    /// retries within the same call.
    async fn weather_or_simulation(
        &self,
        target_date: NaiveDate,
        location: Option<Coordinates>,
    ) -> (WeatherData, WeatherSource) {
        let Some(location) = location else {
            return (
                simulated_weather(target_date.month()),
                WeatherSource::Simulated,
            );
        };

        let deadline = Duration::from_secs(self.config.timeout_secs);
        match tokio::time::timeout(deadline, self.weather.fetch_weather(location)).await {
            Ok(Ok(data)) => (data, WeatherSource::Live),
            Ok(Err(e)) => {
                tracing::warn!("weather fetch failed, using simulation: {e}");
                (
                    simulated_weather(target_date.month()),
                    WeatherSource::Simulated,
                )
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.config.timeout_secs,
                    "weather fetch timed out, using simulation"
                );
                (
                    simulated_weather(target_date.month()),
                    WeatherSource::Simulated,
                )
            }
        }
    }
}

fn weather_factor(weather: &WeatherData) -> ContextFactor {
    let delta = weather.condition.mood_delta();
    let description = if delta >= 0.0 {
        format!("{} weather typically lifts your mood", capitalize(&weather.condition.to_string()))
    } else {
        format!("{} weather tends to dampen mood a little", capitalize(&weather.condition.to_string()))
    };
    ContextFactor {
        name: "Weather".to_string(),
        kind: FactorKind::Weather,
        raw_impact: delta,
        multiplier: WEATHER_SCALE,
        description,
    }
}

fn season_description(season: Season) -> String {
    match season {
        Season::Spring => "Spring days tend to bring energy".to_string(),
        Season::Summer => "Long summer days usually lift mood".to_string(),
        Season::Fall => "Fall is typically neutral for mood".to_string(),
        Season::Winter => "Short winter days can weigh on mood".to_string(),
    }
}

/// The occupation curve's contribution for the target weekday, when the
/// occupation is known and the day is not flat.
fn occupation_factor(occupation: Occupation, date: NaiveDate) -> Option<ContextFactor> {
    if occupation == Occupation::Unknown {
        return None;
    }
    let impact = occupation.weekday_impact(date.weekday());
    if impact == 0.0 {
        return None;
    }
    let day = date.format("%A");
    let description = if impact > 0.0 {
        format!("As a {occupation}, {day}s usually feel brighter for you")
    } else {
        format!("As a {occupation}, {day}s tend to be harder")
    };
    Some(ContextFactor {
        name: "Work rhythm".to_string(),
        kind: FactorKind::PersonalPattern,
        raw_impact: impact,
        multiplier: PATTERN_SCALE,
        description,
    })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
