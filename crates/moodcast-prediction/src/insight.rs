//! Insight formatter: the one consumer-facing contract over a prediction.
//!
//! A fixed ten-bucket mapping from score to a short human-readable band
//! and an emoji. Pure function, no side effects.

/// One interpretation band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insight {
    pub band: &'static str,
    pub emoji: &'static str,
}

/// Map a mood score to its interpretation band.
///
/// Takes a raw f64 so the lowest bucket stays expressible for callers
/// interpreting unbounded values; scores produced by the engine are
/// already clamped to [1, 10].
pub fn interpret(score: f64) -> Insight {
    let (band, emoji) = if score >= 9.0 {
        ("Joyful and energized", "😄")
    } else if score >= 8.0 {
        ("Bright and positive", "😊")
    } else if score >= 7.0 {
        ("In good spirits", "🙂")
    } else if score >= 6.0 {
        ("Steady and content", "😌")
    } else if score >= 5.0 {
        ("Balanced", "😐")
    } else if score >= 4.0 {
        ("A bit flat", "😕")
    } else if score >= 3.0 {
        ("Low energy", "😔")
    } else if score >= 2.0 {
        ("Struggling today", "😞")
    } else if score >= 1.0 {
        ("Having a hard time", "😢")
    } else {
        ("Very challenged, reach out for support", "💙")
    };
    Insight { band, emoji }
}
