/// Weather-collaborator errors. All of these are recovered internally by
/// falling back to the seasonal simulation; none reach a prediction caller.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("weather provider unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("weather fetch timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("weather provider returned an invalid response: {details}")]
    InvalidResponse { details: String },
}
