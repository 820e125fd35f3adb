//! Collaborator seams. Everything the engine needs from the outside world
//! comes through these traits; no crate in the workspace talks to a
//! concrete vendor directly except the bundled weather provider.

pub mod entry_source;
pub mod extractor;
pub mod pattern_storage;
pub mod weather;

pub use entry_source::IEntrySource;
pub use extractor::IPatternExtractor;
pub use pattern_storage::{IPatternStorage, IRemotePatternStore};
pub use weather::IWeatherProvider;
