// Profile sink: where derived food tags and per-card answers are persisted.

pub mod store;
pub mod types;

pub use store::{InMemoryProfileStore, ProfileSink};
pub use types::{Location, StoredPreference, UserProfile};
