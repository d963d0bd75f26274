mod core;
mod discovery;
mod matching;
mod observability;
mod reservations;
mod tagging;

pub use self::core::Config;
pub use discovery::DiscoveryConfig;
pub use matching::MatchingConfig;
pub use observability::ObservabilityConfig;
pub use reservations::ReservationsConfig;
pub use tagging::TaggingConfig;
