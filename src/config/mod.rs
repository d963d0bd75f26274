pub mod schema;

pub use schema::{
    Config, DiscoveryConfig, MatchingConfig, ObservabilityConfig, ReservationsConfig,
    TaggingConfig,
};
