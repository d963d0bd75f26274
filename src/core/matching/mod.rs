// Companion matching. Selection is random by design; no compatibility model.

pub mod random;
pub mod types;

pub use random::RandomMatcher;
pub use types::{Companion, CounterSign, Match, MatchStatus, compatibility_percent};

use crate::core::BoxFuture;
use crate::error::Result;

pub trait CompanionMatcher: Send + Sync {
    /// Diners currently open to a match.
    fn candidates<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Companion>>>;

    fn request_match<'a>(
        &'a self,
        user_id: &'a str,
        companion_id: &'a str,
    ) -> BoxFuture<'a, Result<Match>>;
}
