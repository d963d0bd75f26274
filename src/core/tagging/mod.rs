// Food-personality tagging: ten swipe cards in, a small ordered tag set out.
// Derivation is synchronous and pure; persistence belongs to the caller.

pub mod catalog;
pub mod deriver;
pub mod flow;
pub mod gesture;
pub mod session;
pub mod types;

pub use catalog::{PreferenceProbe, ProbeCatalog};
pub use deriver::{FoodPreferenceRow, TagDeriver, TagRules};
pub use flow::{TaggingOutcome, complete_tagging};
pub use gesture::GestureClassifier;
pub use session::{ResponseRecord, SessionState, TaggingSession, is_session_complete};
pub use types::*;
