use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `tablemate`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; the binary and config loader continue
/// to use `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum TablemateError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Tagging ─────────────────────────────────────────────────────────
    #[error("tagging: {0}")]
    Tagging(#[from] TaggingError),

    // ── Profile sink ────────────────────────────────────────────────────
    #[error("profile: {0}")]
    Profile(#[from] ProfileError),

    // ── Matching ────────────────────────────────────────────────────────
    #[error("matching: {0}")]
    Matching(#[from] MatchingError),

    // ── Reservations ────────────────────────────────────────────────────
    #[error("reservation: {0}")]
    Reservation(#[from] ReservationError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Tagging errors ──────────────────────────────────────────────────────────

/// Precondition violations of the tag deriver. None of these are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaggingError {
    #[error("probe index {index} out of range for catalog of {catalog_size}")]
    InvalidIndex { index: usize, catalog_size: usize },

    #[error("session incomplete: {answered} of {required} probes answered")]
    IncompleteSession { answered: usize, required: usize },

    #[error("tags already derived for this session")]
    AlreadyDerived,

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

// ─── Profile errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile not found: {0}")]
    NotFound(String),

    #[error("profile already exists: {0}")]
    AlreadyExists(String),

    #[error("store: {0}")]
    Store(String),
}

// ─── Matching errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("candidate {0} is not available")]
    Unavailable(String),

    #[error("no counter-signs configured")]
    NoCounterSigns,
}

// ─── Reservation errors ──────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("restaurant {0} not found")]
    UnknownRestaurant(String),

    #[error("time slot {time} not offered by {restaurant}")]
    UnknownSlot { restaurant: String, time: String },

    #[error("time slot {time} at {restaurant} is already taken")]
    SlotUnavailable { restaurant: String, time: String },

    #[error("party size must be at least 1")]
    EmptyParty,

    #[error("reservation {0} not found")]
    NotFound(String),

    #[error("invalid date or time: {0}")]
    InvalidSchedule(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, TablemateError>;
