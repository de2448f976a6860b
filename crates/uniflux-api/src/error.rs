use thiserror::Error;

/// Top-level error type for the `uniflux-api` crate.
///
/// Decoding a device dump can only fail at the document level: a body that
/// is not JSON, or a legacy envelope reporting a controller-side failure.
/// Individual fields never fail; see [`crate::flex`].
#[derive(Debug, Error)]
pub enum Error {
    // ── Legacy API ──────────────────────────────────────────────────
    /// Error from the legacy API (parsed from the `{meta: {rc, msg}}` envelope).
    #[error("Legacy API error: {message}")]
    LegacyApi { message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the controller itself reported the failure.
    pub fn is_controller_error(&self) -> bool {
        matches!(self, Self::LegacyApi { .. })
    }

    /// The raw body that failed to decode, if this is a decoding error.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Deserialization { body, .. } => Some(body),
            Self::LegacyApi { .. } => None,
        }
    }
}
