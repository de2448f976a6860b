// ── Core error types ──
//
// The builders themselves are total. Errors only come from the edges:
// decoding a device dump and encoding points for the wire. The
// `From<uniflux_api::Error>` impl translates decoding failures into
// domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input errors ─────────────────────────────────────────────────
    #[error("Invalid device data: {message}")]
    InvalidInput { message: String },

    #[error("Controller reported an error: {message}")]
    Controller { message: String },

    // ── Output errors ────────────────────────────────────────────────
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Failure to render a point as line protocol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("point for table '{table}' has no encodable fields")]
    NoFields { table: String },
}

// ── Conversion from decoding errors ──────────────────────────────────

impl From<uniflux_api::Error> for CoreError {
    fn from(err: uniflux_api::Error) -> Self {
        match err {
            uniflux_api::Error::LegacyApi { message } => CoreError::Controller { message },
            uniflux_api::Error::Deserialization { message, .. } => {
                CoreError::InvalidInput { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_map_to_domain_variants() {
        let err: CoreError = uniflux_api::Error::LegacyApi {
            message: "api.err.NoSiteContext".into(),
        }
        .into();
        assert!(matches!(err, CoreError::Controller { .. }));

        let err: CoreError = uniflux_api::Error::Deserialization {
            message: "EOF while parsing".into(),
            body: "{".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid device data: EOF while parsing");
    }
}
