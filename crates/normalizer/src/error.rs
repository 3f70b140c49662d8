//! Shared engine status → [`NormalizeError`] mapping.
//!
//! Single source of truth for translating the engine's native status codes
//! into the bridge's closed error taxonomy. Used by handle construction and
//! the normalize service.

use thiserror::Error;

use crate::engine::{
    Status, STATUS_BAD_CONFIG, STATUS_BAD_PARSER_STATE, STATUS_NOMEM, STATUS_WRONG_PARSER,
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("engine out of memory")]
    OutOfMemory,
    #[error("invalid rulebase configuration")]
    InvalidConfiguration,
    #[error("engine parser state is invalid")]
    InvalidParserState,
    #[error("rulebase requires an unsupported parser")]
    UnsupportedParser,
    #[error("engine failure (status {0})")]
    Io(Status),
    #[error("line did not normalize (status {0})")]
    NormalizationFailed(Status),
}

/// Map an engine status code to the appropriate [`NormalizeError`].
///
/// Mapping rules:
/// - `STATUS_NOMEM` → `OutOfMemory`
/// - `STATUS_BAD_CONFIG` → `InvalidConfiguration`
/// - `STATUS_BAD_PARSER_STATE` → `InvalidParserState`
/// - `STATUS_WRONG_PARSER` → `UnsupportedParser`
/// - Everything else → `Io` carrying the raw code for diagnostics
///
/// Total over the status space: the engine's code set belongs to an external
/// library and may grow, so unknown codes never panic or get swallowed.
pub fn map_engine_status(status: Status) -> NormalizeError {
    match status {
        STATUS_NOMEM => NormalizeError::OutOfMemory,
        STATUS_BAD_CONFIG => NormalizeError::InvalidConfiguration,
        STATUS_BAD_PARSER_STATE => NormalizeError::InvalidParserState,
        STATUS_WRONG_PARSER => NormalizeError::UnsupportedParser,
        other => NormalizeError::Io(other),
    }
}
