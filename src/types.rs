use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Failure of a single word lookup. Every issued lookup resolves to either
/// a result list or exactly one of these variants.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LookupError>;

// ============================================================================
// Result Records
// ============================================================================

/// One decoded entry from a lookup response.
///
/// Which optional fields are present depends on the metadata flags requested
/// with the query; each may be absent independently.
#[derive(Debug, Clone, Deserialize)]
pub struct WordEntry {
    pub word: String,
    /// Relevance score assigned by the remote service.
    pub score: Option<i64>,
    #[serde(rename = "numSyllables")]
    pub num_syllables: Option<u32>,
    /// Definitions, when requested via the `d` metadata flag.
    pub defs: Option<Vec<String>>,
    /// Part-of-speech, pronunciation and frequency annotations in the
    /// service's own mini-format.
    pub tags: Option<Vec<String>>,
}
