//! Error types for the listing2html library.
//!
//! Three error types reflect three distinct failure modes:
//!
//! * [`ListingError`]: **Fatal**: the requested operation cannot proceed
//!   (input file missing, JSON malformed, output not writable, provider not
//!   configured). Returned as `Err(ListingError)`.
//!
//! * [`StoreError`]: **Non-fatal**: one persistence tier failed. Logged and
//!   reported in [`crate::store::SaveReport`]; editing never stops for it.
//!
//! * [`GenerationError`]: **Non-fatal**: one generative-text call failed.
//!   The copywriter always turns it into a fallback string.
//!
//! The renderer has no error type; it is total over its input.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the listing2html library.
#[derive(Debug, Error)]
pub enum ListingError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Listing file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The path exists but could not be read (a directory, an I/O fault).
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP URL was syntactically valid but download failed.
    #[error("Failed to download '{url}': {reason}\nCheck your internet connection.")]
    DownloadFailed { url: String, reason: String },

    /// Download exceeded the configured timeout.
    #[error("Download timed out after {secs}s for '{url}'\nIncrease --download-timeout.")]
    DownloadTimeout { url: String, secs: u64 },

    /// The document was read but is not a valid listing record.
    #[error("'{source_name}' is not a valid listing record: {detail}")]
    InvalidListing { source_name: String, detail: String },

    // ── Image errors ──────────────────────────────────────────────────────
    /// The file could not be identified as a supported image.
    #[error("'{path}' is not a recognised image file")]
    NotAnImage { path: PathBuf },

    // ── LLM errors ────────────────────────────────────────────────────────
    /// The configured provider is not initialised (missing API key etc.).
    #[error("LLM provider '{provider}' is not configured.\n{hint}")]
    ProviderNotConfigured { provider: String, hint: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output HTML file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A non-fatal failure of one persistence tier.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{tier} store I/O error at '{path}': {source}")]
    Io {
        tier: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The serialised record does not fit in a size-limited tier.
    #[error("{tier} store quota exceeded: {size} bytes > {limit} bytes")]
    QuotaExceeded {
        tier: &'static str,
        size: usize,
        limit: usize,
    },

    #[error("Failed to serialise listing: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A single generative-text call failed.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// The provider returned an error.
    #[error("generation failed: {0}")]
    Provider(String),

    /// The call exceeded the configured timeout.
    #[error("generation timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The provider answered with no usable text.
    #[error("generation returned empty content")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_listing_display() {
        let e = ListingError::InvalidListing {
            source_name: "listing.json".into(),
            detail: "expected value at line 1".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("listing.json"), "got: {msg}");
        assert!(msg.contains("line 1"));
    }

    #[test]
    fn quota_display() {
        let e = StoreError::QuotaExceeded {
            tier: "fast",
            size: 6_000_000,
            limit: 5_242_880,
        };
        assert!(e.to_string().contains("fast"));
        assert!(e.to_string().contains("5242880"));
    }

    #[test]
    fn timeout_display() {
        let e = GenerationError::Timeout { secs: 30 };
        assert!(e.to_string().contains("30s"));
    }

    #[test]
    fn provider_not_configured_display() {
        let e = ListingError::ProviderNotConfigured {
            provider: "gemini".into(),
            hint: "set GEMINI_API_KEY".into(),
        };
        assert!(e.to_string().contains("gemini"));
        assert!(e.to_string().contains("GEMINI_API_KEY"));
    }
}
