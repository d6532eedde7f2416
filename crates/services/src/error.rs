//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `CampaignApi` implementations.
///
/// Covers the full failure taxonomy the dashboard has to surface: transport
/// failures, non-2xx statuses, service-reported error bodies, and responses
/// missing an expected field. None of these are fatal; callers log them and
/// fall back to a previously-known-good view state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("campaign service request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error("campaign service reported an error: {0}")]
    Service(String),
    #[error("campaign service response did not include a campaign_id")]
    MissingCampaignId,
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// True for a 404 on a results/detail lookup.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status(status) if *status == reqwest::StatusCode::NOT_FOUND)
    }
}
