use async_trait::async_trait;

use mail_core::model::{
    CampaignDetail, CampaignId, CampaignPage, CampaignResults, MetricsSnapshot,
};

use crate::error::ApiError;

/// Recipient file handed to `start_campaign`.
///
/// Contents are passed through untouched; the service does its own parsing
/// and validation of the .xlsx/.csv payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampaignUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl CampaignUpload {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Client surface of the remote campaign service.
///
/// The UI only ever talks to this trait so that tests can substitute a
/// scripted implementation for `HttpCampaignApi`.
#[async_trait]
pub trait CampaignApi: Send + Sync {
    /// Uploads a recipient file and starts a new campaign.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingCampaignId` when the service accepts the
    /// upload but does not hand back an identifier, or transport/status
    /// errors for everything else.
    async fn start_campaign(&self, upload: CampaignUpload) -> Result<CampaignId, ApiError>;

    /// Fetches the current metrics snapshot for a campaign.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a service-reported error.
    async fn fetch_metrics(&self, id: &CampaignId) -> Result<MetricsSnapshot, ApiError>;

    /// Fetches the full drill-down detail for one historical campaign.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a service-reported error.
    async fn fetch_details(&self, id: &CampaignId) -> Result<CampaignDetail, ApiError>;

    /// Fetches one page of the historical campaign list.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a service-reported error.
    async fn list_campaigns(&self, page: u32, page_size: u32) -> Result<CampaignPage, ApiError>;

    /// Fetches the staged results for a campaign; may report `Processing`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status(404)` while the campaign is unknown to the
    /// results store, or transport/status errors otherwise.
    async fn fetch_results(&self, id: &CampaignId) -> Result<CampaignResults, ApiError>;
}
