use std::time::Duration;

use mail_core::model::{CampaignId, CampaignResults};

use crate::client::CampaignApi;
use crate::error::ApiError;

/// Fetches staged campaign results, tolerating one in-progress report.
///
/// If the first fetch reports `Processing`, waits `delay` and re-checks
/// exactly once; a second `Processing` is returned as-is rather than
/// looping.
///
/// # Errors
///
/// Returns the `ApiError` of whichever fetch failed.
pub async fn fetch_results_settled(
    api: &dyn CampaignApi,
    id: &CampaignId,
    delay: Duration,
) -> Result<CampaignResults, ApiError> {
    let first = api.fetch_results(id).await?;
    if !first.is_processing() {
        return Ok(first);
    }
    tracing::debug!(campaign = %id, "results still processing, re-checking once");
    tokio::time::sleep(delay).await;
    api.fetch_results(id).await
}
