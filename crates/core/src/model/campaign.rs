use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::CampaignId;
use crate::model::metrics::MetricsSnapshot;

/// Lifecycle of the campaign currently shown on the dashboard.
///
/// Moves forward only: `NotStarted` until the service hands back an
/// identifier, `Running` while metrics are being polled, `Completed` once
/// the results endpoint reports final totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CampaignLifecycle {
    #[default]
    NotStarted,
    Running,
    Completed,
}

/// One row in the historical campaign list.
///
/// Immutable once fetched; a whole page of these is replaced wholesale on
/// each list fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub campaign_id: CampaignId,
    pub total_processed: u64,
    pub successful_sends: u64,
    pub failed_sends: u64,
    pub metrics: MetricsSnapshot,
    pub start_time: DateTime<Utc>,
}

/// One page of the historical campaign list.
///
/// `total_pages` and `current_page` are server-authoritative; the client
/// never requests a page outside `1..=total_pages`.
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignPage {
    pub campaigns: Vec<CampaignSummary>,
    pub total_pages: u32,
    pub current_page: u32,
}

/// Aggregate counts attached to a campaign detail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetailSummary {
    #[serde(flatten)]
    pub metrics: MetricsSnapshot,
    pub total_processed: u64,
    pub successful_sends: u64,
    pub failed_sends: u64,
}

/// Count of recipients in one industry bucket. Ordering is not significant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustrySlice {
    pub industry: String,
    pub emails: u64,
}

/// Per-recipient delivery outcome within one campaign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    pub email: String,
    pub opened: bool,
    pub bounced: bool,
    pub replied: bool,
    pub unsubscribed: bool,
}

/// Full drill-down data for one historical campaign.
///
/// Fetched on demand when a list row is selected and discarded when the
/// user navigates back to the list.
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignDetail {
    pub campaign_id: CampaignId,
    pub summary: DetailSummary,
    pub industry_data: Vec<IndustrySlice>,
    pub all_emails: Vec<EmailRecord>,
}

/// Final totals for a finished campaign, as reported by the results
/// endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignTotals {
    pub total_emails: u64,
    pub successful_emails: u64,
    pub failed_emails: u64,
}

/// Staged response from the results endpoint.
///
/// The service reports `Processing` until sending has finished, then a
/// ready payload with final totals and the industry breakdown.
#[derive(Clone, Debug, PartialEq)]
pub enum CampaignResults {
    Processing,
    Ready {
        totals: CampaignTotals,
        industries: Vec<IndustrySlice>,
    },
}

impl CampaignResults {
    /// Returns true while the service is still computing results.
    #[must_use]
    pub fn is_processing(&self) -> bool {
        matches!(self, CampaignResults::Processing)
    }
}
