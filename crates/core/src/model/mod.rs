mod campaign;
mod ids;
mod metrics;
mod page;

pub use campaign::{
    CampaignDetail, CampaignLifecycle, CampaignPage, CampaignResults, CampaignSummary,
    CampaignTotals, DetailSummary, EmailRecord, IndustrySlice,
};
pub use ids::CampaignId;
pub use metrics::MetricsSnapshot;
pub use page::PageCursor;
