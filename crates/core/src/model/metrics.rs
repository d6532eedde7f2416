use serde::{Deserialize, Serialize};

/// Delivery metrics for one campaign at a point in time.
///
/// Rates are percentages in `0.0..=100.0`, counts are absolute totals.
/// A snapshot is always replaced in full by the next successful poll;
/// fields are never merged individually.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub open_rate: f64,
    pub bounce_rate: f64,
    pub reply_rate: f64,
    pub unsubscribe_rate: f64,
    pub total_opens: u64,
    pub total_bounces: u64,
    pub total_replies: u64,
    pub total_unsubscribes: u64,
}
