use mail_core::model::{
    CampaignDetail, CampaignId, CampaignSummary, CampaignTotals, EmailRecord, IndustrySlice,
};

use crate::vm::metrics_vm::{format_rate, MetricsVm};
use crate::vm::time_fmt::format_datetime;

/// One row of the historical campaign table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRowVm {
    pub id: CampaignId,
    pub total_processed: u64,
    pub successful_sends: u64,
    pub failed_sends: u64,
    pub open_rate: String,
    pub bounce_rate: String,
    pub reply_rate: String,
    pub unsubscribe_rate: String,
    pub started_str: String,
}

impl From<&CampaignSummary> for SummaryRowVm {
    fn from(summary: &CampaignSummary) -> Self {
        Self {
            id: summary.campaign_id.clone(),
            total_processed: summary.total_processed,
            successful_sends: summary.successful_sends,
            failed_sends: summary.failed_sends,
            open_rate: format_rate(summary.metrics.open_rate),
            bounce_rate: format_rate(summary.metrics.bounce_rate),
            reply_rate: format_rate(summary.metrics.reply_rate),
            unsubscribe_rate: format_rate(summary.metrics.unsubscribe_rate),
            started_str: format_datetime(summary.start_time),
        }
    }
}

#[must_use]
pub fn map_summary_rows(summaries: &[CampaignSummary]) -> Vec<SummaryRowVm> {
    summaries.iter().map(SummaryRowVm::from).collect()
}

/// Final totals shown on the dashboard stat cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TotalsVm {
    pub total_emails: u64,
    pub successful_emails: u64,
    pub failed_emails: u64,
}

impl From<&CampaignTotals> for TotalsVm {
    fn from(totals: &CampaignTotals) -> Self {
        Self {
            total_emails: totals.total_emails,
            successful_emails: totals.successful_emails,
            failed_emails: totals.failed_emails,
        }
    }
}

/// One bar of the industry chart, with a width relative to the largest
/// bucket so the CSS bars scale to the data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndustryBarVm {
    pub industry: String,
    pub emails: u64,
    pub width_pct: u32,
}

#[must_use]
pub fn map_industry_bars(slices: &[IndustrySlice]) -> Vec<IndustryBarVm> {
    let max = slices.iter().map(|slice| slice.emails).max().unwrap_or(0);
    slices
        .iter()
        .map(|slice| IndustryBarVm {
            industry: slice.industry.clone(),
            emails: slice.emails,
            width_pct: if max == 0 {
                0
            } else {
                ((slice.emails * 100) / max) as u32
            },
        })
        .collect()
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// One per-recipient row of the detail table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailRowVm {
    pub email: String,
    pub opened: &'static str,
    pub bounced: &'static str,
    pub replied: &'static str,
    pub unsubscribed: &'static str,
}

impl From<&EmailRecord> for EmailRowVm {
    fn from(record: &EmailRecord) -> Self {
        Self {
            email: record.email.clone(),
            opened: yes_no(record.opened),
            bounced: yes_no(record.bounced),
            replied: yes_no(record.replied),
            unsubscribed: yes_no(record.unsubscribed),
        }
    }
}

/// Display form of a full campaign drill-down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailVm {
    pub id: CampaignId,
    pub total_processed: u64,
    pub successful_sends: u64,
    pub failed_sends: u64,
    pub metrics: MetricsVm,
    pub industries: Vec<IndustryBarVm>,
    pub emails: Vec<EmailRowVm>,
}

impl From<&CampaignDetail> for DetailVm {
    fn from(detail: &CampaignDetail) -> Self {
        Self {
            id: detail.campaign_id.clone(),
            total_processed: detail.summary.total_processed,
            successful_sends: detail.summary.successful_sends,
            failed_sends: detail.summary.failed_sends,
            metrics: MetricsVm::from(&detail.summary.metrics),
            industries: map_industry_bars(&detail.industry_data),
            emails: detail.all_emails.iter().map(EmailRowVm::from).collect(),
        }
    }
}
