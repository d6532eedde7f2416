mod chart;
mod detail;
mod history;
mod metrics;
mod notice;
mod upload;

pub(super) use chart::IndustryChart;
pub(super) use detail::DetailPane;
pub(super) use history::HistoryPane;
pub(super) use metrics::{MetricsPanel, StatCards};
pub(super) use notice::NoticeBanner;
pub(super) use upload::UploadCard;
