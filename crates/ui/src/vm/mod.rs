mod campaign_vm;
mod metrics_vm;
mod time_fmt;

pub use campaign_vm::{
    map_industry_bars, map_summary_rows, DetailVm, EmailRowVm, IndustryBarVm, SummaryRowVm,
    TotalsVm,
};
pub use metrics_vm::{format_rate, MetricCardVm, MetricsVm};
pub use time_fmt::format_datetime;
