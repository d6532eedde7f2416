#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod monitor;

pub use client::{CampaignApi, CampaignUpload};
pub use config::{
    ApiConfig, DEFAULT_API_URL, DEFAULT_PAGE_SIZE, DEFAULT_POLL_SECS, DEFAULT_RESULTS_RECHECK_SECS,
};
pub use error::ApiError;
pub use http::HttpCampaignApi;

pub use monitor::{
    fetch_results_settled, FetchRequest, HistoryMode, Load, MonitorState, Notice, ViewMode,
};
