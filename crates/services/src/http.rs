use std::collections::BTreeMap;

use reqwest::multipart;
use reqwest::Client;
use serde::Deserialize;

use mail_core::model::{
    CampaignDetail, CampaignId, CampaignPage, CampaignResults, CampaignSummary, CampaignTotals,
    DetailSummary, EmailRecord, IndustrySlice, MetricsSnapshot,
};

use crate::client::{CampaignApi, CampaignUpload};
use crate::config::ApiConfig;
use crate::error::ApiError;

/// `CampaignApi` implementation over the real HTTPS endpoint.
#[derive(Clone)]
pub struct HttpCampaignApi {
    client: Client,
    config: ApiConfig,
}

impl HttpCampaignApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.trimmed_base_url())
    }
}

#[async_trait::async_trait]
impl CampaignApi for HttpCampaignApi {
    async fn start_campaign(&self, upload: CampaignUpload) -> Result<CampaignId, ApiError> {
        let part = multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/send-emails/"))
            .multipart(form)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let body: StartCampaignResponse = response.json().await?;
        if let Some(error) = body.error {
            return Err(ApiError::Service(error));
        }
        // An accepted upload without an identifier is still a failure; no
        // partial campaign may be recorded.
        body.campaign_id
            .filter(|id| !id.is_empty())
            .map(CampaignId::new)
            .ok_or(ApiError::MissingCampaignId)
    }

    async fn fetch_metrics(&self, id: &CampaignId) -> Result<MetricsSnapshot, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/campaign-metrics/{id}")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let body: MetricsResponse = response.json().await?;
        if let Some(error) = body.error {
            return Err(ApiError::Service(error));
        }
        body.metrics
            .ok_or_else(|| ApiError::Service("metrics missing from response".to_string()))
    }

    async fn fetch_details(&self, id: &CampaignId) -> Result<CampaignDetail, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/campaign-details/{id}")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let body: DetailsResponse = response.json().await?;
        if let Some(error) = body.error {
            return Err(ApiError::Service(error));
        }
        Ok(CampaignDetail {
            campaign_id: CampaignId::new(body.campaign_id.unwrap_or_else(|| id.to_string())),
            summary: body
                .summary
                .ok_or_else(|| ApiError::Service("summary missing from response".to_string()))?,
            industry_data: body.industry_data.unwrap_or_default(),
            all_emails: body.all_emails.unwrap_or_default(),
        })
    }

    async fn list_campaigns(&self, page: u32, page_size: u32) -> Result<CampaignPage, ApiError> {
        let response = self
            .client
            .get(self.url("/all-campaigns/"))
            .query(&[("page", page), ("page_size", page_size)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let body: AllCampaignsResponse = response.json().await?;
        Ok(CampaignPage {
            campaigns: body.campaigns,
            total_pages: body.total_pages,
            current_page: body.current_page,
        })
    }

    async fn fetch_results(&self, id: &CampaignId) -> Result<CampaignResults, ApiError> {
        let response = self
            .client
            .get(self.url("/campaign-results/"))
            .query(&[("campaign_id", id.as_str())])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let body: ResultsResponse = response.json().await?;
        Ok(body.into_results())
    }
}

#[derive(Debug, Deserialize)]
struct StartCampaignResponse {
    campaign_id: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MetricsResponse {
    metrics: Option<MetricsSnapshot>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    campaign_id: Option<String>,
    summary: Option<DetailSummary>,
    industry_data: Option<Vec<IndustrySlice>>,
    all_emails: Option<Vec<EmailRecord>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AllCampaignsResponse {
    #[serde(default)]
    campaigns: Vec<CampaignSummary>,
    total_pages: u32,
    current_page: u32,
}

// The results endpoint uses camelCase field names and ships the industry
// breakdown as a label -> count object.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultsResponse {
    status: Option<String>,
    #[serde(default)]
    total_emails: u64,
    #[serde(default)]
    successful_emails: u64,
    #[serde(default)]
    failed_emails: u64,
    #[serde(default)]
    industries: BTreeMap<String, u64>,
}

impl ResultsResponse {
    fn into_results(self) -> CampaignResults {
        if self.status.as_deref() == Some("Processing") {
            return CampaignResults::Processing;
        }
        CampaignResults::Ready {
            totals: CampaignTotals {
                total_emails: self.total_emails,
                successful_emails: self.successful_emails,
                failed_emails: self.failed_emails,
            },
            industries: self
                .industries
                .into_iter()
                .map(|(industry, emails)| IndustrySlice { industry, emails })
                .collect(),
        }
    }
}
