use mail_core::model::{
    CampaignDetail, CampaignId, CampaignLifecycle, CampaignPage, CampaignResults,
    CampaignSummary, CampaignTotals, IndustrySlice, MetricsSnapshot, PageCursor,
};

use crate::error::ApiError;

/// Which of the two mutually exclusive surfaces is showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Dashboard,
    History(HistoryMode),
}

/// Leaf mode within the history surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    List,
    Detail(CampaignId),
}

/// Disjoint rendering states for an on-demand fetch.
///
/// `Ready` with an empty payload is "zero results", which renders
/// differently from `Loading` and from `Failed`.
#[derive(Clone, Debug, PartialEq)]
pub enum Load<T> {
    Idle,
    Loading,
    Ready(T),
    Failed,
}

impl<T> Load<T> {
    #[must_use]
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Load::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// User-visible notice raised by a flow, rendered as a banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    NoFileSelected,
    UploadFailed,
    CampaignCompleted(CampaignTotals),
}

/// A network call the UI should issue on behalf of the state machine.
///
/// Each request carries the identity it was issued for, so the matching
/// `apply_*` call can be checked against current state before the response
/// is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchRequest {
    Metrics { id: CampaignId, epoch: u64 },
    Results { id: CampaignId },
    Page { page: u32, page_size: u32 },
    Detail { id: CampaignId },
}

/// All client state for the campaign dashboard.
///
/// Owned by a single view; there is exactly one writer, so transitions are
/// plain `&mut self` methods with no locking.
#[derive(Clone, Debug, PartialEq)]
pub struct MonitorState {
    view: ViewMode,
    active: Option<CampaignId>,
    lifecycle: CampaignLifecycle,
    metrics: MetricsSnapshot,
    metrics_error: bool,
    totals: Option<CampaignTotals>,
    industry_data: Vec<IndustrySlice>,
    results_error: bool,
    poll_epoch: u64,
    upload_in_flight: bool,
    cursor: PageCursor,
    pending_page: Option<u32>,
    list: Load<Vec<CampaignSummary>>,
    detail: Load<CampaignDetail>,
    notice: Option<Notice>,
}

impl MonitorState {
    /// Initial state: dashboard view, no active campaign, cursor at page 1.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            view: ViewMode::Dashboard,
            active: None,
            lifecycle: CampaignLifecycle::NotStarted,
            metrics: MetricsSnapshot::default(),
            metrics_error: false,
            totals: None,
            industry_data: Vec::new(),
            results_error: false,
            poll_epoch: 0,
            upload_in_flight: false,
            cursor: PageCursor::new(page_size),
            pending_page: None,
            list: Load::Idle,
            detail: Load::Idle,
            notice: None,
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewMode {
        &self.view
    }

    #[must_use]
    pub fn active_campaign(&self) -> Option<&CampaignId> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn lifecycle(&self) -> CampaignLifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn metrics(&self) -> &MetricsSnapshot {
        &self.metrics
    }

    /// True after a failed poll; the previous snapshot is still held.
    #[must_use]
    pub fn metrics_error(&self) -> bool {
        self.metrics_error
    }

    #[must_use]
    pub fn totals(&self) -> Option<&CampaignTotals> {
        self.totals.as_ref()
    }

    #[must_use]
    pub fn industry_data(&self) -> &[IndustrySlice] {
        &self.industry_data
    }

    #[must_use]
    pub fn results_error(&self) -> bool {
        self.results_error
    }

    #[must_use]
    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    #[must_use]
    pub fn list(&self) -> &Load<Vec<CampaignSummary>> {
        &self.list
    }

    #[must_use]
    pub fn detail(&self) -> &Load<CampaignDetail> {
        &self.detail
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn upload_in_flight(&self) -> bool {
        self.upload_in_flight
    }

    /// Current poll generation. A poll loop captures this at spawn time and
    /// exits once the live value moves past it.
    #[must_use]
    pub fn poll_epoch(&self) -> u64 {
        self.poll_epoch
    }

    // ── upload / start ───────────────────────────────────────────────────

    /// Marks an upload as in flight. Returns false (and does nothing) if
    /// one is already outstanding, which suppresses duplicate submissions.
    pub fn begin_upload(&mut self) -> bool {
        if self.upload_in_flight {
            return false;
        }
        self.upload_in_flight = true;
        self.notice = None;
        true
    }

    /// Installs the service-assigned identifier as the active campaign.
    ///
    /// Resets the displayed snapshot to zeros, retires any poll loop for a
    /// previous campaign, and returns the immediate metrics fetch plus the
    /// staged results fetch to issue.
    pub fn upload_succeeded(&mut self, id: CampaignId) -> Vec<FetchRequest> {
        self.upload_in_flight = false;
        self.poll_epoch += 1;
        self.active = Some(id.clone());
        self.lifecycle = CampaignLifecycle::Running;
        self.metrics = MetricsSnapshot::default();
        self.metrics_error = false;
        self.totals = None;
        self.industry_data.clear();
        self.results_error = false;
        vec![
            FetchRequest::Metrics {
                id: id.clone(),
                epoch: self.poll_epoch,
            },
            FetchRequest::Results { id },
        ]
    }

    /// Records a failed or identifier-less upload. Every other piece of
    /// state is left untouched; no partial campaign is recorded.
    pub fn upload_failed(&mut self) {
        self.upload_in_flight = false;
        self.notice = Some(Notice::UploadFailed);
    }

    /// Raised when submit is pressed with no file chosen; nothing is sent.
    pub fn reject_missing_file(&mut self) {
        self.notice = Some(Notice::NoFileSelected);
    }

    // ── metrics polling ──────────────────────────────────────────────────

    /// The fetch a poll tick should issue, if a campaign is active.
    #[must_use]
    pub fn poll_request(&self) -> Option<FetchRequest> {
        self.active.as_ref().map(|id| FetchRequest::Metrics {
            id: id.clone(),
            epoch: self.poll_epoch,
        })
    }

    /// Applies a metrics response. Returns false when the response is stale
    /// (the campaign or poll generation moved on) and was discarded.
    ///
    /// A failed poll keeps the previous snapshot on display and only raises
    /// the error flag; the next scheduled tick is the only retry.
    pub fn apply_metrics(
        &mut self,
        id: &CampaignId,
        epoch: u64,
        result: Result<MetricsSnapshot, ApiError>,
    ) -> bool {
        if epoch != self.poll_epoch || self.active.as_ref() != Some(id) {
            tracing::debug!(campaign = %id, "discarding stale metrics response");
            return false;
        }
        match result {
            Ok(snapshot) => {
                self.metrics = snapshot;
                self.metrics_error = false;
            }
            Err(err) => {
                tracing::warn!(campaign = %id, error = %err, "metrics poll failed");
                self.metrics_error = true;
            }
        }
        true
    }

    /// Stops any outstanding poll loop without touching displayed state.
    /// Called when the owning view is torn down.
    pub fn teardown(&mut self) {
        self.poll_epoch += 1;
    }

    // ── staged results ───────────────────────────────────────────────────

    /// Applies a results response for the active campaign. A `Processing`
    /// status leaves the campaign running; ready totals complete it.
    pub fn apply_results(&mut self, id: &CampaignId, result: Result<CampaignResults, ApiError>) {
        if self.active.as_ref() != Some(id) {
            tracing::debug!(campaign = %id, "discarding stale results response");
            return;
        }
        match result {
            Ok(CampaignResults::Ready { totals, industries }) => {
                self.lifecycle = CampaignLifecycle::Completed;
                self.industry_data = industries;
                self.results_error = false;
                self.notice = Some(Notice::CampaignCompleted(totals.clone()));
                self.totals = Some(totals);
            }
            Ok(CampaignResults::Processing) => {}
            Err(err) => {
                tracing::warn!(campaign = %id, error = %err, "results fetch failed");
                self.results_error = true;
            }
        }
    }

    // ── history list / drill-down ────────────────────────────────────────

    /// Switches to the history list, resuming the last cursor position.
    pub fn open_history(&mut self) -> FetchRequest {
        self.view = ViewMode::History(HistoryMode::List);
        self.detail = Load::Idle;
        self.request_current_page()
    }

    /// Requests a different page. Out-of-range targets are rejected here,
    /// before any request is issued.
    pub fn change_page(&mut self, page: u32) -> Option<FetchRequest> {
        if self.view != ViewMode::History(HistoryMode::List) {
            return None;
        }
        if !self.cursor.is_valid_target(page) {
            return None;
        }
        self.list = Load::Loading;
        self.pending_page = Some(page);
        Some(FetchRequest::Page {
            page,
            page_size: self.cursor.page_size(),
        })
    }

    /// Applies a list page response. Returns false when the response no
    /// longer matches the pending page or the list view has been left.
    pub fn apply_page(&mut self, page: u32, result: Result<CampaignPage, ApiError>) -> bool {
        if self.view != ViewMode::History(HistoryMode::List) || self.pending_page != Some(page) {
            tracing::debug!(page, "discarding stale list response");
            return false;
        }
        self.pending_page = None;
        match result {
            Ok(fetched) => {
                self.cursor.settle(fetched.current_page, fetched.total_pages);
                self.list = Load::Ready(fetched.campaigns);
            }
            Err(err) => {
                tracing::warn!(page, error = %err, "campaign list fetch failed");
                self.list = Load::Failed;
            }
        }
        true
    }

    /// Drills into one row of the list. The pagination cursor is left
    /// alone so that backing out restores the same page.
    pub fn open_detail(&mut self, id: CampaignId) -> Option<FetchRequest> {
        if self.view != ViewMode::History(HistoryMode::List) {
            return None;
        }
        self.view = ViewMode::History(HistoryMode::Detail(id.clone()));
        self.pending_page = None;
        self.detail = Load::Loading;
        Some(FetchRequest::Detail { id })
    }

    /// Applies a detail response, unless the user has already navigated
    /// away from that campaign's detail view.
    pub fn apply_detail(&mut self, id: &CampaignId, result: Result<CampaignDetail, ApiError>) -> bool {
        if self.view != ViewMode::History(HistoryMode::Detail(id.clone())) {
            tracing::debug!(campaign = %id, "discarding stale detail response");
            return false;
        }
        match result {
            Ok(detail) => self.detail = Load::Ready(detail),
            Err(err) => {
                tracing::warn!(campaign = %id, error = %err, "campaign detail fetch failed");
                self.detail = Load::Failed;
            }
        }
        true
    }

    /// Leaves the detail view, discarding the fetched detail and
    /// re-fetching the page the cursor still points at.
    pub fn back_to_list(&mut self) -> FetchRequest {
        self.view = ViewMode::History(HistoryMode::List);
        self.detail = Load::Idle;
        self.request_current_page()
    }

    /// Returns to the dashboard. History payloads are dropped; the active
    /// campaign's poll loop is deliberately left running.
    pub fn back_to_dashboard(&mut self) {
        self.view = ViewMode::Dashboard;
        self.detail = Load::Idle;
        self.list = Load::Idle;
        self.pending_page = None;
    }

    /// Dismisses the current banner notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn request_current_page(&mut self) -> FetchRequest {
        let page = self.cursor.current_page();
        self.list = Load::Loading;
        self.pending_page = Some(page);
        FetchRequest::Page {
            page,
            page_size: self.cursor.page_size(),
        }
    }
}
