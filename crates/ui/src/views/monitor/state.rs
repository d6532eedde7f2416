use dioxus::prelude::*;
use services::{CampaignUpload, MonitorState};

/// Signal bundle owned by `MonitorView`.
///
/// `state` is the single writer-owned state machine; `selected_file` holds
/// the recipient file read out of the picker before submit.
#[derive(Clone, Copy)]
pub(super) struct MonitorHandles {
    pub state: Signal<MonitorState>,
    pub selected_file: Signal<Option<CampaignUpload>>,
}

pub(super) fn use_monitor_state(page_size: u32) -> MonitorHandles {
    let state = use_signal(|| MonitorState::new(page_size));
    let selected_file = use_signal(|| None);
    MonitorHandles {
        state,
        selected_file,
    }
}
