//! Client-side state for the campaign dashboard.
//!
//! `MonitorState` is a pure, synchronous state machine: UI events call
//! transition methods, transitions hand back [`FetchRequest`] descriptors,
//! and network responses re-enter through the guarded `apply_*` methods.
//! Keeping the machine free of I/O makes every transition and every
//! stale-response guard unit-testable without a running view.

mod results;
mod state;

pub use results::fetch_results_settled;
pub use state::{FetchRequest, HistoryMode, Load, MonitorState, Notice, ViewMode};
