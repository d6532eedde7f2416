mod monitor;

pub use monitor::MonitorView;
