mod actions;
mod components;
pub(crate) mod state;
mod view;

pub use view::MonitorView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
