// Application layer - View orchestration over injectable ports
pub mod chart_renderer;
pub mod identity;
pub mod poll_timer;
pub mod refresh_engine;
pub mod therma_api;
pub mod view_controller;

#[cfg(test)]
pub(crate) mod testing;
