//! Dashboard screen
//!
//! Split into state, top-level renderer and per-panel components

pub mod components;
pub mod renderer;
pub mod state;
pub mod utils;

pub use renderer::render_dashboard;
pub use state::DashboardState;
