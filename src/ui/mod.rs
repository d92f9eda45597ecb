// Module declarations
mod app;
pub mod dashboard;
mod worker;
// Re-exports for external use
pub use app::{App, UIConfig, run};
