// Map2Dif Wrapper - texture-aware frontend for the map2dif Torque map compiler
//
// This is the library crate containing the core orchestration logic.
// The binary crate (main.rs) provides the CLI entry point.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod notify;
pub mod services;

// Re-export commonly used types for convenience
pub use app::Orchestrator;
pub use config::ConfigStore;
pub use error::WrapperError;
pub use models::WrapperConfig;
pub use notify::{DialogNotifier, Notifier, StdoutNotifier};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Title used for message dialogs
pub const DIALOG_TITLE: &str = "Map2Dif Wrapper";
