// Library interface for pitwall
// This allows integration tests to access internal modules

pub mod config;
pub mod errors;
pub mod provider;
pub mod strategy;
pub mod ui;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::PitwallError;
pub use provider::{OpenF1Provider, ResponseCache, SessionKind, SessionProvider};
pub use strategy::{Compound, DriverRecord, LapRecord, RaceSelection, SessionData, Stint};
pub use ui::StrategyChart;
