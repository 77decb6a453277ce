//! Shared report types and serialization for the language evolution simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! External reporting and visualization tools consume these documents to
//! re-inspect a completed run without re-simulating it.

pub mod network;
pub mod sample;
pub mod snapshot;
pub mod stats;

// Re-export statistics types
pub use stats::GenerationStats;

// Re-export export document types
pub use snapshot::{AgentSummary, SimulationExport, SimulationParameters};

// Re-export inspection types
pub use network::NetworkView;
pub use sample::{LanguageSample, RuleSample};
