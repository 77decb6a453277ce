//! Simulation Systems
//!
//! The stochastic machinery that moves a generation forward: the shared
//! word-corruption operator, the pairwise communication round, and the
//! population-wide evolution pass.

pub mod communication;
pub mod drift;
pub mod evolution;

pub use communication::run_communication_round;
pub use drift::{drift_content, drift_word};
pub use evolution::evolve_population;
