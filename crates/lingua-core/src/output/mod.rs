//! Simulation Output
//!
//! Statistics aggregation and export of completed runs. I/O happens only
//! after a run completes, never inside the generation loop.

pub mod export;
pub mod stats;

pub use export::{read_export, write_export};
pub use stats::collect_generation_stats;
