//! Communication Actions
//!
//! The message model: categories, content construction, and the immutable
//! record exchanged between agents.

pub mod message;

pub use message::{Message, MessageKind};
