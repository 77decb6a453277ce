//! Core simulation logic: agents, vocabularies, grammar, communication.
//!
//! A discrete-generation, stochastic multi-agent simulation in which
//! independent agents develop divergent, mutating languages purely from
//! imperfect peer-to-peer communication. Agents never share memory; all
//! cross-agent influence travels through immutable [`Message`] values.

pub mod actions;
pub mod components;
pub mod config;
pub mod error;
pub mod output;
pub mod simulator;
pub mod systems;

pub use actions::message::{Message, MessageKind};
pub use components::agent::{Agent, AgentId, ReceivedMessage};
pub use components::grammar::GrammarRule;
pub use components::network::InteractionNetwork;
pub use components::vocabulary::Vocabulary;
pub use config::SimulationConfig;
pub use error::{Result, SimError};
pub use simulator::Simulator;
