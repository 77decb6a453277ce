//! Simulation Components
//!
//! Data owned by the simulator: agents, their vocabularies and grammar
//! rules, and the interaction network.

pub mod agent;
pub mod grammar;
pub mod network;
pub mod vocabulary;

pub use agent::{Agent, AgentId, ReceivedMessage};
pub use grammar::GrammarRule;
pub use network::InteractionNetwork;
pub use vocabulary::Vocabulary;
