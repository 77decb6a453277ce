//! Communication System
//!
//! Drives one generation's batch of pairwise exchanges between randomly
//! paired agents and records successful contacts on the interaction
//! network. A failed exchange is a modeled outcome: it still advances the
//! receiver's counters and still teaches it the corrupted content.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::actions::message::MessageKind;
use crate::components::agent::Agent;
use crate::components::network::InteractionNetwork;

/// Run `⌊frequency × population⌋` exchanges. Populations of fewer than two
/// agents have nobody to pair, and the round is skipped.
pub fn run_communication_round(
    agents: &mut [Agent],
    network: &mut InteractionNetwork,
    rng: &mut SmallRng,
    communication_frequency: f32,
    error_rate: f32,
) {
    if agents.len() < 2 {
        return;
    }

    let exchanges = (agents.len() as f32 * communication_frequency) as usize;
    for _ in 0..exchanges {
        let sender = rng.gen_range(0..agents.len());
        let receiver = pick_other(rng, agents.len(), sender);
        let kind = MessageKind::ALL[rng.gen_range(0..MessageKind::ALL.len())];

        let message = agents[sender].generate_message(rng, kind, agents[receiver].id());
        let success = agents[receiver].receive_message(rng, &message, error_rate);

        if success {
            network.record_contact(message.sender, message.receiver);
        }
    }
}

/// Uniform draw over `0..n` excluding `taken`. Requires `n >= 2`.
fn pick_other(rng: &mut SmallRng, n: usize, taken: usize) -> usize {
    let idx = rng.gen_range(0..n - 1);
    if idx >= taken {
        idx + 1
    } else {
        idx
    }
}
