//! Evolution System
//!
//! Applies every agent's independent language drift at the end of a
//! generation. Must run after the generation's communications: the next
//! round samples from the post-drift vocabularies.

use rand::rngs::SmallRng;

use crate::components::agent::Agent;

/// Evolve every agent in index order with the configured mutation rate.
pub fn evolve_population(agents: &mut [Agent], rng: &mut SmallRng, mutation_rate: f32) {
    for agent in agents.iter_mut() {
        agent.evolve_language(rng, mutation_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::agent::AgentId;
    use rand::SeedableRng;

    #[test]
    fn test_every_agent_advances_one_generation() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut agents: Vec<Agent> = (0..4)
            .map(|i| Agent::new(AgentId(i), ["hello", "water"], Some(10)))
            .collect();

        evolve_population(&mut agents, &mut rng, 0.2);

        assert!(agents.iter().all(|a| a.generation() == 1));
    }
}
