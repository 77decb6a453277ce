//! Statistics Collection
//!
//! Population-wide aggregates computed after each generation. Snapshots are
//! appended to the simulator's ordered sequence and never mutated
//! retroactively.

use std::collections::BTreeSet;

use lingua_report::GenerationStats;

use crate::components::agent::Agent;
use crate::components::network::InteractionNetwork;

/// Compute the statistics snapshot for a completed generation.
pub fn collect_generation_stats(
    generation: u64,
    agents: &[Agent],
    network: &InteractionNetwork,
) -> GenerationStats {
    let population = agents.len().max(1) as f64;

    let avg_vocabulary_size = agents
        .iter()
        .map(|agent| agent.vocabulary_size() as f64)
        .sum::<f64>()
        / population;
    let avg_grammar_rules = agents
        .iter()
        .map(|agent| agent.grammar_rule_count() as f64)
        .sum::<f64>()
        / population;
    let avg_language_complexity = agents
        .iter()
        .map(|agent| f64::from(agent.language_complexity()))
        .sum::<f64>()
        / population;
    let avg_communication_success = agents
        .iter()
        .map(|agent| agent.communication_success_rate())
        .sum::<f64>()
        / population;

    let unique_words: BTreeSet<&str> = agents
        .iter()
        .flat_map(|agent| agent.vocabulary().words().map(|(word, _)| word))
        .collect();

    GenerationStats {
        generation,
        avg_vocabulary_size,
        avg_grammar_rules,
        avg_language_complexity,
        avg_communication_success,
        total_unique_words: unique_words.len(),
        network_density: network.density(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::agent::AgentId;

    #[test]
    fn test_unique_words_are_a_set_union() {
        let agents = vec![
            Agent::new(AgentId(0), ["hello", "water"], None),
            Agent::new(AgentId(1), ["hello", "food"], None),
        ];
        let network = InteractionNetwork::new(2);

        let stats = collect_generation_stats(1, &agents, &network);
        assert_eq!(stats.total_unique_words, 3);
        assert_eq!(stats.avg_vocabulary_size, 2.0);
        assert_eq!(stats.generation, 1);
    }

    #[test]
    fn test_success_mean_is_zero_before_any_communication() {
        let agents = vec![Agent::new(AgentId(0), ["hello"], None)];
        let network = InteractionNetwork::new(1);

        let stats = collect_generation_stats(0, &agents, &network);
        assert_eq!(stats.avg_communication_success, 0.0);
        assert_eq!(stats.network_density, 0.0);
    }
}
