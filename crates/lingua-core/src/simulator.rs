//! Simulator
//!
//! The single owned aggregate for one run: population, interaction network,
//! seeded RNG, and the append-only statistics sequence. Generations execute
//! strictly in order; each generation's communications sample the
//! vocabularies the previous generation's drift left behind, so no
//! generation may begin before the prior one is fully applied.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use lingua_report::{
    GenerationStats, LanguageSample, NetworkView, RuleSample, SimulationExport,
    SimulationParameters,
};

use crate::components::agent::{Agent, AgentId};
use crate::components::network::InteractionNetwork;
use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::output::stats::collect_generation_stats;
use crate::systems::communication::run_communication_round;
use crate::systems::evolution::evolve_population;

/// Words every agent starts out knowing
const SEED_VOCABULARY: &[&str] = &[
    "hello", "goodbye", "yes", "no", "please", "thank", "you", "me", "I", "the", "a", "and",
    "or", "but", "is", "are", "was", "were", "have", "has", "water", "food", "house", "tree",
    "sun", "moon", "day", "night", "big", "small",
];

/// Extra words seeded into every third agent, so dialects have a starting
/// point of divergence
const DIALECT_WORDS: &[&str] = &["greetings", "farewell"];

/// Grammar rules returned by a language sample
const SAMPLE_RULE_COUNT: usize = 5;

/// The simulation aggregate. Construct once, then extend the run freely:
/// `run_simulation` continues from the current generation rather than
/// resetting.
pub struct Simulator {
    config: SimulationConfig,
    agents: Vec<Agent>,
    network: InteractionNetwork,
    rng: SmallRng,
    generation: u64,
    stats: Vec<GenerationStats>,
}

impl Simulator {
    /// Build a population from a validated configuration.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut agents = Vec::with_capacity(config.population_size);
        for i in 0..config.population_size {
            let mut seed_words = SEED_VOCABULARY.to_vec();
            if i % 3 == 0 {
                seed_words.extend_from_slice(DIALECT_WORDS);
            }
            agents.push(Agent::new(AgentId(i), seed_words, config.history_limit));
        }

        Ok(Self {
            network: InteractionNetwork::new(config.population_size),
            rng: SmallRng::seed_from_u64(config.seed),
            config,
            agents,
            generation: 0,
            stats: Vec::new(),
        })
    }

    /// One full generation: a batch of communications, then every agent's
    /// independent drift, then a statistics snapshot.
    pub fn step_generation(&mut self) {
        run_communication_round(
            &mut self.agents,
            &mut self.network,
            &mut self.rng,
            self.config.communication_frequency,
            self.config.error_rate,
        );
        evolve_population(&mut self.agents, &mut self.rng, self.config.mutation_rate);
        self.generation += 1;

        let stats = collect_generation_stats(self.generation, &self.agents, &self.network);
        debug!(
            generation = self.generation,
            avg_vocabulary_size = stats.avg_vocabulary_size,
            avg_communication_success = stats.avg_communication_success,
            total_unique_words = stats.total_unique_words,
            "generation complete"
        );
        self.stats.push(stats);
    }

    /// Run `generations` steps in strict sequence. Calling this again
    /// continues from the current generation; nothing is reset.
    pub fn run_simulation(&mut self, generations: u64) {
        info!(
            generations,
            population = self.config.population_size,
            seed = self.config.seed,
            "starting simulation run"
        );
        for _ in 0..generations {
            self.step_generation();
        }
        info!(generation = self.generation, "simulation run complete");
    }

    /// Inspect an agent's current language without mutating state: its
    /// top-weighted words and first grammar rules.
    pub fn agent_language_sample(
        &self,
        agent_id: usize,
        num_words: usize,
    ) -> Result<LanguageSample> {
        let agent = self
            .agents
            .get(agent_id)
            .ok_or(SimError::UnknownAgent(agent_id))?;

        let vocabulary_sample = agent
            .vocabulary()
            .top_words(num_words)
            .into_iter()
            .map(|(word, _)| word.to_string())
            .collect();
        let grammar_rules_sample = agent
            .grammar_rules()
            .iter()
            .take(SAMPLE_RULE_COUNT)
            .map(|rule| RuleSample {
                pattern: rule.pattern.clone(),
                replacement: rule.replacement.clone(),
                frequency: rule.frequency,
            })
            .collect();

        Ok(LanguageSample {
            agent_id,
            generation: agent.generation(),
            vocabulary_sample,
            grammar_rules_sample,
            total_vocabulary_size: agent.vocabulary_size(),
            total_grammar_rules: agent.grammar_rule_count(),
            language_complexity: agent.language_complexity(),
        })
    }

    /// Generations completed so far; 0 means the simulation has not run.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Read-only access to the interaction graph.
    pub fn network(&self) -> &InteractionNetwork {
        &self.network
    }

    /// Serializable graph view for external layout and rendering.
    pub fn network_view(&self) -> NetworkView {
        self.network.view()
    }

    /// The append-only per-generation statistics sequence.
    pub fn generation_stats(&self) -> &[GenerationStats] {
        &self.stats
    }

    /// Assemble the export document for external reporting tools.
    pub fn export(&self) -> SimulationExport {
        SimulationExport {
            simulation_parameters: SimulationParameters {
                population_size: self.config.population_size,
                mutation_rate: self.config.mutation_rate,
                communication_frequency: self.config.communication_frequency,
                error_rate: self.config.error_rate,
                seed: self.config.seed,
                generations: self.generation,
            },
            generation_statistics: self.stats.clone(),
            final_agent_data: self.agents.iter().map(Agent::summary).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SimulationConfig {
        SimulationConfig {
            population_size: 10,
            mutation_rate: 0.1,
            communication_frequency: 0.5,
            error_rate: 0.1,
            seed: 42,
            history_limit: Some(50),
        }
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = SimulationConfig {
            population_size: 0,
            ..test_config()
        };
        assert!(matches!(
            Simulator::new(config),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_every_third_agent_gets_dialect_words() {
        let simulator = Simulator::new(test_config()).unwrap();
        assert!(simulator.agents()[0].vocabulary().contains("greetings"));
        assert!(!simulator.agents()[1].vocabulary().contains("greetings"));
        assert!(simulator.agents()[3].vocabulary().contains("farewell"));
    }

    #[test]
    fn test_zero_generations_is_a_no_op() {
        let mut simulator = Simulator::new(test_config()).unwrap();
        simulator.run_simulation(0);

        assert_eq!(simulator.generation(), 0);
        assert!(simulator.generation_stats().is_empty());
        assert!(simulator.agents().iter().all(|a| a.generation() == 0));
        assert_eq!(simulator.network().edge_count(), 0);
    }

    #[test]
    fn test_runs_are_additive() {
        let mut simulator = Simulator::new(test_config()).unwrap();
        simulator.run_simulation(3);
        simulator.run_simulation(2);

        assert_eq!(simulator.generation(), 5);
        assert_eq!(simulator.generation_stats().len(), 5);
        let generations: Vec<u64> = simulator
            .generation_stats()
            .iter()
            .map(|s| s.generation)
            .collect();
        assert_eq!(generations, vec![1, 2, 3, 4, 5]);
        assert!(simulator.agents().iter().all(|a| a.generation() == 5));
    }

    #[test]
    fn test_language_sample_for_known_agent() {
        let mut simulator = Simulator::new(test_config()).unwrap();
        simulator.run_simulation(2);

        let sample = simulator.agent_language_sample(0, 5).unwrap();
        assert_eq!(sample.agent_id, 0);
        assert_eq!(sample.generation, 2);
        assert_eq!(sample.vocabulary_sample.len(), 5);
        assert!(sample.grammar_rules_sample.len() <= SAMPLE_RULE_COUNT);
        assert!(sample.total_vocabulary_size >= sample.vocabulary_sample.len());
    }

    #[test]
    fn test_language_sample_for_unknown_agent() {
        let simulator = Simulator::new(test_config()).unwrap();
        assert!(matches!(
            simulator.agent_language_sample(999, 5),
            Err(SimError::UnknownAgent(999))
        ));
    }

    #[test]
    fn test_export_mirrors_run_state() {
        let mut simulator = Simulator::new(test_config()).unwrap();
        simulator.run_simulation(4);

        let export = simulator.export();
        assert_eq!(export.simulation_parameters.population_size, 10);
        assert_eq!(export.simulation_parameters.generations, 4);
        assert_eq!(export.generation_statistics.len(), 4);
        assert_eq!(export.final_agent_data.len(), 10);
        assert_eq!(export.final_agent_data[3].agent_id, 3);
    }
}
