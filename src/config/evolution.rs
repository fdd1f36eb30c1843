use super::traits::{check_probability, ConfigSection};
use crate::error::SidelobeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Specimens kept after every selection (N). Must be even.
    pub population_size: usize,
    /// Loci per genotype (L).
    pub genotype_length: usize,
    pub recombination_probability: f64,
    pub mutation_probability: f64,
    /// Loci flipped per mutation. Derived from the genotype length when unset.
    pub mutation_count: Option<usize>,
    /// Stop after this many generations. Runs until interrupted when unset.
    pub max_generations: Option<usize>,
    /// Stop once the best fitness reaches this value.
    pub target_fitness: Option<f64>,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            genotype_length: 300,
            recombination_probability: 0.99,
            mutation_probability: 0.3,
            mutation_count: None,
            max_generations: None,
            target_fitness: None,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// `mutation_count`, or `2 * round(log2(L))` when unset.
    pub fn effective_mutation_count(&self) -> usize {
        self.mutation_count.unwrap_or_else(|| {
            if self.genotype_length == 0 {
                0
            } else {
                2 * (self.genotype_length as f64).log2().round() as usize
            }
        })
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), SidelobeError> {
        if self.population_size < 2 || self.population_size % 2 != 0 {
            return Err(SidelobeError::Configuration(format!(
                "Population size must be an even number of at least 2, got {}",
                self.population_size
            )));
        }
        if self.genotype_length < 2 {
            return Err(SidelobeError::Configuration(format!(
                "Genotype length must be at least 2, got {}",
                self.genotype_length
            )));
        }
        check_probability(
            Self::section_name(),
            "recombination_probability",
            self.recombination_probability,
        )?;
        check_probability(
            Self::section_name(),
            "mutation_probability",
            self.mutation_probability,
        )?;
        if let Some(target) = self.target_fitness {
            if target.is_nan() {
                return Err(SidelobeError::Configuration(
                    "Target fitness must be a number".to_string(),
                ));
            }
        }
        Ok(())
    }
}
