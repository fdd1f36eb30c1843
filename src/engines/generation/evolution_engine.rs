use crate::config::evolution::EvolutionConfig;
use crate::config::traits::ConfigSection;
use crate::engines::generation::{
    history::FitnessHistory,
    operators::{best_in, evolve, recombine},
    pairing::random_pairs,
    progress::ProgressCallback,
    specimen::Specimen,
};
use crate::error::Result;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};

/// Why [`EvolutionEngine::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    TargetReached,
    GenerationLimit,
    Cancelled,
}

pub struct EvolutionEngine {
    config: EvolutionConfig,
    mutation_count: usize,
    population: Vec<Specimen>,
    generation: usize,
    rng: StdRng,
}

impl EvolutionEngine {
    /// Validate `config` and seed a population of poor specimens.
    pub fn new(config: EvolutionConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let population = (0..config.population_size)
            .map(|_| Specimen::poor(config.genotype_length))
            .collect();

        Ok(Self {
            mutation_count: config.effective_mutation_count(),
            config,
            population,
            generation: 0,
            rng,
        })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn population(&self) -> &[Specimen] {
        &self.population
    }

    /// Number of generations stepped so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn best(&self) -> &Specimen {
        best_in(&self.population).expect("population is never empty")
    }

    /// Advance one generation: pair, recombine, mutate offspring, then
    /// select back down to the target size.
    pub fn step(&mut self) -> Result<&Specimen> {
        let pairs: Vec<_> = random_pairs(&self.population, &mut self.rng).collect();

        let mut younglings = Vec::with_capacity(self.population.len());
        for (alice, bob) in pairs {
            if let Some((dan, carol)) = recombine(
                alice,
                bob,
                self.config.recombination_probability,
                &mut self.rng,
            ) {
                younglings.push(dan);
                younglings.push(carol);
            }
        }

        for specimen in &mut younglings {
            specimen.mutate(
                self.mutation_count,
                self.config.mutation_probability,
                &mut self.rng,
            );
        }

        debug!(
            "Generation {}: {} offspring joined {} specimens",
            self.generation + 1,
            younglings.len(),
            self.population.len()
        );

        let mut pool = std::mem::take(&mut self.population);
        pool.extend(younglings);
        self.population = evolve(pool, self.config.population_size, &mut self.rng)?;
        self.generation += 1;

        Ok(self.best())
    }

    fn is_good_enough(&self, best_fitness: f64) -> bool {
        self.config
            .target_fitness
            .map_or(false, |target| best_fitness >= target)
    }

    /// Step until the target fitness, the generation limit or `cancel`.
    ///
    /// `cancel` is checked between generations, so a raised flag lets the
    /// current generation finish before returning.
    pub fn run<C: ProgressCallback>(
        &mut self,
        callback: &mut C,
        cancel: &AtomicBool,
    ) -> Result<(FitnessHistory, StopReason)> {
        info!(
            "Evolving {} specimens of length {} (recombination {}, mutation {} x {})",
            self.config.population_size,
            self.config.genotype_length,
            self.config.recombination_probability,
            self.config.mutation_probability,
            self.mutation_count
        );

        let mut history = FitnessHistory::new();
        if let Some(record) = history.record(self.generation, &self.population) {
            callback.on_generation_complete(record);
        }

        let reason = loop {
            let best_fitness = self.best().fitness();
            if self.is_good_enough(best_fitness) {
                break StopReason::TargetReached;
            }
            if cancel.load(Ordering::SeqCst) {
                warn!("Evolution cancelled after {} generations", self.generation);
                break StopReason::Cancelled;
            }
            if let Some(limit) = self.config.max_generations {
                if self.generation >= limit {
                    break StopReason::GenerationLimit;
                }
            }

            self.step()?;
            if let Some(record) = history.record(self.generation, &self.population) {
                callback.on_generation_complete(record);
            }
        };

        info!("Evolution stopped ({:?}) at generation {}", reason, self.generation);
        Ok((history, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::progress::NullProgressCallback;

    fn small_config() -> EvolutionConfig {
        EvolutionConfig {
            population_size: 8,
            genotype_length: 16,
            max_generations: Some(5),
            seed: Some(42),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_population_is_poor() {
        let engine = EvolutionEngine::new(small_config()).unwrap();

        assert_eq!(engine.population().len(), 8);
        assert!(engine
            .population()
            .iter()
            .all(|s| s.genotype().iter().all(|&v| v == 1)));
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EvolutionConfig {
            population_size: 3,
            ..small_config()
        };
        assert!(EvolutionEngine::new(config).is_err());
    }

    #[test]
    fn test_step_keeps_population_size_and_length() {
        let mut engine = EvolutionEngine::new(small_config()).unwrap();

        for _ in 0..10 {
            engine.step().unwrap();
            assert_eq!(engine.population().len(), 8);
            assert!(engine.population().iter().all(|s| s.len() == 16));
        }
        assert_eq!(engine.generation(), 10);
    }

    #[test]
    fn test_run_stops_at_generation_limit() {
        let mut engine = EvolutionEngine::new(small_config()).unwrap();
        let cancel = AtomicBool::new(false);

        let (history, reason) = engine.run(&mut NullProgressCallback, &cancel).unwrap();

        assert_eq!(reason, StopReason::GenerationLimit);
        // Initial population plus five generations
        assert_eq!(history.len(), 6);
    }

    #[test]
    fn test_run_honours_cancel_flag() {
        let mut engine = EvolutionEngine::new(EvolutionConfig {
            max_generations: None,
            ..small_config()
        })
        .unwrap();
        let cancel = AtomicBool::new(true);

        let (history, reason) = engine.run(&mut NullProgressCallback, &cancel).unwrap();

        assert_eq!(reason, StopReason::Cancelled);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_run_stops_at_target() {
        let mut engine = EvolutionEngine::new(EvolutionConfig {
            target_fitness: Some(1.0),
            ..small_config()
        })
        .unwrap();
        let cancel = AtomicBool::new(false);

        let (_, reason) = engine.run(&mut NullProgressCallback, &cancel).unwrap();

        assert_eq!(reason, StopReason::TargetReached);
        assert_eq!(engine.generation(), 0);
    }
}
