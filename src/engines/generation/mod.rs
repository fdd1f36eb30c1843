pub mod genotype;
pub mod specimen;
pub mod operators;
pub mod pairing;
pub mod history;
pub mod progress;
pub mod evolution_engine;

pub use genotype::{Genotype, Locus};
pub use specimen::Specimen;
pub use operators::{average_fitness, best_in, evolve, maybe, recombine, recombine_at, roulette_index};
pub use pairing::{random_pairs, RandomPairs};
pub use history::{FitnessHistory, GenerationRecord};
pub use evolution_engine::{EvolutionEngine, StopReason};
pub use progress::{ConsoleProgressCallback, NullProgressCallback, ProgressCallback};
