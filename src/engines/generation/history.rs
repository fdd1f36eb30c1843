use crate::engines::generation::operators::{average_fitness, best_in};
use crate::engines::generation::specimen::Specimen;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// Snapshot of one generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRecord {
    pub generation: usize,
    pub best_fitness: f64,
    pub average_fitness: f64,
    pub best: Specimen,
    pub recorded_at: DateTime<Utc>,
}

/// Best and average fitness of every generation of a run.
///
/// Created when a run starts and handed back to the caller when it ends,
/// whether it finished or was cancelled.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FitnessHistory {
    records: Vec<GenerationRecord>,
}

impl FitnessHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state of `population`. Empty populations are ignored.
    pub fn record(&mut self, generation: usize, population: &[Specimen]) -> Option<&GenerationRecord> {
        let best = best_in(population)?.clone();
        self.records.push(GenerationRecord {
            generation,
            best_fitness: best.fitness(),
            average_fitness: average_fitness(population),
            best,
            recorded_at: Utc::now(),
        });
        self.records.last()
    }

    /// Best solution seen so far; the earliest generation wins ties.
    pub fn best(&self) -> Option<&GenerationRecord> {
        let mut iter = self.records.iter();
        let mut best = iter.next()?;
        for record in iter {
            if record.best_fitness > best.best_fitness {
                best = record;
            }
        }
        Some(best)
    }

    pub fn latest(&self) -> Option<&GenerationRecord> {
        self.records.last()
    }

    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    pub fn best_fitness_series(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.best_fitness).collect()
    }

    pub fn average_fitness_series(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.average_fitness).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
