use crate::engines::evaluation::fitness;
use crate::engines::generation::genotype::{Genotype, Locus};
use crate::engines::generation::operators::maybe;
use rand::Rng;
use serde::Serialize;
use std::ops::Index;

/// A genotype together with its fitness.
///
/// The genotype is private: every path that changes its content goes
/// through a method here and refreshes the cached fitness before
/// returning, so `fitness()` always agrees with `evaluate(genotype())`.
#[derive(Debug, Clone, Serialize)]
pub struct Specimen {
    genotype: Genotype,
    fitness: f64,
}

impl Specimen {
    pub fn new(genotype: Genotype) -> Self {
        let fitness = fitness::evaluate(&genotype);
        Self { genotype, fitness }
    }

    /// Specimen with an all `+1` genotype of `length` loci.
    pub fn poor(length: usize) -> Self {
        Self::new(Genotype::poor(length))
    }

    pub fn genotype(&self) -> &Genotype {
        &self.genotype
    }

    /// Cached value, never recomputed on read.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn len(&self) -> usize {
        self.genotype.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genotype.is_empty()
    }

    /// Write a single locus and refresh fitness.
    pub fn set(&mut self, index: usize, value: Locus) {
        self.genotype.set(index, value);
        self.refresh();
    }

    /// With probability `probability`, flip `count` uniformly chosen loci
    /// (repeats allowed) and refresh fitness once. Otherwise does nothing.
    pub fn mutate<R: Rng>(&mut self, count: usize, probability: f64, rng: &mut R) {
        if maybe(probability, rng) {
            self.flip_random(count, rng);
        }
    }

    /// Unconditional part of [`Specimen::mutate`].
    pub fn flip_random<R: Rng>(&mut self, count: usize, rng: &mut R) {
        let len = self.genotype.len();
        if len > 0 {
            for _ in 0..count {
                self.genotype.flip(rng.gen_range(0..len));
            }
        }
        self.refresh();
    }

    /// Exchange loci `[cut, len)` with `other`, refreshing both.
    pub(crate) fn swap_tail(&mut self, other: &mut Specimen, cut: usize) {
        self.genotype.swap_tail(&mut other.genotype, cut);
        self.refresh();
        other.refresh();
    }

    fn refresh(&mut self) {
        self.fitness = fitness::evaluate(&self.genotype);
    }
}

impl Index<usize> for Specimen {
    type Output = Locus;

    fn index(&self, index: usize) -> &Locus {
        &self.genotype[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_poor_specimen_has_fitness_computed() {
        let specimen = Specimen::poor(4);
        assert_eq!(specimen.len(), 4);
        assert!((specimen.fitness() - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_clone_does_not_alias_genotype() {
        let original = Specimen::poor(6);
        let mut copy = original.clone();

        copy.set(2, -1);

        assert_eq!(original[2], 1);
        assert_eq!(copy[2], -1);
        assert_eq!(original.fitness(), Specimen::poor(6).fitness());
    }

    #[test]
    fn test_set_refreshes_fitness() {
        let mut specimen = Specimen::poor(4);
        specimen.set(1, -1);
        specimen.set(2, -1);
        // [1, -1, -1, 1] scores 4 / 2
        assert_eq!(specimen.fitness(), 2.0);
        assert_eq!(specimen.fitness(), fitness::evaluate(specimen.genotype()));
    }

    #[test]
    fn test_mutate_with_zero_count_keeps_content() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut specimen = Specimen::poor(8);
        let before = specimen.clone();

        specimen.mutate(0, 1.0, &mut rng);

        assert_eq!(specimen.genotype(), before.genotype());
        assert_eq!(specimen.fitness(), before.fitness());
    }

    #[test]
    fn test_mutate_probability_bounds() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let mut untouched = Specimen::poor(16);
            untouched.mutate(3, 0.0, &mut rng);
            assert_eq!(untouched.genotype(), &Genotype::poor(16));
        }

        // A single flip always changes exactly one locus.
        for _ in 0..50 {
            let mut flipped = Specimen::poor(16);
            flipped.mutate(1, 1.0, &mut rng);
            assert_eq!(flipped.genotype().iter().filter(|&&v| v == -1).count(), 1);
        }
    }

    #[test]
    fn test_mutate_keeps_fitness_in_sync() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut specimen = Specimen::poor(32);

        for _ in 0..20 {
            specimen.mutate(4, 1.0, &mut rng);
            assert_eq!(specimen.len(), 32);
            assert_eq!(specimen.fitness(), fitness::evaluate(specimen.genotype()));
        }
    }
}
