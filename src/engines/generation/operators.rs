use crate::engines::generation::specimen::Specimen;
use crate::error::{Result, SidelobeError};
use rand::Rng;

/// Roll for an event of the given probability.
///
/// `1.0` always succeeds and `0.0` never does.
pub fn maybe<R: Rng>(probability: f64, rng: &mut R) -> bool {
    rng.gen::<f64>() < probability
}

/// Single-point crossover, applied with probability `probability`.
///
/// Returns `None` when the roll fails: the pair contributes no offspring.
pub fn recombine<R: Rng>(
    alice: &Specimen,
    bob: &Specimen,
    probability: f64,
    rng: &mut R,
) -> Option<(Specimen, Specimen)> {
    if !maybe(probability, rng) {
        return None;
    }

    assert_eq!(
        alice.len(),
        bob.len(),
        "recombined specimens must have equal genotype lengths"
    );
    let cut = rng.gen_range(0..alice.len().max(1));
    Some(recombine_at(alice, bob, cut))
}

/// Single-point crossover at a fixed cut.
///
/// Clones the parents into `carol` (from `alice`) and `dan` (from `bob`),
/// swaps loci `[cut, len)` between them and returns `(dan, carol)`.
/// A cut of `0` swaps everything; a cut equal to the length swaps nothing.
pub fn recombine_at(alice: &Specimen, bob: &Specimen, cut: usize) -> (Specimen, Specimen) {
    assert_eq!(
        alice.len(),
        bob.len(),
        "recombined specimens must have equal genotype lengths"
    );
    assert!(cut <= alice.len(), "cut {} is past genotype end", cut);

    let mut carol = alice.clone();
    let mut dan = bob.clone();
    carol.swap_tail(&mut dan, cut);

    (dan, carol)
}

/// Roulette wheel spin: index drawn with probability proportional to fitness.
///
/// Negative, NaN or infinite fitness, and a pool whose fitness sums to zero,
/// cannot form a distribution and are rejected.
pub fn roulette_index<R: Rng>(population: &[Specimen], rng: &mut R) -> Result<usize> {
    let mut total_fitness = 0.0;
    for (i, specimen) in population.iter().enumerate() {
        let fitness = specimen.fitness();
        if !fitness.is_finite() || fitness < 0.0 {
            return Err(SidelobeError::Selection(format!(
                "specimen {} has fitness {} which cannot be used as a roulette weight",
                i, fitness
            )));
        }
        total_fitness += fitness;
    }

    if !(total_fitness > 0.0 && total_fitness.is_finite()) {
        return Err(SidelobeError::Selection(format!(
            "cumulative fitness {} of {} specimens cannot be normalised",
            total_fitness,
            population.len()
        )));
    }

    let mut spin = rng.gen::<f64>() * total_fitness;
    for (i, specimen) in population.iter().enumerate() {
        spin -= specimen.fitness();
        if spin < 0.0 {
            return Ok(i);
        }
    }

    // Rounding left a sliver at the end of the wheel
    Ok(population
        .iter()
        .rposition(|s| s.fitness() > 0.0)
        .unwrap_or(population.len() - 1))
}

/// Reduce `population` to `count` specimens by roulette selection
/// without replacement. Unselected specimens are dropped.
///
/// The wheel is rebuilt from the remaining pool before every draw.
/// Panics if the pool is smaller than `count`.
pub fn evolve<R: Rng>(
    mut population: Vec<Specimen>,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Specimen>> {
    assert!(
        population.len() >= count,
        "cannot select {} specimens from a pool of {}",
        count,
        population.len()
    );

    let mut nextgen = Vec::with_capacity(count);
    for _ in 0..count {
        let lucker = roulette_index(&population, rng)?;
        nextgen.push(population.remove(lucker));
    }

    Ok(nextgen)
}

/// Specimen with the highest fitness; the first one wins ties.
pub fn best_in(population: &[Specimen]) -> Option<&Specimen> {
    let mut iter = population.iter();
    let mut best = iter.next()?;
    for specimen in iter {
        if specimen.fitness() > best.fitness() {
            best = specimen;
        }
    }
    Some(best)
}

/// Mean fitness of a population, `0.0` when empty.
pub fn average_fitness(population: &[Specimen]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(Specimen::fitness).sum::<f64>() / population.len() as f64
}
