//! Autocorrelation based fitness of a genotype.
//!
//! The aperiodic autocorrelation at shift `s` is the dot product of the
//! sequence with itself shifted by `s` positions, counting only the
//! overlapping region:
//!
//! ```text
//! C(s) = sum_{j=0}^{L-s-1} g[j] * g[j+s]
//! ```
//!
//! `C(0)` equals the length and is the peak. Every other shift is a
//! side-lobe. A good sequence has a peak that dwarfs its worst side-lobe.

use crate::engines::generation::genotype::Genotype;

/// Correlation values ordered from the widest shift (`L-1`) down to
/// the full overlap (`0`). The last entry is the peak.
pub fn autocorrelation(genotype: &Genotype) -> Vec<i64> {
    let g = genotype.as_slice();
    let len = g.len();

    (0..len)
        .rev()
        .map(|shift| {
            g[..len - shift]
                .iter()
                .zip(&g[shift..])
                .map(|(&a, &b)| i64::from(a) * i64::from(b))
                .sum()
        })
        .collect()
}

/// Ratio of the peak to the largest side-lobe magnitude of a profile
/// produced by [`autocorrelation`].
///
/// A profile without side-lobes (genotypes shorter than 2) has nothing to
/// divide by and scores `f64::INFINITY`. For any longer genotype the
/// side-lobe at the widest shift is `g[0] * g[L-1] = ±1`, so the divisor
/// is at least one and the result is finite and positive.
pub fn peak_to_sidelobe(profile: &[i64]) -> f64 {
    let Some((&peak, sidelobes)) = profile.split_last() else {
        return f64::INFINITY;
    };

    let worst = sidelobes.iter().map(|c| c.abs()).max().unwrap_or(0);
    if worst == 0 {
        return f64::INFINITY;
    }

    peak as f64 / worst as f64
}

/// Fitness of a genotype. Pure; higher is better.
pub fn evaluate(genotype: &Genotype) -> f64 {
    peak_to_sidelobe(&autocorrelation(genotype))
}
