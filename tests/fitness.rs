use sidelobe::engines::evaluation::{autocorrelation, evaluate, peak_to_sidelobe};
use sidelobe::engines::generation::{Genotype, Specimen};

#[test]
fn test_length_four_all_ones_by_hand() {
    let genotype = Genotype::poor(4);

    // Shift 3: g0*g3 = 1
    // Shift 2: g0*g2 + g1*g3 = 2
    // Shift 1: g0*g1 + g1*g2 + g2*g3 = 3
    // Shift 0: 4 (peak)
    let profile = autocorrelation(&genotype);
    assert_eq!(profile, vec![1, 2, 3, 4]);

    // Peak over the worst side-lobe: 4 / 3
    assert_eq!(evaluate(&genotype), 4.0 / 3.0);
    assert_eq!(Specimen::poor(4).fitness(), 4.0 / 3.0);
}

#[test]
fn test_peak_is_last_profile_entry() {
    for length in 2..40 {
        let profile = autocorrelation(&Genotype::poor(length));
        assert_eq!(profile.len(), length);
        assert_eq!(*profile.last().unwrap(), length as i64);
        assert_eq!(profile[0], 1);
    }
}

#[test]
fn test_fitness_is_positive_for_any_sign_pattern() {
    // Every 6-locus genotype
    for bits in 0u32..64 {
        let loci = (0..6)
            .map(|i| if bits & (1 << i) == 0 { 1 } else { -1 })
            .collect();
        let fitness = evaluate(&Genotype::from_loci(loci));
        assert!(fitness.is_finite() && fitness > 0.0);
    }
}

#[test]
fn test_negation_and_reversal_preserve_fitness() {
    let loci = vec![1, 1, -1, 1, -1, -1, -1, 1, 1];
    let negated: Vec<i8> = loci.iter().map(|v| -v).collect();
    let reversed: Vec<i8> = loci.iter().rev().copied().collect();

    let base = evaluate(&Genotype::from_loci(loci));
    assert_eq!(evaluate(&Genotype::from_loci(negated)), base);
    assert_eq!(evaluate(&Genotype::from_loci(reversed)), base);
}

#[test]
fn test_ratio_of_profile() {
    assert_eq!(peak_to_sidelobe(&[1, -2, -1, 4]), 2.0);
    assert_eq!(peak_to_sidelobe(&[5]), f64::INFINITY);
    assert_eq!(peak_to_sidelobe(&[]), f64::INFINITY);
}
