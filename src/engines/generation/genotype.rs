use serde::Serialize;
use std::fmt;
use std::ops::Index;

/// Value held at a single position of a genotype. Always `1` or `-1`.
pub type Locus = i8;

/// Fixed-length sequence of signed unit values.
///
/// The length is set at construction. Operators that change content
/// (`flip`, `set`, `swap_tail`) never change it, so a genotype keeps its
/// length for the lifetime of the specimen that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Genotype(Vec<Locus>);

fn is_unit(value: Locus) -> bool {
    value == 1 || value == -1
}

impl Genotype {
    /// All `+1` genotype of the given length.
    pub fn poor(length: usize) -> Self {
        Self(vec![1; length])
    }

    /// Panics if any value is not `+1` or `-1`.
    pub fn from_loci(loci: Vec<Locus>) -> Self {
        assert!(
            loci.iter().copied().all(is_unit),
            "genotype loci must be +1 or -1, got {:?}",
            loci
        );
        Self(loci)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Locus] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Locus> {
        self.0.iter()
    }

    pub(crate) fn flip(&mut self, index: usize) {
        self.0[index] = -self.0[index];
    }

    pub(crate) fn set(&mut self, index: usize, value: Locus) {
        assert!(is_unit(value), "locus value must be +1 or -1, got {}", value);
        self.0[index] = value;
    }

    /// Exchange the segments `[cut, len)` of two equally long genotypes.
    pub(crate) fn swap_tail(&mut self, other: &mut Genotype, cut: usize) {
        assert_eq!(
            self.len(),
            other.len(),
            "cannot swap tails of genotypes with different lengths"
        );
        self.0[cut..].swap_with_slice(&mut other.0[cut..]);
    }
}

impl Index<usize> for Genotype {
    type Output = Locus;

    fn index(&self, index: usize) -> &Locus {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Genotype {
    type Item = &'a Locus;
    type IntoIter = std::slice::Iter<'a, Locus>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, locus) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", locus)?;
        }
        write!(f, "]")
    }
}
