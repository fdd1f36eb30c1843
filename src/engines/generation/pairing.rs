use rand::Rng;

/// Lazy partition of a slice into disjoint random pairs.
///
/// Each element appears in exactly one pair. The iterator is consumed
/// once; create a new one for the next generation.
pub struct RandomPairs<'a, 'r, T, R> {
    items: &'a [T],
    unpaired: Vec<usize>,
    rng: &'r mut R,
}

/// Pair up `items` uniformly at random without replacement.
///
/// Panics if `items` has odd length.
pub fn random_pairs<'a, 'r, T, R: Rng>(
    items: &'a [T],
    rng: &'r mut R,
) -> RandomPairs<'a, 'r, T, R> {
    assert!(
        items.len() % 2 == 0,
        "cannot pair a population of odd size {}",
        items.len()
    );

    RandomPairs {
        items,
        unpaired: (0..items.len()).collect(),
        rng,
    }
}

impl<'a, 'r, T, R: Rng> RandomPairs<'a, 'r, T, R> {
    fn draw(&mut self) -> usize {
        let i = self.rng.gen_range(0..self.unpaired.len());
        self.unpaired.swap_remove(i)
    }
}

impl<'a, 'r, T, R: Rng> Iterator for RandomPairs<'a, 'r, T, R> {
    type Item = (&'a T, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.unpaired.is_empty() {
            return None;
        }
        let x = self.draw();
        let y = self.draw();
        let items = self.items;
        Some((&items[x], &items[y]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.unpaired.len() / 2;
        (remaining, Some(remaining))
    }
}

impl<'a, 'r, T, R: Rng> ExactSizeIterator for RandomPairs<'a, 'r, T, R> {}
