//! The one random generator of a session.
//!
//! Created once, then handed around by `&mut`. Nothing reseeds per call, so
//! a fixed seed replays the same session.

use std::ops::Range;

use log::debug;
use rand::{
    Rng as _, SeedableRng,
    distr::uniform::SampleUniform,
    rngs::StdRng,
    seq::{IndexedRandom, SliceRandom},
};

pub struct Rng {
    inner: StdRng,
}

impl Rng {
    /// Seeded from `seed`, or from OS entropy when there is none.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => {
                debug!("rng seeded from OS entropy");
                Self {
                    inner: StdRng::from_os_rng(),
                }
            }
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        debug!("rng seeded with {seed}");
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform value in `range`. An empty range yields its start.
    pub fn range<T>(&mut self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd + Copy,
    {
        if range.start >= range.end {
            return range.start;
        }
        self.inner.random_range(range)
    }

    /// True with probability `p`. Values outside `0.0..=1.0` saturate.
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.random::<f64>() < p
    }

    /// One entry of `table`, or `""` when it is empty.
    pub fn pick<'a>(&mut self, table: &[&'a str]) -> &'a str {
        table.choose(&mut self.inner).copied().unwrap_or_default()
    }

    /// Entry chosen with probability proportional to its weight. `None` when
    /// `items` is empty or every weight is zero.
    pub fn pick_weighted<'a, T>(&mut self, items: &'a [(T, u32)]) -> Option<&'a T> {
        items
            .choose_weighted(&mut self.inner, |(_, weight)| *weight)
            .ok()
            .map(|(item, _)| item)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Rng::seeded(42);
        let mut b = Rng::seeded(42);

        let left: Vec<u32> = (0..16).map(|_| a.range(0..1000)).collect();
        let right: Vec<u32> = (0..16).map(|_| b.range(0..1000)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_range_stays_in_bounds() {
        let mut rng = Rng::seeded(7);
        for _ in 0..500 {
            let v = rng.range(5..25);
            assert!((5..25).contains(&v));
            let f = rng.range(0.5..1.5);
            assert!((0.5..1.5).contains(&f));
        }
    }

    #[test]
    fn test_empty_range_returns_start() {
        let mut rng = Rng::seeded(1);
        assert_eq!(rng.range(10..10), 10);
        assert_eq!(rng.range(10..3), 10);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = Rng::seeded(3);
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn test_pick_from_empty_table() {
        let mut rng = Rng::seeded(0);
        assert_eq!(rng.pick(&[]), "");
    }

    #[test]
    fn test_pick_returns_table_entry() {
        let mut rng = Rng::seeded(9);
        let table = ["a", "b", "c"];
        for _ in 0..20 {
            assert!(table.contains(&rng.pick(&table)));
        }
    }

    #[test]
    fn test_pick_weighted_skips_zero_weight() {
        let mut rng = Rng::seeded(11);
        let items = [("never", 0), ("always", 5)];
        for _ in 0..50 {
            assert_eq!(rng.pick_weighted(&items), Some(&"always"));
        }

        let nothing: [(&str, u32); 0] = [];
        assert!(rng.pick_weighted(&nothing).is_none());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = Rng::seeded(5);
        let mut items = vec![1, 2, 3, 4, 5, 6];
        rng.shuffle(&mut items);
        items.sort_unstable();
        assert_eq!(items, vec![1, 2, 3, 4, 5, 6]);
    }
}
