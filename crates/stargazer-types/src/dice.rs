//! The randomness port.
//!
//! Every random draw in the simulation goes through [`Dice`]. Production
//! code passes any [`rand::Rng`] (thread-local or seeded), tests pass a
//! seeded `SmallRng` or a stub with pinned draws. Components take
//! `&mut dyn Dice`, so swapping the source never touches control flow.

use rand::Rng;

/// A source of random draws.
pub trait Dice {
    /// A uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// A uniform draw between `low` and `high` (order-insensitive).
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
        (hi - lo).mul_add(self.unit(), lo)
    }

    /// A Bernoulli trial succeeding with `probability`.
    fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// A uniform index in `[0, bound)`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: usize) -> usize;

    /// Pick an index with probability proportional to its weight.
    ///
    /// Non-positive and non-finite weights never win. Returns `None` when
    /// no weight is positive.
    fn weighted(&mut self, weights: &[f64]) -> Option<usize> {
        let usable = |w: f64| w.is_finite() && w > 0.0;
        let total: f64 = weights.iter().copied().filter(|w| usable(*w)).sum();
        if total <= 0.0 {
            return None;
        }
        let roll = self.unit() * total;
        let mut cumulative = 0.0;
        let mut last_usable = None;
        for (index, weight) in weights.iter().copied().enumerate() {
            if !usable(weight) {
                continue;
            }
            cumulative += weight;
            last_usable = Some(index);
            if roll < cumulative {
                return Some(index);
            }
        }
        // Rounding at the top of the range.
        last_usable
    }

    /// Draw `amount` distinct indices from `[0, len)`, in draw order.
    ///
    /// `amount` is clamped to `len`.
    fn distinct(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        let mut pool: Vec<usize> = (0..len).collect();
        for i in 0..amount {
            let j = i.saturating_add(self.below(len.saturating_sub(i)));
            pool.swap(i, j);
        }
        pool.truncate(amount);
        pool
    }
}

impl<R: Rng> Dice for R {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
        self.random_range(lo..=hi)
    }

    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            0
        } else {
            self.random_range(0..bound)
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.uniform(10.0, 30.0);
            assert!((10.0..=30.0).contains(&v));
        }
    }

    #[test]
    fn uniform_accepts_a_degenerate_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        let v = rng.uniform(5.0, 5.0);
        assert!((v - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn weighted_skips_zero_weights() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..500 {
            let pick = rng.weighted(&[0.0, 1.0, 0.0]);
            assert_eq!(pick, Some(1));
        }
        assert_eq!(rng.weighted(&[0.0, 0.0]), None);
        assert_eq!(rng.weighted(&[]), None);
    }

    #[test]
    fn distinct_picks_are_unique_and_clamped() {
        let mut rng = SmallRng::seed_from_u64(11);
        let picks = rng.distinct(10, 5);
        assert_eq!(picks.len(), 5);
        let mut sorted = picks.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 5);
        assert!(picks.iter().all(|&i| i < 10));

        assert_eq!(rng.distinct(3, 8).len(), 3);
        assert!(rng.distinct(0, 2).is_empty());
    }
}
