use rand::{rngs::StdRng, Rng, SeedableRng};

/// Random source handed into every round by the caller.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: Option<u64>,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            seed: None,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniform draw in `[1, total]`. `total` must be positive.
    pub fn roll(&mut self, total: u64) -> u64 {
        self.rng.gen_range(1..=total)
    }

    /// Uniform draw in `[0, len)`. `len` must be positive.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RngState::from_seed(42);
        let mut b = RngState::from_seed(42);
        let left: Vec<u64> = (0..16).map(|_| a.roll(100)).collect();
        let right: Vec<u64> = (0..16).map(|_| b.roll(100)).collect();
        assert_eq!(left, right);
        assert_eq!(a.seed(), Some(42));
    }

    #[test]
    fn roll_stays_in_closed_range() {
        let mut rng = RngState::from_seed(7);
        for _ in 0..1000 {
            let value = rng.roll(3);
            assert!((1..=3).contains(&value));
        }
        for _ in 0..100 {
            assert_eq!(rng.roll(1), 1);
        }
    }

    #[test]
    fn index_stays_below_len() {
        let mut rng = RngState::from_seed(7);
        for _ in 0..1000 {
            assert!(rng.index(4) < 4);
        }
    }
}
