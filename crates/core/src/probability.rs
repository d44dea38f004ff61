use crate::{ConfigError, RngState, Weights};

/// Weighted symbol picker with a fixed walk order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    entries: Vec<(String, u64)>,
    total: u64,
}

impl ProbabilityTable {
    /// `context` names the distribution in error messages.
    pub fn new(context: &str, weights: &Weights) -> Result<Self, ConfigError> {
        if weights.is_empty() {
            return Err(ConfigError::EmptyDistribution(context.to_string()));
        }
        let entries: Vec<(String, u64)> = weights
            .iter()
            .map(|(name, weight)| (name.clone(), u64::from(*weight)))
            .collect();
        let total = entries.iter().map(|(_, weight)| *weight).sum();
        if total == 0 {
            return Err(ConfigError::ZeroTotalWeight(context.to_string()));
        }
        Ok(Self { entries, total })
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Walks cumulative weights and returns the first symbol reaching `roll`.
    /// `roll` is clamped into `[1, total]`.
    pub fn pick(&self, roll: u64) -> &str {
        let roll = roll.clamp(1, self.total);
        let mut cumulative = 0;
        for (name, weight) in &self.entries {
            cumulative += weight;
            if roll <= cumulative {
                return name;
            }
        }
        // unreachable while total is the sum of the weights
        &self.entries[self.entries.len() - 1].0
    }

    pub fn sample(&self, rng: &mut RngState) -> &str {
        let roll = rng.roll(self.total);
        let picked = self.pick(roll);
        log::trace!("roll {}/{} -> {}", roll, self.total, picked);
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fixtures::weights;

    macro_rules! pick_case {
        ($name:ident, $roll:expr, $expected:expr) => {
            #[test]
            fn $name() {
                let table = ProbabilityTable::new("test", &weights(&[("A", 1), ("B", 2), ("C", 3)]))
                    .expect("table");
                assert_eq!(table.pick($roll), $expected);
            }
        };
    }

    pick_case!(pick_first_slot, 1, "A");
    pick_case!(pick_second_slot_low, 2, "B");
    pick_case!(pick_second_slot_high, 3, "B");
    pick_case!(pick_third_slot_low, 4, "C");
    pick_case!(pick_third_slot_high, 6, "C");
    pick_case!(pick_clamps_zero, 0, "A");
    pick_case!(pick_clamps_overflow, 99, "C");

    #[test]
    fn zero_weight_entries_are_never_picked() {
        let table =
            ProbabilityTable::new("test", &weights(&[("A", 0), ("B", 1), ("C", 0)])).expect("table");
        assert_eq!(table.total(), 1);
        let mut rng = RngState::from_seed(3);
        for _ in 0..200 {
            assert_eq!(table.sample(&mut rng), "B");
        }
    }

    #[test]
    fn rejects_empty_and_zero_total() {
        assert_eq!(
            ProbabilityTable::new("cell", &Weights::new()),
            Err(ConfigError::EmptyDistribution("cell".to_string()))
        );
        assert_eq!(
            ProbabilityTable::new("cell", &weights(&[("A", 0)])),
            Err(ConfigError::ZeroTotalWeight("cell".to_string()))
        );
    }

    #[test]
    fn sampling_follows_weights() {
        let table = ProbabilityTable::new("test", &weights(&[("A", 1), ("B", 3)])).expect("table");
        let mut rng = RngState::from_seed(11);
        let draws = 20_000;
        let hits = (0..draws).filter(|_| table.sample(&mut rng) == "B").count();
        let ratio = hits as f64 / draws as f64;
        assert!((0.72..0.78).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let table = ProbabilityTable::new("test", &weights(&[("A", 1), ("B", 2), ("C", 3)]))
            .expect("table");
        let mut left = RngState::from_seed(5);
        let mut right = RngState::from_seed(5);
        let a: Vec<String> = (0..32).map(|_| table.sample(&mut left).to_string()).collect();
        let b: Vec<String> = (0..32).map(|_| table.sample(&mut right).to_string()).collect();
        assert_eq!(a, b);
    }
}
