use crate::{
    AppliedCombinations, ConfigError, GameConfig, Matrix, MatrixGenerator, RewardCalculator,
    RewardStep, RngState, RuleTables, WinMatcher,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameResult {
    pub matrix: Matrix,
    pub reward: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_winning_combinations: Option<AppliedCombinations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_bonus_symbol: Option<String>,
    #[serde(skip)]
    pub trace: Vec<RewardStep>,
}

/// One validated configuration, ready to play any number of independent rounds.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    generator: MatrixGenerator,
    tables: RuleTables,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let generator = MatrixGenerator::new(&config)?;
        let tables = RuleTables::from_config(&config);
        Ok(Self {
            config,
            generator,
            tables,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn play(&self, bet_amount: f64, rng: &mut RngState) -> GameResult {
        let matrix = self.generator.generate(rng);
        self.evaluate(matrix, bet_amount)
    }

    /// Scores an already generated matrix.
    pub fn evaluate(&self, matrix: Matrix, bet_amount: f64) -> GameResult {
        let matches = WinMatcher::new(&self.config).evaluate(&matrix);
        let outcome =
            RewardCalculator::new(&self.config, &self.tables).calculate(&matrix, &matches, bet_amount);
        log::debug!("bet {} rewarded {}", bet_amount, outcome.reward);

        if outcome.is_miss() {
            return GameResult {
                matrix,
                reward: 0.0,
                applied_winning_combinations: None,
                applied_bonus_symbol: None,
                trace: Vec::new(),
            };
        }
        GameResult {
            matrix,
            reward: outcome.reward,
            applied_winning_combinations: Some(outcome.applied),
            applied_bonus_symbol: outcome.bonus,
            trace: outcome.trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fixtures::{matrix, sample_config};

    #[test]
    fn rejects_invalid_config() {
        let mut config = sample_config();
        config.rows = 0;
        assert!(matches!(
            GameEngine::new(config),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn engine_can_be_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GameEngine>();
    }

    #[test]
    fn same_seed_same_result() {
        let engine = GameEngine::new(sample_config()).expect("engine");
        for seed in 0..32 {
            let left = engine.play(100.0, &mut RngState::from_seed(seed));
            let right = engine.play(100.0, &mut RngState::from_seed(seed));
            assert_eq!(left, right);
        }
    }

    #[test]
    fn every_round_is_well_formed() {
        let engine = GameEngine::new(sample_config()).expect("engine");
        let mut rng = RngState::from_seed(2024);
        for _ in 0..500 {
            let result = engine.play(10.0, &mut rng);
            assert!(result.reward >= 0.0);
            let bonus_cells = result
                .matrix
                .iter()
                .filter(|(_, symbol)| engine.config().is_bonus(symbol))
                .count();
            assert_eq!(bonus_cells, 1);
            if result.reward == 0.0 {
                assert!(result.applied_winning_combinations.is_none());
                assert!(result.applied_bonus_symbol.is_none());
            } else {
                assert!(result
                    .applied_winning_combinations
                    .as_ref()
                    .is_some_and(|applied| !applied.is_empty()));
            }
            if let Some(bonus) = &result.applied_bonus_symbol {
                assert_ne!(bonus, "MISS");
            }
        }
    }

    #[test]
    fn miss_round_serializes_without_optional_keys() {
        let mut config = sample_config();
        config.win_combinations.shift_remove("same_symbol_3_times");
        let engine = GameEngine::new(config).expect("engine");
        let grid = matrix(&[&["A", "B", "C"], &["C", "A", "B"], &["B", "C", "10x"]]);
        let result = engine.evaluate(grid, 100.0);
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "matrix": [["A", "B", "C"], ["C", "A", "B"], ["B", "C", "10x"]],
                "reward": 0.0
            })
        );
    }

    #[test]
    fn winning_round_reports_combinations_and_bonus() {
        let engine = GameEngine::new(sample_config()).expect("engine");
        let grid = matrix(&[&["A", "A", "B"], &["A", "+1000", "B"], &["A", "A", "B"]]);
        let result = engine.evaluate(grid, 100.0);
        // A x5 -> 100 * 5 * 2, B x3 -> 100 * 3 * 1, then +1000
        assert_eq!(result.reward, 1000.0 + 300.0 + 1000.0);
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(
            json["applied_winning_combinations"],
            serde_json::json!({
                "A": ["same_symbol_5_times"],
                "B": ["same_symbol_3_times"]
            })
        );
        assert_eq!(json["applied_bonus_symbol"], "+1000");
        assert_eq!(result.trace.len(), 3);
    }
}
