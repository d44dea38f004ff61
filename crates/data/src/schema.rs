use serde::{Deserialize, Serialize};

pub use scratchgame_core::{
    BonusImpact, BonusProbability, Cell, CellProbability, GameConfig, ProbabilityConfig,
    SymbolDef, SymbolKind, Weights, WinRule, WinTrigger,
};

/// Round parameters supplied as a file instead of flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameInput {
    pub bet_amount: f64,
}
