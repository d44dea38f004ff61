use serde::{Deserialize, Serialize};

/// Name of the bonus sentinel that never changes the reward.
pub const MISS: &str = "MISS";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Standard,
    Bonus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum BonusImpact {
    MultiplyReward,
    ExtraBonus,
    Miss,
    Unknown,
}

impl From<String> for BonusImpact {
    fn from(value: String) -> Self {
        match value.as_str() {
            "multiply_reward" => Self::MultiplyReward,
            "extra_bonus" => Self::ExtraBonus,
            "miss" => Self::Miss,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymbolDef {
    pub reward_multiplier: f64,
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<BonusImpact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<f64>,
}

impl SymbolDef {
    pub fn standard(reward_multiplier: f64) -> Self {
        Self {
            reward_multiplier,
            kind: SymbolKind::Standard,
            impact: None,
            extra: None,
        }
    }

    pub fn multiply_reward(reward_multiplier: f64) -> Self {
        Self {
            reward_multiplier,
            kind: SymbolKind::Bonus,
            impact: Some(BonusImpact::MultiplyReward),
            extra: None,
        }
    }

    pub fn extra_bonus(extra: f64) -> Self {
        Self {
            reward_multiplier: 1.0,
            kind: SymbolKind::Bonus,
            impact: Some(BonusImpact::ExtraBonus),
            extra: Some(extra),
        }
    }

    pub fn miss() -> Self {
        Self {
            reward_multiplier: 1.0,
            kind: SymbolKind::Bonus,
            impact: Some(BonusImpact::Miss),
            extra: None,
        }
    }

    pub fn is_standard(&self) -> bool {
        self.kind == SymbolKind::Standard
    }

    pub fn is_bonus(&self) -> bool {
        self.kind == SymbolKind::Bonus
    }
}

/// True when a bonus symbol has no effect on the reward.
pub fn is_miss(name: &str, def: &SymbolDef) -> bool {
    name == MISS || def.impact == Some(BonusImpact::Miss)
}
