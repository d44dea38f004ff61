use crate::{ConfigError, SymbolDef, SymbolKind, WinRule, WinTrigger};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Symbol name to integer weight, in declaration order.
pub type Weights = IndexMap<String, u32>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CellProbability {
    pub row: usize,
    pub column: usize,
    pub symbols: Weights,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BonusProbability {
    pub symbols: Weights,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProbabilityConfig {
    pub standard_symbols: Vec<CellProbability>,
    pub bonus_symbols: BonusProbability,
}

impl ProbabilityConfig {
    /// The first per-cell entry also fills every cell nobody listed.
    pub fn default_distribution(&self) -> Option<&CellProbability> {
        self.standard_symbols.first()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub symbols: IndexMap<String, SymbolDef>,
    pub probabilities: ProbabilityConfig,
    pub win_combinations: IndexMap<String, WinRule>,
}

impl GameConfig {
    pub fn symbol(&self, name: &str) -> Option<&SymbolDef> {
        self.symbols.get(name)
    }

    pub fn is_standard(&self, name: &str) -> bool {
        self.symbol(name).is_some_and(SymbolDef::is_standard)
    }

    pub fn is_bonus(&self, name: &str) -> bool {
        self.symbol(name).is_some_and(SymbolDef::is_bonus)
    }

    pub fn in_bounds(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Rule name and rule for every rule of one trigger kind, in declaration order.
    pub fn same_symbol_rules(&self) -> impl Iterator<Item = (&str, &WinRule, u32)> {
        self.win_combinations
            .iter()
            .filter_map(|(name, rule)| rule.count().map(|count| (name.as_str(), rule, count)))
    }

    pub fn linear_rules(&self) -> impl Iterator<Item = (&str, &WinRule)> {
        self.win_combinations
            .iter()
            .filter(|(_, rule)| matches!(rule.trigger, WinTrigger::LinearPattern { .. }))
            .map(|(name, rule)| (name.as_str(), rule))
    }

    /// Checks every structural invariant the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }

        for (name, symbol) in &self.symbols {
            if !(symbol.reward_multiplier > 0.0) {
                return Err(ConfigError::InvalidMultiplier {
                    context: format!("symbol {name}"),
                    value: symbol.reward_multiplier,
                });
            }
            match symbol.kind {
                SymbolKind::Standard => {
                    if symbol.impact.is_some() || symbol.extra.is_some() {
                        return Err(ConfigError::UnexpectedImpact(name.clone()));
                    }
                }
                SymbolKind::Bonus => {
                    if symbol.impact == Some(crate::BonusImpact::ExtraBonus)
                        && symbol.extra.is_none()
                    {
                        return Err(ConfigError::MissingExtra(name.clone()));
                    }
                }
            }
        }

        if self.probabilities.standard_symbols.is_empty() {
            return Err(ConfigError::MissingDefaultDistribution);
        }
        for entry in &self.probabilities.standard_symbols {
            let context = format!("standard symbols at {}:{}", entry.row, entry.column);
            self.validate_weights(&context, &entry.symbols, SymbolKind::Standard)?;
        }
        self.validate_weights(
            "bonus symbols",
            &self.probabilities.bonus_symbols.symbols,
            SymbolKind::Bonus,
        )?;

        for (name, rule) in &self.win_combinations {
            if !(rule.reward_multiplier > 0.0) {
                return Err(ConfigError::InvalidMultiplier {
                    context: format!("win combination {name}"),
                    value: rule.reward_multiplier,
                });
            }
            if rule.count() == Some(0) {
                return Err(ConfigError::InvalidCount(name.clone()));
            }
        }
        Ok(())
    }

    fn validate_weights(
        &self,
        context: &str,
        weights: &Weights,
        expected: SymbolKind,
    ) -> Result<(), ConfigError> {
        if weights.is_empty() {
            return Err(ConfigError::EmptyDistribution(context.to_string()));
        }
        for name in weights.keys() {
            let Some(symbol) = self.symbol(name) else {
                return Err(ConfigError::UnknownSymbol {
                    context: context.to_string(),
                    symbol: name.clone(),
                });
            };
            if symbol.kind != expected {
                return Err(ConfigError::SymbolKindMismatch {
                    context: context.to_string(),
                    symbol: name.clone(),
                    expected: match expected {
                        SymbolKind::Standard => "standard",
                        SymbolKind::Bonus => "bonus",
                    },
                });
            }
        }
        if weights.values().all(|weight| *weight == 0) {
            return Err(ConfigError::ZeroTotalWeight(context.to_string()));
        }
        Ok(())
    }
}
