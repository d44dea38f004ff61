use crate::{
    is_miss, BonusImpact, GameConfig, Matches, Matrix, RewardEffect, RewardStep, SymbolDef,
};
use indexmap::IndexMap;

/// Applied rule names per symbol, in application order.
pub type AppliedCombinations = IndexMap<String, Vec<String>>;

/// Rule lookups resolved once per config instead of per round.
#[derive(Debug, Clone, Default)]
pub struct RuleTables {
    same_symbols: Vec<(String, u32)>,
    groups: IndexMap<String, Vec<String>>,
}

impl RuleTables {
    pub fn from_config(config: &GameConfig) -> Self {
        let same_symbols = config
            .same_symbol_rules()
            .map(|(name, _, count)| (name.to_string(), count))
            .collect();
        let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
        for (name, rule) in &config.win_combinations {
            groups
                .entry(rule.group.clone())
                .or_default()
                .push(name.clone());
        }
        Self {
            same_symbols,
            groups,
        }
    }

    /// Highest satisfied threshold; the earliest declared rule wins a tie.
    pub fn best_same_symbol(&self, occurrences: u32) -> Option<&str> {
        let mut best: Option<(&str, u32)> = None;
        for (name, count) in &self.same_symbols {
            if *count > occurrences {
                continue;
            }
            if best.map_or(true, |(_, current)| *count > current) {
                best = Some((name.as_str(), *count));
            }
        }
        best.map(|(name, _)| name)
    }

    pub fn rule_for_group(&self, group: &str) -> Option<&str> {
        self.groups
            .get(group)
            .and_then(|names| names.first())
            .map(String::as_str)
    }

    pub fn rules_in_group(&self, group: &str) -> &[String] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewardOutcome {
    pub reward: f64,
    pub applied: AppliedCombinations,
    pub bonus: Option<String>,
    pub trace: Vec<RewardStep>,
}

impl RewardOutcome {
    pub fn is_miss(&self) -> bool {
        self.reward == 0.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RewardCalculator<'a> {
    config: &'a GameConfig,
    tables: &'a RuleTables,
}

impl<'a> RewardCalculator<'a> {
    pub fn new(config: &'a GameConfig, tables: &'a RuleTables) -> Self {
        Self { config, tables }
    }

    pub fn calculate(&self, matrix: &Matrix, matches: &Matches, bet_amount: f64) -> RewardOutcome {
        let mut outcome = RewardOutcome::default();
        for (symbol, count) in &matches.counts {
            let Some(def) = self.config.symbol(symbol) else {
                continue;
            };
            let reward = self.symbol_reward(symbol, def, *count, matches, bet_amount, &mut outcome);
            outcome.reward += reward;
        }

        if outcome.is_miss() {
            log::debug!("no winning combinations");
            return RewardOutcome::default();
        }

        self.apply_bonus(matrix, &mut outcome);
        outcome
    }

    fn symbol_reward(
        &self,
        symbol: &str,
        def: &SymbolDef,
        count: u32,
        matches: &Matches,
        bet_amount: f64,
        outcome: &mut RewardOutcome,
    ) -> f64 {
        let mut reward: Option<f64> = None;
        let mut applied = Vec::new();

        if let Some(name) = self.tables.best_same_symbol(count) {
            if let Some(rule) = self.config.win_combinations.get(name) {
                let base = bet_amount * def.reward_multiplier * rule.reward_multiplier;
                push_step(outcome, symbol, name, RewardEffect::Base(base), 0.0);
                reward = Some(base);
                applied.push(name.to_string());
            }
        }

        if let Some(groups) = matches.linear.get(symbol) {
            for group in groups.keys() {
                let Some(name) = self.tables.rule_for_group(group) else {
                    continue;
                };
                let Some(rule) = self.config.win_combinations.get(name) else {
                    continue;
                };
                let before = reward.unwrap_or(0.0);
                let effect = match reward {
                    None => RewardEffect::Base(bet_amount * def.reward_multiplier * rule.reward_multiplier),
                    Some(_) => RewardEffect::Multiply(rule.reward_multiplier),
                };
                push_step(outcome, symbol, name, effect, before);
                reward = Some(effect.apply(before));
                applied.push(name.to_string());
            }
        }

        if applied.is_empty() {
            return 0.0;
        }
        log::debug!("{} x{} applied {:?}", symbol, count, applied);
        outcome.applied.insert(symbol.to_string(), applied);
        reward.unwrap_or(0.0)
    }

    fn apply_bonus(&self, matrix: &Matrix, outcome: &mut RewardOutcome) {
        let Some((cell, name)) = matrix
            .iter()
            .find(|(_, symbol)| self.config.is_bonus(symbol))
        else {
            return;
        };
        let Some(def) = self.config.symbol(name) else {
            return;
        };
        if is_miss(name, def) {
            log::debug!("bonus {} at {} has no effect", name, cell);
            return;
        }

        let effect = match (def.impact, def.extra) {
            (Some(BonusImpact::MultiplyReward), _) => Some(RewardEffect::Multiply(def.reward_multiplier)),
            (Some(BonusImpact::ExtraBonus), Some(extra)) => Some(RewardEffect::Add(extra)),
            (impact, _) => {
                log::warn!("bonus {} with impact {:?} leaves the reward unchanged", name, impact);
                None
            }
        };
        if let Some(effect) = effect {
            let before = outcome.reward;
            outcome.reward = effect.apply(before);
            outcome.trace.push(RewardStep {
                source: name.to_string(),
                effect,
                before,
                after: outcome.reward,
            });
        }
        outcome.bonus = Some(name.to_string());
    }
}

fn push_step(outcome: &mut RewardOutcome, symbol: &str, rule: &str, effect: RewardEffect, before: f64) {
    outcome.trace.push(RewardStep {
        source: format!("{symbol}: {rule}"),
        effect,
        before,
        after: effect.apply(before),
    });
}
