use crate::{Cell, GameConfig, Matrix};
use indexmap::IndexMap;

/// Standard symbol occurrences, ordered by first appearance.
pub type SymbolCounts = IndexMap<String, u32>;

/// symbol -> rule group -> every covered area that matched.
pub type MatchSet = IndexMap<String, IndexMap<String, Vec<Vec<Cell>>>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matches {
    pub counts: SymbolCounts,
    pub linear: MatchSet,
}

#[derive(Debug, Clone, Copy)]
pub struct WinMatcher<'a> {
    config: &'a GameConfig,
}

impl<'a> WinMatcher<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    pub fn evaluate(&self, matrix: &Matrix) -> Matches {
        Matches {
            counts: self.count_symbols(matrix),
            linear: self.linear_matches(matrix),
        }
    }

    pub fn count_symbols(&self, matrix: &Matrix) -> SymbolCounts {
        let mut counts = SymbolCounts::new();
        for (_, symbol) in matrix.iter() {
            if self.config.is_standard(symbol) {
                *counts.entry(symbol.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }

    pub fn linear_matches(&self, matrix: &Matrix) -> MatchSet {
        let mut matches = MatchSet::new();
        for (name, rule) in self.config.linear_rules() {
            for area in rule.covered_areas() {
                let Some(symbol) = self.match_area(matrix, area) else {
                    continue;
                };
                log::debug!("{} matched {} on {:?}", symbol, name, area);
                matches
                    .entry(symbol.to_string())
                    .or_default()
                    .entry(rule.group.clone())
                    .or_default()
                    .push(area.clone());
            }
        }
        matches
    }

    /// The shared standard symbol when every cell of `area` holds it.
    fn match_area<'m>(&self, matrix: &'m Matrix, area: &[Cell]) -> Option<&'m str> {
        let mut first: Option<&str> = None;
        for cell in area {
            let symbol = matrix.get(*cell)?;
            if !self.config.is_standard(symbol) {
                return None;
            }
            match first {
                None => first = Some(symbol),
                Some(expected) if expected != symbol => return None,
                Some(_) => {}
            }
        }
        first
    }
}
