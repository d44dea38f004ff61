use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Grid coordinate, written as `"row:column"` in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

impl FromStr for Cell {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (row, column) = value
            .split_once(':')
            .ok_or_else(|| format!("expected row:column, got {value:?}"))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| format!("invalid row in {value:?}"))?;
        let column = column
            .trim()
            .parse()
            .map_err(|_| format!("invalid column in {value:?}"))?;
        Ok(Self { row, column })
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CellVisitor;

        impl Visitor<'_> for CellVisitor {
            type Value = Cell;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a \"row:column\" string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Cell, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(CellVisitor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "when")]
pub enum WinTrigger {
    #[serde(rename = "same_symbols")]
    SameSymbolCount { count: u32 },
    #[serde(rename = "linear_symbols")]
    LinearPattern { covered_areas: Vec<Vec<Cell>> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WinRule {
    pub reward_multiplier: f64,
    pub group: String,
    #[serde(flatten)]
    pub trigger: WinTrigger,
}

impl WinRule {
    pub fn same_symbols(count: u32, group: &str, reward_multiplier: f64) -> Self {
        Self {
            reward_multiplier,
            group: group.to_string(),
            trigger: WinTrigger::SameSymbolCount { count },
        }
    }

    pub fn linear_symbols(covered_areas: Vec<Vec<Cell>>, group: &str, reward_multiplier: f64) -> Self {
        Self {
            reward_multiplier,
            group: group.to_string(),
            trigger: WinTrigger::LinearPattern { covered_areas },
        }
    }

    pub fn count(&self) -> Option<u32> {
        match &self.trigger {
            WinTrigger::SameSymbolCount { count } => Some(*count),
            WinTrigger::LinearPattern { .. } => None,
        }
    }

    pub fn covered_areas(&self) -> &[Vec<Cell>] {
        match &self.trigger {
            WinTrigger::LinearPattern { covered_areas } => covered_areas,
            WinTrigger::SameSymbolCount { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum RewardEffect {
    Base(f64),
    Multiply(f64),
    Add(f64),
}

impl RewardEffect {
    pub fn apply(&self, reward: f64) -> f64 {
        match self {
            RewardEffect::Base(value) => *value,
            RewardEffect::Multiply(value) => reward * value,
            RewardEffect::Add(value) => reward + value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewardStep {
    pub source: String,
    pub effect: RewardEffect,
    pub before: f64,
    pub after: f64,
}
