use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid grid dimensions {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
    #[error("{0}: distribution is empty")]
    EmptyDistribution(String),
    #[error("{0}: distribution weights sum to zero")]
    ZeroTotalWeight(String),
    #[error("{context}: unknown symbol {symbol}")]
    UnknownSymbol { context: String, symbol: String },
    #[error("{context}: symbol {symbol} is not a {expected} symbol")]
    SymbolKindMismatch {
        context: String,
        symbol: String,
        expected: &'static str,
    },
    #[error("no default standard symbol distribution")]
    MissingDefaultDistribution,
    #[error("{context}: reward multiplier {value} must be positive")]
    InvalidMultiplier { context: String, value: f64 },
    #[error("bonus symbol {0} has impact extra_bonus but no extra")]
    MissingExtra(String),
    #[error("standard symbol {0} carries a bonus impact or extra")]
    UnexpectedImpact(String),
    #[error("win combination {0}: count must be at least 1")]
    InvalidCount(String),
}
