use crate::schema::{GameConfig, GameInput};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub fn load_game_config(path: &Path) -> anyhow::Result<GameConfig> {
    let config: GameConfig = load_json(path)?;
    config
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    log::debug!(
        "loaded {}: {}x{} grid, {} symbols, {} win combinations",
        path.display(),
        config.rows,
        config.columns,
        config.symbols.len(),
        config.win_combinations.len()
    );
    Ok(config)
}

pub fn parse_game_config(raw: &str) -> anyhow::Result<GameConfig> {
    let config: GameConfig = serde_json::from_str(raw).context("parse config")?;
    config.validate().context("validate config")?;
    Ok(config)
}

pub fn load_game_input(path: &Path) -> anyhow::Result<GameInput> {
    let input: GameInput = load_json(path)?;
    if !(input.bet_amount > 0.0) {
        bail!(
            "{}: bet_amount must be positive, got {}",
            path.display(),
            input.bet_amount
        );
    }
    Ok(input)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
