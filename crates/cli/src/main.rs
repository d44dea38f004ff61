use anyhow::Context;
use clap::Parser;
use scratchgame_core::{GameEngine, GameResult, RngState};
use scratchgame_data::{load_game_config, load_game_input};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scratchgame", about = "Play one round of the scratch game")]
struct Cli {
    /// Game configuration JSON
    #[arg(long)]
    config: PathBuf,
    /// Amount to bet on this round
    #[arg(
        long = "betting-amount",
        allow_negative_numbers = true,
        value_parser = parse_bet,
        required_unless_present = "input",
        conflicts_with = "input"
    )]
    betting_amount: Option<f64>,
    /// JSON file with {"bet_amount": ...}, instead of --betting-amount
    #[arg(long)]
    input: Option<PathBuf>,
    /// Seed the round for a reproducible matrix
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_bet(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("invalid betting amount: {raw}"))?;
    if !(value > 0.0) || !value.is_finite() {
        return Err(format!("betting amount must be positive, got {raw}"));
    }
    Ok(value)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let bet_amount = match (cli.betting_amount, &cli.input) {
        (Some(amount), _) => amount,
        (None, Some(path)) => load_game_input(path)?.bet_amount,
        (None, None) => anyhow::bail!("either --betting-amount or --input is required"),
    };

    let config = load_game_config(&cli.config)?;
    let engine = GameEngine::new(config).context("build game engine")?;
    let mut rng = match cli.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    log::info!("playing bet {} (seed {:?})", bet_amount, rng.seed());

    let result = engine.play(bet_amount, &mut rng);
    log_trace(&result);
    serde_json::to_string_pretty(&result).context("serialize result")
}

fn log_trace(result: &GameResult) {
    for step in &result.trace {
        log::debug!(
            "{:<40}{:<24}{:>12} -> {}",
            step.source,
            format!("{:?}", step.effect),
            step.before,
            step.after
        );
    }
}
