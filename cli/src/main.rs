use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sweeper_core::{Game, GameConfig, RandomHazardGenerator, Side};

use config::DifficultyTable;

mod config;
mod logging;
mod session;

/// Find every safe cell of a square minefield without disclosing a hazard.
///
/// Cells are chosen by their row-major index, starting at 0 in the top-left corner.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Side length of the square board
    size: Side,

    /// Difficulty tier, looked up in the difficulty table
    #[arg(default_value = "easy")]
    difficulty: String,

    /// Hazard density in percent, takes precedence over the difficulty
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    density: Option<u8>,

    /// Seed for a reproducible board
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with a `[difficulties]` table of `name = percent` entries
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

impl Args {
    fn density_pct(&self) -> Result<u8> {
        if let Some(density_pct) = self.density {
            return Ok(density_pct);
        }
        let table = match &self.config {
            Some(path) => DifficultyTable::load(path)?,
            None => DifficultyTable::default(),
        };
        table.density_pct(&self.difficulty)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose.log_level_filter());

    let config = GameConfig::new(args.size, args.density_pct()?).context("invalid board settings")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!(
        "New {}x{} board, {} hazards ({}%), seed {}",
        config.size(),
        config.size(),
        config.hazard_count(),
        config.density_pct(),
        seed
    );

    let mut game = Game::new(config, RandomHazardGenerator::from_seed(seed))?;
    let end = session::run(&mut game, io::stdin().lock(), &mut io::stdout())?;
    log::debug!("Session ended: {end:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_size_and_difficulty() {
        let args = Args::try_parse_from(["sweeper", "9", "Medium"]).unwrap();
        assert_eq!(args.size, 9);
        assert_eq!(args.density_pct().unwrap(), 20);
    }

    #[test]
    fn difficulty_defaults_to_easy() {
        let args = Args::try_parse_from(["sweeper", "5"]).unwrap();
        assert_eq!(args.density_pct().unwrap(), 10);
    }

    #[test]
    fn explicit_density_wins() {
        let args = Args::try_parse_from(["sweeper", "5", "hard", "--density", "55"]).unwrap();
        assert_eq!(args.density_pct().unwrap(), 55);
    }

    #[test]
    fn density_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["sweeper", "5", "--density", "101"]).is_err());
    }

    #[test]
    fn unknown_difficulty_fails() {
        let args = Args::try_parse_from(["sweeper", "5", "extreme"]).unwrap();
        assert!(args.density_pct().is_err());
    }
}
