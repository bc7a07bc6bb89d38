use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use search::EngineConfig;

#[derive(Parser, Debug)]
#[command(name = "Katfish")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Picks a move for a chess position with an alpha-beta search")]
pub struct Args {
    /// Position to search, as FEN. Defaults to the standard start position.
    #[arg(long)]
    pub fen: Option<String>,

    /// Moves in UCI notation played from the position before searching.
    #[arg(long, num_args = 1.., value_delimiter = ' ')]
    pub moves: Vec<String>,

    /// Time budget per move in milliseconds. Overrides the MoveTime option.
    #[arg(long)]
    pub move_time: Option<u64>,

    /// Play this many plies against itself instead of a single search.
    #[arg(long)]
    pub plies: Option<usize>,

    /// Evaluate with this NNUE weight file instead of the built-in tables.
    #[arg(long)]
    pub nnue: Option<PathBuf>,

    /// Opening book file (`FEN;move;weight` per line).
    #[arg(long)]
    pub book: Option<PathBuf>,

    /// Write debug logs to a file instead of the terminal.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// More terminal logging (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Engine option as Name=Value. May be repeated.
    #[arg(long = "option", value_name = "NAME=VALUE")]
    pub options: Vec<String>,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// Default configuration with every `--option` and `--move-time` applied.
    pub fn config(&self) -> Result<EngineConfig, String> {
        let mut config = EngineConfig::default();

        for option in &self.options {
            let (name, value) = option
                .split_once('=')
                .ok_or_else(|| format!("Expected Name=Value, got '{}'", option))?;
            config.update(name.trim(), value)?;
        }

        if let Some(ms) = self.move_time {
            config.update("MoveTime", &ms.to_string())?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("katfish").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(args.fen.is_none());
        assert!(args.moves.is_empty());
        assert_eq!(args.log_level(), LevelFilter::Warn);
        assert_eq!(args.config().unwrap().move_time.value, 2000);
    }

    #[test]
    fn test_options_and_move_time() {
        let args = parse(&[
            "--option",
            "Hash=8",
            "--option",
            "OwnBook=false",
            "--move-time",
            "250",
            "-vv",
        ]);
        let config = args.config().unwrap();
        assert_eq!(config.hash_size.value, 8);
        assert!(!config.own_book.value);
        assert_eq!(config.move_time.value, 250);
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_bad_options_are_errors() {
        assert!(parse(&["--option", "Hash"]).config().is_err());
        assert!(parse(&["--option", "Hash=0"]).config().is_err());
        assert!(parse(&["--option", "Ponder=true"]).config().is_err());
    }

    #[test]
    fn test_moves_list() {
        let args = parse(&["--moves", "e2e4 e7e5", "g1f3"]);
        assert_eq!(args.moves, vec!["e2e4", "e7e5", "g1f3"]);
    }
}
