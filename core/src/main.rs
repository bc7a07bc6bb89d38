mod args;
mod engine;
mod play;

use std::error::Error;
use std::fs::File;

use args::Args;
use clap::Parser;
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let config = args.config()?;
    debug!("Options: {:?}", config.options());

    let mut engine = engine::create(&args, &config)?;
    let board = play::starting_board(args.fen.as_deref(), &args.moves)?;
    let limits = config.search_limits();

    match args.plies {
        Some(plies) => {
            play::self_play(&mut engine, board, plies, &limits);
        }
        None => {
            play::one_shot(&mut engine, &board, &limits);
        }
    }

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(log_file)?)?;
    } else {
        TermLogger::init(
            args.log_level(),
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?;
    }

    Ok(args)
}
