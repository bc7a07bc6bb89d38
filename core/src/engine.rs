use std::error::Error;

use evaluation::Evaluator;
use log::{info, warn};
use search::{Engine, EngineConfig, MemoryBook, OpeningBook};

use crate::args::Args;

/// Builds the engine with the evaluator and book selected on the command line.
///
/// A weight file that fails to load is fatal; a missing book only loses the book.
pub fn create(args: &Args, config: &EngineConfig) -> Result<Engine, Box<dyn Error>> {
    let evaluator: Box<dyn Evaluator> = match &args.nnue {
        Some(path) => Box::new(nnue::Evaluator::load(path)?),
        None => Box::new(hce::Evaluator::new(config.get_piece_values())),
    };

    let mut engine = Engine::new(config, evaluator);
    info!("Using {}", engine.name());

    if let Some(path) = &args.book {
        match MemoryBook::load(path) {
            Ok(book) => engine.set_book(Some(Box::new(book) as Box<dyn OpeningBook>)),
            Err(e) => warn!("Continuing without book: {}", e),
        }
    }

    Ok(engine)
}
