// src/main.rs

use std::io::Read;

use env_logger::Env;
use log::{info, warn};
use num::BigInt;

use relation_guesser::config::GuesserConfig;
use relation_guesser::core::cancellation_token::CancellationToken;
use relation_guesser::guess_relations_with_config;

fn main() {
    let config = GuesserConfig::load().unwrap_or_else(|_| GuesserConfig::default());

    // Initialize the logger
    let env = Env::default()
        .filter_or("GUESSER_LOG_LEVEL", config.log_level.clone())
        .write_style_or("GUESSER_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    if let Some(threads) = config.threads {
        if let Err(err) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            warn!("could not size the rayon pool: {}", err);
        }
    }

    let numbers = read_numbers();
    if numbers.is_empty() {
        warn!("no numbers to examine");
        return;
    }

    let cancel = CancellationToken::new();
    let interrupt_token = cancel.clone();
    if let Err(err) = ctrlc::set_handler(move || interrupt_token.cancel()) {
        warn!("could not install the interrupt handler: {}", err);
    }

    info!("searching relations between {} numbers", numbers.len());
    let report = guess_relations_with_config(&numbers, &cancel, &config);
    print!("{}", report);
}

/// Decimal integers from the command line, or whitespace-separated from
/// stdin when no arguments were given. Unparsable tokens are skipped with
/// a warning rather than aborting the run.
fn read_numbers() -> Vec<BigInt> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let tokens = if args.is_empty() {
        let mut input = String::new();
        if let Err(err) = std::io::stdin().read_to_string(&mut input) {
            warn!("could not read from stdin: {}", err);
        }
        input.split_whitespace().map(str::to_string).collect()
    } else {
        args
    };

    let mut numbers = Vec::new();
    for token in tokens {
        match token.parse::<BigInt>() {
            Ok(value) => numbers.push(value),
            Err(_) => warn!("skipping '{}': not a decimal integer", token),
        }
    }
    numbers
}
