use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use streamcast::cli::{Cli, Command};
use streamcast::config::Config;
use streamcast::error::Error;
use streamcast::models::Stream;
use streamcast::{fixtures, keys, logging, validation};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(|| "config/config.toml".into());
    let config = Config::load_or_default(&config_path)?;

    if config.logging.file.is_some() {
        logging::init(&config.logging)?;
    } else {
        let level = if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }

    match cli.command {
        Command::Live => print_streams(&fixtures::live_streams())?,
        Command::Ended => print_streams(&fixtures::ended_streams())?,
        Command::Stream { id } => {
            let stream = fixtures::stream_by_id(&id)
                .ok_or_else(|| Error::NotFound(format!("no stream with id {}", id)))?;
            println!("{}", serde_json::to_string_pretty(stream)?);
        }
        Command::Token { address } => {
            if !validation::validate_token_address(&address) {
                warn!("Address {} is not well-formed Base58", address);
            }
            let token = fixtures::token_by_address(&address)
                .ok_or_else(|| Error::NotFound(format!("no token at address {}", address)))?;
            println!("{}", serde_json::to_string_pretty(token)?);
        }
        Command::Chat => {
            let messages = fixtures::chat_messages();
            let skip = messages.len().saturating_sub(config.display.chat_tail);
            for message in &messages[skip..] {
                println!(
                    "{} [{}] {}: {}",
                    message.timestamp.format("%H:%M:%S"),
                    message.user_address,
                    message.user,
                    message.message
                );
            }
        }
        Command::Validate { address } => {
            if validation::validate_token_address(&address) {
                println!("valid");
            } else {
                println!("invalid");
                std::process::exit(1);
            }
        }
        Command::Keygen => {
            println!("{}", keys::generate_stream_key());
        }
    }

    Ok(())
}

fn print_streams(streams: &[&Stream]) -> Result<()> {
    info!("Listing {} stream(s)", streams.len());
    println!("{}", serde_json::to_string_pretty(streams)?);
    Ok(())
}
