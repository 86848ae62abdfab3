use clap::{Parser, Subcommand};
use keytap::config::KeypadConfig;
use keytap::decoder::KeypadDecoder;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Custom keypad definition (JSON); the standard 2-9 layout when omitted.
    #[arg(global = true, short = 'k', long)]
    keypad: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode one or more keypad sequences
    Decode(cmd::decode::DecodeArgs),
    /// Show the active keypad layout and control symbols
    Keys,
    /// Interactive decoding loop reading sequences from stdin
    Repl,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = match &cli.keypad {
        Some(path) => {
            info!("Loading keypad definition: {}", path);
            match KeypadConfig::load_from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    error!("Failed to load keypad '{}': {}", path, e);
                    process::exit(1);
                }
            }
        }
        None => KeypadConfig::standard(),
    };

    let decoder = KeypadDecoder::new(config);

    match cli.command {
        Commands::Decode(args) => cmd::decode::run(args, &decoder),
        Commands::Keys => cmd::keys::run(&decoder),
        Commands::Repl => cmd::repl::run(&decoder),
    }
}
