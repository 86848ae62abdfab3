use clap::Args;
use keytap::decoder::KeypadDecoder;
use std::process;
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct DecodeArgs {
    /// Keypad sequences, e.g. "44 33555 555666#"
    #[arg(required = true)]
    pub sequences: Vec<String>,
}

pub fn run(args: DecodeArgs, decoder: &KeypadDecoder) {
    let mut results = Vec::with_capacity(args.sequences.len());

    for sequence in &args.sequences {
        match decoder.decode(Some(sequence)) {
            Ok(text) => results.push((sequence.clone(), text)),
            Err(e) => {
                error!("Cannot decode '{}': {}", sequence, e);
                process::exit(1);
            }
        }
    }

    crate::reports::decoded(&results);
}
