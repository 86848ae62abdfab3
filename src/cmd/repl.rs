use keytap::decoder::KeypadDecoder;
use std::io::{self, BufRead, Write};
use tracing::warn;

pub fn run(decoder: &KeypadDecoder) {
    println!("Enter keypad sequences (blank line or EOF to quit).");

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!("Failed to read stdin: {}", e);
                break;
            }
        }

        let sequence = line.trim_end_matches(['\r', '\n']);
        if sequence.is_empty() {
            break;
        }

        match decoder.decode(Some(sequence)) {
            Ok(text) => println!("{}", text),
            Err(e) => warn!("{}", e),
        }
    }
}
