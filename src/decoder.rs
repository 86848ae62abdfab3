use crate::config::KeypadConfig;
use crate::error::DecodeError;
use std::sync::Arc;
use tracing::{debug, trace};

/// A maximal run of identical presses: the symbol and how often it has been
/// seen so far.
struct Run {
    symbol: char,
    count: usize,
}

impl Run {
    /// Every symbol that opens a run must be a valid digit or a control
    /// symbol; anything else aborts the decode with the offender.
    fn start(symbol: char, config: &KeypadConfig) -> Result<Self, DecodeError> {
        if !config.is_valid_digit(symbol) && !config.is_control_symbol(symbol) {
            return Err(DecodeError::InvalidSymbol(symbol));
        }
        Ok(Self { symbol, count: 1 })
    }

    /// Backspace presses never coalesce; each one is its own run of length 1.
    fn coalesces(&self, next: char, config: &KeypadConfig) -> bool {
        self.symbol == next && self.symbol != config.backspace()
    }
}

/// Decodes multi-tap keypad sequences against a bound [`KeypadConfig`].
///
/// The decoder holds no per-call state: `decode` is a pure function of the
/// configuration and the input, so a single instance can be shared freely.
pub struct KeypadDecoder {
    config: Arc<KeypadConfig>,
}

impl KeypadDecoder {
    pub fn new(config: KeypadConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// A decoder over the standard 2-9 keypad.
    pub fn standard() -> Self {
        Self::new(KeypadConfig::standard())
    }

    pub fn config(&self) -> &KeypadConfig {
        &self.config
    }

    /// Decodes one input sequence into text.
    ///
    /// `None` mirrors input that was never supplied by the caller and fails
    /// immediately with [`DecodeError::MissingInput`]; an empty sequence
    /// decodes to empty text.
    ///
    /// Symbols are consumed left to right while a current run `(symbol,
    /// count)` accumulates repeated presses. A run only acts when it is
    /// closed by a following symbol (see `close_run`); the trailing run is
    /// discarded, which is why sequences conventionally end with the
    /// terminator symbol. The terminator gets no special treatment beyond
    /// that: symbols after it are processed as ordinary input.
    pub fn decode(&self, input: Option<&str>) -> Result<String, DecodeError> {
        let input = input.ok_or(DecodeError::MissingInput)?;

        let mut chars = input.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => return Ok(String::new()),
        };

        let mut output = String::new();
        let mut run = Run::start(first, &self.config)?;

        for next in chars {
            if run.coalesces(next, &self.config) {
                run.count += 1;
                continue;
            }
            self.close_run(&run, next, &mut output);
            run = Run::start(next, &self.config)?;
        }

        debug!(
            input_len = input.len(),
            output_len = output.len(),
            "decoded sequence"
        );
        Ok(output)
    }

    /// Applies a run that was just closed by `next`:
    ///
    /// - digit run closed by anything but the backspace symbol emits
    ///   `group[(count - 1) % group.len()]` (press counts wrap around);
    /// - separator or backspace run closed by the backspace symbol pops one
    ///   letter (popping empty output is a silent no-op);
    /// - every other pairing does nothing. In particular a digit run closed
    ///   BY the backspace symbol is suppressed: its letter never reaches the
    ///   output, and each further backspace press closes the previous
    ///   backspace run and deletes one more letter.
    fn close_run(&self, run: &Run, next: char, output: &mut String) {
        let config = self.config.as_ref();

        if next != config.backspace() {
            if let Some(group) = config.letter_group(run.symbol) {
                let letter = group[(run.count - 1) % group.len()];
                trace!(symbol = %run.symbol, count = run.count, %letter, "emit");
                output.push(letter);
            }
        } else if run.symbol == config.separator() || run.symbol == config.backspace() {
            trace!(len = output.len(), "backspace");
            output.pop();
        }
    }
}
