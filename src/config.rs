use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_SEPARATOR: char = ' ';
pub const DEFAULT_BACKSPACE: char = '*';
pub const DEFAULT_TERMINATOR: char = '#';

/// A keypad definition: which letters each key cycles through, plus the three
/// control symbols understood by the decoder.
///
/// Validated eagerly on construction (and after JSON loading); immutable
/// afterwards, so one instance can back any number of concurrent decode
/// calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeypadConfig {
    key_mapping: HashMap<char, Vec<char>>,

    #[serde(default = "default_separator")]
    separator: char,

    #[serde(default = "default_backspace")]
    backspace: char,

    #[serde(default = "default_terminator")]
    terminator: char,
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

fn default_backspace() -> char {
    DEFAULT_BACKSPACE
}

fn default_terminator() -> char {
    DEFAULT_TERMINATOR
}

impl KeypadConfig {
    /// Builds a configuration from a key mapping, with the default control
    /// symbols (space / `*` / `#`).
    pub fn new(key_mapping: HashMap<char, Vec<char>>) -> Result<Self, ConfigError> {
        let config = Self {
            key_mapping,
            separator: DEFAULT_SEPARATOR,
            backspace: DEFAULT_BACKSPACE,
            terminator: DEFAULT_TERMINATOR,
        };
        config.validate()?;
        Ok(config)
    }

    /// The classic phone keypad: digits 2-9, with 7 and 9 carrying four
    /// letters.
    pub fn standard() -> Self {
        let key_mapping = HashMap::from([
            ('2', vec!['A', 'B', 'C']),
            ('3', vec!['D', 'E', 'F']),
            ('4', vec!['G', 'H', 'I']),
            ('5', vec!['J', 'K', 'L']),
            ('6', vec!['M', 'N', 'O']),
            ('7', vec!['P', 'Q', 'R', 'S']),
            ('8', vec!['T', 'U', 'V']),
            ('9', vec!['W', 'X', 'Y', 'Z']),
        ]);

        Self {
            key_mapping,
            separator: DEFAULT_SEPARATOR,
            backspace: DEFAULT_BACKSPACE,
            terminator: DEFAULT_TERMINATOR,
        }
    }

    /// Loads a keypad definition from a JSON file. Omitted control symbols
    /// fall back to the defaults; the mapping passes the same validation as
    /// [`KeypadConfig::new`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.key_mapping.is_empty() {
            return Err(ConfigError::EmptyMapping);
        }
        for (&digit, group) in &self.key_mapping {
            if group.is_empty() {
                return Err(ConfigError::EmptyGroup(digit));
            }
        }
        Ok(())
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_backspace(mut self, backspace: char) -> Self {
        self.backspace = backspace;
        self
    }

    pub fn with_terminator(mut self, terminator: char) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn backspace(&self) -> char {
        self.backspace
    }

    pub fn terminator(&self) -> char {
        self.terminator
    }

    /// True iff the symbol is a key in the mapping.
    pub fn is_valid_digit(&self, symbol: char) -> bool {
        self.key_mapping.contains_key(&symbol)
    }

    /// True iff the symbol is the separator, backspace, or terminator.
    pub fn is_control_symbol(&self, symbol: char) -> bool {
        symbol == self.separator || symbol == self.backspace || symbol == self.terminator
    }

    /// The letter group for a key, if it is in the mapping.
    pub fn letter_group(&self, digit: char) -> Option<&[char]> {
        self.key_mapping.get(&digit).map(Vec::as_slice)
    }

    /// Strict lookup for direct queries; callers that have already checked
    /// [`is_valid_digit`](Self::is_valid_digit) can use
    /// [`letter_group`](Self::letter_group) instead.
    pub fn letters_for(&self, digit: char) -> Result<&[char], ConfigError> {
        self.letter_group(digit)
            .ok_or(ConfigError::UnknownDigit(digit))
    }

    pub fn key_count(&self) -> usize {
        self.key_mapping.len()
    }

    /// Digits in the mapping, sorted for stable display.
    pub fn digits(&self) -> Vec<char> {
        let mut digits: Vec<char> = self.key_mapping.keys().copied().collect();
        digits.sort_unstable();
        digits
    }
}
