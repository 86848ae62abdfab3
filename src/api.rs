use crate::config::KeypadConfig;
use crate::decoder::KeypadDecoder;
use crate::error::DecodeError;
use std::sync::LazyLock;

/// Process-wide decoder over the standard keypad, initialized on first use
/// and never mutated.
static STANDARD_DECODER: LazyLock<KeypadDecoder> = LazyLock::new(KeypadDecoder::standard);

/// Decodes a sequence with the standard 2-9 keypad and default control
/// symbols (space / `*` / `#`).
///
/// ```
/// let text = keytap::api::decode(Some("44 444#")).unwrap();
/// assert_eq!(text, "HI");
/// ```
pub fn decode(input: Option<&str>) -> Result<String, DecodeError> {
    STANDARD_DECODER.decode(input)
}

/// Binds a custom configuration to a reusable decoder.
pub fn create_decoder(config: KeypadConfig) -> KeypadDecoder {
    KeypadDecoder::new(config)
}
