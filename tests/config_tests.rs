use keytap::config::{KeypadConfig, DEFAULT_BACKSPACE, DEFAULT_SEPARATOR, DEFAULT_TERMINATOR};
use keytap::error::ConfigError;
use rstest::rstest;
use std::collections::HashMap;
use std::io::Write;

#[rstest]
#[case('2', &['A', 'B', 'C'])]
#[case('3', &['D', 'E', 'F'])]
#[case('4', &['G', 'H', 'I'])]
#[case('5', &['J', 'K', 'L'])]
#[case('6', &['M', 'N', 'O'])]
#[case('7', &['P', 'Q', 'R', 'S'])]
#[case('8', &['T', 'U', 'V'])]
#[case('9', &['W', 'X', 'Y', 'Z'])]
fn standard_layout_groups(#[case] digit: char, #[case] expected: &[char]) {
    let config = KeypadConfig::standard();
    assert_eq!(config.letters_for(digit).unwrap(), expected);
}

#[test]
fn standard_layout_shape() {
    let config = KeypadConfig::standard();
    assert_eq!(config.key_count(), 8);
    assert_eq!(config.digits(), vec!['2', '3', '4', '5', '6', '7', '8', '9']);
    assert_eq!(config.separator(), DEFAULT_SEPARATOR);
    assert_eq!(config.backspace(), DEFAULT_BACKSPACE);
    assert_eq!(config.terminator(), DEFAULT_TERMINATOR);
}

#[test]
fn digit_and_control_membership() {
    let config = KeypadConfig::standard();

    assert!(config.is_valid_digit('2'));
    assert!(config.is_valid_digit('9'));
    assert!(!config.is_valid_digit('0'));
    assert!(!config.is_valid_digit('1'));
    assert!(!config.is_valid_digit('*'));

    assert!(config.is_control_symbol(' '));
    assert!(config.is_control_symbol('*'));
    assert!(config.is_control_symbol('#'));
    assert!(!config.is_control_symbol('2'));
    assert!(!config.is_control_symbol('x'));
}

#[test]
fn empty_mapping_is_rejected() {
    let err = KeypadConfig::new(HashMap::new()).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyMapping));
}

#[test]
fn empty_letter_group_is_rejected() {
    let mapping = HashMap::from([('2', vec!['A']), ('3', Vec::new())]);
    match KeypadConfig::new(mapping).unwrap_err() {
        ConfigError::EmptyGroup(digit) => assert_eq!(digit, '3'),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn small_custom_mapping_is_accepted() {
    let mapping = HashMap::from([('2', vec!['A', 'B'])]);
    let config = KeypadConfig::new(mapping).unwrap();
    assert_eq!(config.key_count(), 1);
    assert_eq!(config.letters_for('2').unwrap(), &['A', 'B']);
}

#[test]
fn unknown_digit_lookup_fails() {
    let config = KeypadConfig::standard();
    match config.letters_for('1').unwrap_err() {
        ConfigError::UnknownDigit(digit) => assert_eq!(digit, '1'),
        other => panic!("unexpected error: {other}"),
    }
    assert!(config.letter_group('1').is_none());
}

#[test]
fn control_symbols_can_be_customized() {
    let mapping = HashMap::from([('2', vec!['A', 'B'])]);
    let config = KeypadConfig::new(mapping)
        .unwrap()
        .with_separator('-')
        .with_backspace('X')
        .with_terminator('!');

    assert_eq!(config.separator(), '-');
    assert_eq!(config.backspace(), 'X');
    assert_eq!(config.terminator(), '!');
    assert!(config.is_control_symbol('-'));
    assert!(!config.is_control_symbol(' '));
}

fn write_keypad_file(dir: &tempfile::TempDir, name: &str, json: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", json).unwrap();
    path
}

#[test]
fn load_from_file_reads_custom_keypad() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_keypad_file(
        &dir,
        "keypad.json",
        r#"{
            "key_mapping": { "2": ["X", "Y", "Z"], "3": ["1", "2"] },
            "separator": "-"
        }"#,
    );

    let config = KeypadConfig::load_from_file(&path).unwrap();
    assert_eq!(config.letters_for('2').unwrap(), &['X', 'Y', 'Z']);
    assert_eq!(config.separator(), '-');
    // Omitted control symbols fall back to defaults.
    assert_eq!(config.backspace(), DEFAULT_BACKSPACE);
    assert_eq!(config.terminator(), DEFAULT_TERMINATOR);
}

#[test]
fn load_from_file_rejects_empty_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_keypad_file(&dir, "empty.json", r#"{ "key_mapping": {} }"#);

    let err = KeypadConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyMapping));
}

#[test]
fn load_from_file_rejects_empty_group() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_keypad_file(&dir, "group.json", r#"{ "key_mapping": { "2": [] } }"#);

    let err = KeypadConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyGroup('2')));
}

#[test]
fn load_from_file_surfaces_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_keypad_file(&dir, "broken.json", "{ not json");

    let err = KeypadConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn load_from_file_surfaces_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = KeypadConfig::load_from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
