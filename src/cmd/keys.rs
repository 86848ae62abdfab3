use keytap::decoder::KeypadDecoder;

pub fn run(decoder: &KeypadDecoder) {
    crate::reports::keypad(decoder.config());
}
