//! Custom keycodes that type a fixed text.
//!
//! Each [`CustomKeycode`] is bound to a user keycode and to a literal text. Pressing
//! the key sends the text through the host's [`TextInjector`], one character every
//! [`MacroConfig::char_interval`]. Releasing the key does nothing.

use embassy_time::Duration;
use heapless::Vec;

use crate::config::MacroConfig;
use crate::keycode::{KeyCode, from_ascii};

/// Max number of operations of an expanded macro sequence
pub const MACRO_SPACE_SIZE: usize = 256;

pub const REGARDS_TEXT: &str = "Regards,\nQuentin\nBastard Keyboards";
pub const HELP_TEXT: &str = "I hope this helps, let me know if there's anything else!";

/// Keycodes handled by the keymap itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomKeycode {
    /// Types an email signature
    Regards,
    /// Types a support reply closing
    Help,
}

impl CustomKeycode {
    /// The user keycode this custom keycode is bound to
    pub const fn keycode(self) -> KeyCode {
        match self {
            CustomKeycode::Regards => KeyCode::User0,
            CustomKeycode::Help => KeyCode::User1,
        }
    }

    pub fn from_keycode(keycode: KeyCode) -> Option<Self> {
        match keycode {
            KeyCode::User0 => Some(CustomKeycode::Regards),
            KeyCode::User1 => Some(CustomKeycode::Help),
            _ => None,
        }
    }

    /// The text typed when the key is pressed
    pub const fn text(self) -> &'static str {
        match self {
            CustomKeycode::Regards => REGARDS_TEXT,
            CustomKeycode::Help => HELP_TEXT,
        }
    }
}

/// Host facility that types a string, waiting `interval` between two characters
pub trait TextInjector {
    type Error;

    fn send_string_with_delay(&mut self, text: &str, interval: Duration) -> Result<(), Self::Error>;
}

/// Expands custom keycodes into text
pub struct MacroProcessor {
    config: MacroConfig,
}

impl Default for MacroProcessor {
    fn default() -> Self {
        Self::new(MacroConfig::default())
    }
}

impl MacroProcessor {
    pub fn new(config: MacroConfig) -> Self {
        Self { config }
    }

    /// Process a key event.
    ///
    /// Sends the text of a custom keycode when it's pressed. Always returns `true`:
    /// the host should keep processing the keycode as usual.
    pub fn process_record<T: TextInjector>(&self, injector: &mut T, keycode: KeyCode, pressed: bool) -> bool {
        if !pressed {
            return true;
        }

        if let Some(custom) = CustomKeycode::from_keycode(keycode) {
            debug!("Sending text of {:?}", custom);
            if injector
                .send_string_with_delay(custom.text(), self.config.char_interval)
                .is_err()
            {
                error!("Failed to send text of {:?}", custom);
            }
        }

        true
    }
}

/// Errors of converting a text to a macro sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroError {
    /// The byte cannot be typed on an en-us layout
    UnsupportedCharacter(u8),
    /// The sequence doesn't fit in `MACRO_SPACE_SIZE` operations
    TooLong,
}

/// A single step of a macro sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroOperation {
    /// Tap the key, with shift held when the bool is `true`
    Text(KeyCode, bool),
    /// Wait for the given milliseconds
    Delay(u16),
}

/// Convert a text into a sequence of key taps, separated by `interval`.
///
/// For hosts that can tap keys but have no text injection. Only ascii is supported.
pub fn to_macro_sequence(text: &str, interval: Duration) -> Result<Vec<MacroOperation, MACRO_SPACE_SIZE>, MacroError> {
    let delay_ms = interval.as_millis().min(u16::MAX as u64) as u16;
    let mut sequence = Vec::new();

    for (i, character) in text.bytes().enumerate() {
        let (keycode, shifted) = from_ascii(character);
        if keycode == KeyCode::No {
            return Err(MacroError::UnsupportedCharacter(character));
        }
        if delay_ms > 0 && i > 0 {
            sequence.push(MacroOperation::Delay(delay_ms)).map_err(|_| MacroError::TooLong)?;
        }
        sequence
            .push(MacroOperation::Text(keycode, shifted))
            .map_err(|_| MacroError::TooLong)?;
    }

    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_keycode_binding() {
        for custom in [CustomKeycode::Regards, CustomKeycode::Help] {
            assert_eq!(CustomKeycode::from_keycode(custom.keycode()), Some(custom));
        }
        assert_eq!(CustomKeycode::from_keycode(KeyCode::User2), None);
        assert_eq!(CustomKeycode::from_keycode(KeyCode::A), None);
    }

    #[test]
    fn test_macro_sequence_interleaves_delays() {
        let sequence = to_macro_sequence("Re,\n", Duration::from_millis(5)).unwrap();
        assert_eq!(
            sequence.as_slice(),
            &[
                MacroOperation::Text(KeyCode::R, true),
                MacroOperation::Delay(5),
                MacroOperation::Text(KeyCode::E, false),
                MacroOperation::Delay(5),
                MacroOperation::Text(KeyCode::Comma, false),
                MacroOperation::Delay(5),
                MacroOperation::Text(KeyCode::Enter, false),
            ]
        );
    }

    #[test]
    fn test_macro_sequence_without_delay() {
        let sequence = to_macro_sequence("ok", Duration::from_millis(0)).unwrap();
        assert_eq!(
            sequence.as_slice(),
            &[MacroOperation::Text(KeyCode::O, false), MacroOperation::Text(KeyCode::K, false)]
        );
    }

    #[test]
    fn test_macro_sequence_of_custom_texts_fit() {
        for custom in [CustomKeycode::Regards, CustomKeycode::Help] {
            let sequence = to_macro_sequence(custom.text(), Duration::from_millis(5)).unwrap();
            assert_eq!(sequence.len(), custom.text().len() * 2 - 1);
        }
    }

    #[test]
    fn test_macro_sequence_errors() {
        assert_eq!(
            to_macro_sequence("café", Duration::from_millis(5)),
            Err(MacroError::UnsupportedCharacter(0xC3))
        );
        let long = [b'a'; MACRO_SPACE_SIZE + 1];
        let long = core::str::from_utf8(&long).unwrap();
        assert_eq!(to_macro_sequence(long, Duration::from_millis(0)), Err(MacroError::TooLong));
    }
}
