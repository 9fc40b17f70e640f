//! Layers, encoder map and LED geometry of the BWPO layout.
//!
//! The base layer is a modified BÉPO on 3 rows and 10 columns, with home-row mods.
//! The other layers started off from the Miryoku layout, trimmed down for a
//! 36-key board with two encoders.
//!
//! Logical matrix: rows 0 to 2 are the alpha rows, left half on columns 0 to 4 and
//! right half on columns 5 to 9. Row 3 holds the six thumb keys on columns 2 to 7.

use crate::action::{Action, EncoderAction, KeyAction};
use crate::config::{COL, LED_COUNT, NUM_ENCODER, NUM_LAYER, ROW};
use crate::keyboard_macros::CustomKeycode;
use crate::keymap::KeyMap;
use crate::led_indicator::LedFlags;
use crate::modifier::{ALT, CTRL, GUI, ModifierCombination, SHIFT};
use crate::{a, encoder, k, layer, lt, mt, shifted};

/// Layers of the BWPO keymap
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Base = 0,
    /// Function keys on the right hand
    Function = 1,
    /// Arrows and editing on the right hand
    Navigation = 2,
    /// Media and RGB control, symmetrical for either trackball side
    Media = 3,
    /// Mouse buttons, pointer settings and the text macros
    Pointer = 4,
    /// Numpad on the left hand
    Numeral = 5,
    /// Shifted symbols on the left hand
    Symbols = 6,
}

impl Layer {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Layer::Base),
            1 => Some(Layer::Function),
            2 => Some(Layer::Navigation),
            3 => Some(Layer::Media),
            4 => Some(Layer::Pointer),
            5 => Some(Layer::Numeral),
            6 => Some(Layer::Symbols),
            _ => None,
        }
    }
}

const RCTL: ModifierCombination = CTRL.with_right(true);
const RSFT: ModifierCombination = SHIFT.with_right(true);
const RALT: ModifierCombination = ALT.with_right(true);
const RGUI: ModifierCombination = GUI.with_right(true);

const ESC_MED: KeyAction = lt!(Layer::Media, Escape);
const TAB_FUN: KeyAction = lt!(Layer::Function, Tab);
const SPC_NAV: KeyAction = lt!(Layer::Navigation, Space);
const SPC_NUM: KeyAction = lt!(Layer::Numeral, Space);
const BSP_SYM: KeyAction = lt!(Layer::Symbols, Backspace);
const PT_Z: KeyAction = lt!(Layer::Pointer, Z);

const QK_REG: KeyAction = KeyAction::Single(Action::Key(CustomKeycode::Regards.keycode()));
const QK_HELP: KeyAction = KeyAction::Single(Action::Key(CustomKeycode::Help.keycode()));

// Pointer settings only exist when the trackpad is built in.
#[cfg(feature = "pointing")]
const DRGSCRL: KeyAction = k!(DragScrollMode);
#[cfg(feature = "pointing")]
const DPI_MOD: KeyAction = k!(PointerDefaultDpiForward);
#[cfg(feature = "pointing")]
const S_D_MOD: KeyAction = k!(PointerSnipingDpiForward);
#[cfg(feature = "pointing")]
const SNIPING: KeyAction = k!(SnipingMode);
#[cfg(not(feature = "pointing"))]
const DRGSCRL: KeyAction = a!(No);
#[cfg(not(feature = "pointing"))]
const DPI_MOD: KeyAction = a!(No);
#[cfg(not(feature = "pointing"))]
const S_D_MOD: KeyAction = a!(No);
#[cfg(not(feature = "pointing"))]
const SNIPING: KeyAction = a!(No);

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        // Base
        layer!([
            [k!(B), k!(W), k!(P), k!(O), k!(Quote), k!(Dot), k!(V), k!(D), k!(L), k!(J)],
            [mt!(A, GUI), mt!(U, ALT), mt!(I, SHIFT), mt!(E, CTRL), k!(Comma), k!(C), mt!(T, RCTL), mt!(S, RSFT), mt!(R, RALT), mt!(N, RGUI)],
            [PT_Z, k!(Y), k!(X), k!(Slash), k!(K), k!(M), k!(Q), k!(G), k!(H), k!(F)],
            [a!(No), a!(No), ESC_MED, TAB_FUN, SPC_NAV, SPC_NUM, BSP_SYM, k!(AudioMute), a!(No), a!(No)]
        ]),
        // Function
        layer!([
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(F7), k!(F8), k!(F9), k!(F12)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(F4), k!(F5), k!(F6), k!(F11)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(F1), k!(F2), k!(F3), k!(F10)],
            [a!(No), a!(No), a!(No), a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)]
        ]),
        // Navigation
        layer!([
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [k!(LGui), k!(LAlt), k!(LShift), k!(LCtrl), a!(No), k!(Backspace), k!(Left), k!(Down), k!(Up), k!(Right)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), k!(Delete), k!(Home), k!(PageDown), k!(PageUp), k!(End)],
            [a!(No), a!(No), a!(No), a!(No), a!(Transparent), k!(Enter), k!(Backspace), k!(Insert), a!(No), a!(No)]
        ]),
        // Media
        layer!([
            [a!(No), k!(RgbModeReverse), k!(RgbTog), k!(RgbModeForward), a!(No), a!(No), k!(RgbModeReverse), k!(RgbTog), k!(RgbModeForward), a!(No)],
            [k!(MediaPrevTrack), k!(AudioVolDown), k!(AudioMute), k!(AudioVolUp), k!(MediaNextTrack), k!(MediaPrevTrack), k!(AudioVolDown), k!(AudioMute), k!(AudioVolUp), k!(MediaNextTrack)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [a!(No), a!(No), a!(Transparent), k!(MediaPlayPause), k!(MediaStop), k!(MediaStop), k!(MediaPlayPause), k!(AudioMute), a!(No), a!(No)]
        ]),
        // Pointer
        layer!([
            [k!(Bootloader), k!(ClearEeprom), a!(No), DPI_MOD, S_D_MOD, S_D_MOD, DPI_MOD, a!(No), k!(ClearEeprom), k!(Bootloader)],
            [k!(LGui), k!(LAlt), k!(LShift), k!(LCtrl), a!(No), a!(No), k!(LCtrl), k!(LShift), k!(LAlt), k!(LGui)],
            [a!(Transparent), DRGSCRL, SNIPING, k!(MouseBtn3), a!(No), a!(No), k!(MouseBtn3), SNIPING, DRGSCRL, a!(Transparent)],
            [a!(No), a!(No), k!(MouseBtn3), k!(MouseBtn2), k!(MouseBtn1), QK_REG, QK_HELP, a!(Transparent), a!(No), a!(No)]
        ]),
        // Numeral
        layer!([
            [k!(LeftBracket), k!(Kc7), k!(Kc8), k!(Kc9), k!(RightBracket), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [k!(Semicolon), k!(Kc4), k!(Kc5), k!(Kc6), k!(Equal), a!(No), k!(LCtrl), k!(LShift), k!(LAlt), k!(LGui)],
            [shifted!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Minus), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [a!(No), a!(No), k!(Backslash), k!(Minus), k!(Kc0), a!(No), a!(Transparent), a!(No), a!(No), a!(No)]
        ]),
        // Symbols
        layer!([
            [shifted!(LeftBracket), shifted!(Kc7), shifted!(Kc8), shifted!(Kc9), shifted!(RightBracket), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [shifted!(Semicolon), shifted!(Kc4), shifted!(Kc5), shifted!(Kc6), shifted!(Equal), a!(No), k!(LShift), k!(LCtrl), k!(LAlt), k!(LGui)],
            [k!(Grave), shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), k!(Minus), a!(No), a!(No), a!(No), a!(No), a!(No)],
            [a!(No), a!(No), shifted!(Kc9), shifted!(Kc9), shifted!(Kc0), a!(Transparent), a!(No), a!(No), a!(No), a!(No)]
        ]),
    ]
}

/// Encoder map, left encoder first.
#[rustfmt::skip]
pub const fn get_default_encoder_map() -> [[EncoderAction; NUM_ENCODER]; NUM_LAYER] {
    [
        // Base
        [encoder!(k!(MouseWheelUp), k!(MouseWheelDown)), encoder!(k!(AudioVolUp), k!(AudioVolDown))],
        // Function
        [encoder!(k!(Up), k!(Down)), encoder!(k!(Right), k!(Left))],
        // Navigation
        [encoder!(k!(PageUp), k!(PageDown)), encoder!(k!(AudioVolDown), k!(AudioVolUp))],
        // Media
        [encoder!(k!(PageUp), k!(PageDown)), encoder!(k!(AudioVolDown), k!(AudioVolUp))],
        // Pointer
        [encoder!(k!(RgbHui), k!(RgbHud)), encoder!(k!(RgbSai), k!(RgbSad))],
        // Numeral
        [encoder!(k!(RgbVai), k!(RgbVad)), encoder!(k!(RgbSpi), k!(RgbSpd))],
        // Symbols
        [encoder!(k!(RgbModeForward), k!(RgbModeReverse)), encoder!(k!(Right), k!(Left))],
    ]
}

pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = get_default_keymap();
pub static ENCODER_MAP: [[EncoderAction; NUM_ENCODER]; NUM_LAYER] = get_default_encoder_map();

/// The BWPO keymap, backed by the static tables
pub fn keymap() -> KeyMap<'static, ROW, COL, NUM_LAYER, NUM_ENCODER> {
    KeyMap::new(&KEYMAP, Some(&ENCODER_MAP))
}

const K: LedFlags = LedFlags::KEYLIGHT;
const M: LedFlags = LedFlags::KEYLIGHT.with_modifier(true);

/// Flags of the per-key LEDs, in LED index order: left half then right half,
/// each half row by row with its three thumb keys last.
/// The home-row mods are flagged as modifiers.
#[rustfmt::skip]
pub static LED_FLAGS: [LedFlags; LED_COUNT] = [
    // Left half
    K, K, K, K, K,
    M, M, M, M, K,
    K, K, K, K, K,
          K, K, K,
    // Right half
    K, K, K, K, K,
    K, M, M, M, M,
    K, K, K, K, K,
    K, K, K,
];

/// LED index of the key at the given matrix position, if the position has a key
pub const fn led_index(row: usize, col: usize) -> Option<u8> {
    const HALF: usize = LED_COUNT / 2;
    if col >= COL {
        return None;
    }
    let (offset, col) = if col < COL / 2 { (0, col) } else { (HALF, col - COL / 2) };
    let index = match row {
        0..=2 => row * 5 + col,
        // Left thumbs sit on columns 2..=4, right thumbs on columns 5..=7
        3 if offset == 0 && col >= 2 => 15 + col - 2,
        3 if offset == HALF && col <= 2 => 15 + col,
        _ => return None,
    };
    Some((offset + index) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Direction;
    use crate::keycode::KeyCode;
    use crate::keymap::LayerState;

    #[test]
    fn test_layer_index_round_trip() {
        for index in 0..NUM_LAYER as u8 {
            let layer = Layer::from_index(index).unwrap();
            assert_eq!(layer.index(), index);
        }
        assert_eq!(Layer::from_index(7), None);
    }

    #[test]
    fn test_base_layer_thumbs() {
        let keymap = keymap();
        let base = LayerState::default();
        assert_eq!(
            keymap.get_action(base, 3, 2),
            KeyAction::TapHold(Action::Key(KeyCode::Escape), Action::LayerOn(Layer::Media.index()))
        );
        assert_eq!(keymap.get_action(base, 3, 7), k!(AudioMute));
        assert_eq!(keymap.get_action(base, 3, 0), a!(No));
    }

    #[test]
    fn test_home_row_mods_are_mirrored() {
        let keymap = keymap();
        let base = LayerState::default();
        assert_eq!(keymap.get_action(base, 1, 0), mt!(A, GUI));
        assert_eq!(keymap.get_action(base, 1, 9), mt!(N, GUI.with_right(true)));
        assert_eq!(keymap.get_action(base, 1, 3), mt!(E, CTRL));
        assert_eq!(keymap.get_action(base, 1, 6), mt!(T, CTRL.with_right(true)));
    }

    #[test]
    fn test_pointer_layer_has_custom_keycodes() {
        let keymap = keymap();
        let state = LayerState::default().with_layer(Layer::Pointer.index());
        assert_eq!(keymap.get_action(state, 3, 5), k!(User0));
        assert_eq!(keymap.get_action(state, 3, 6), k!(User1));
        // Transparent corners fall back to the base layer
        assert_eq!(keymap.get_action(state, 2, 0), PT_Z);
        assert_eq!(keymap.get_action(state, 2, 9), k!(F));
    }

    #[test]
    fn test_symbols_layer_shifted_keys() {
        let keymap = keymap();
        let state = LayerState::default().with_layer(Layer::Symbols.index());
        assert_eq!(keymap.get_action(state, 0, 3), shifted!(Kc9));
        assert_eq!(keymap.get_action(state, 3, 4), shifted!(Kc0));
        assert_eq!(keymap.get_action(state, 3, 5), SPC_NUM);
    }

    #[test]
    fn test_encoder_map_follows_layer() {
        let keymap = keymap();
        let base = LayerState::default();
        assert_eq!(keymap.get_encoder_action(base, 0, Direction::Clockwise), k!(MouseWheelUp));
        assert_eq!(keymap.get_encoder_action(base, 1, Direction::CounterClockwise), k!(AudioVolDown));

        let nav = base.with_layer(Layer::Navigation.index());
        assert_eq!(keymap.get_encoder_action(nav, 1, Direction::Clockwise), k!(AudioVolDown));

        let symbols = base.with_layer(Layer::Symbols.index());
        assert_eq!(keymap.get_encoder_action(symbols, 0, Direction::Clockwise), k!(RgbModeForward));
    }

    #[test]
    fn test_led_index() {
        assert_eq!(led_index(0, 0), Some(0));
        assert_eq!(led_index(1, 3), Some(8));
        assert_eq!(led_index(3, 2), Some(15));
        assert_eq!(led_index(3, 4), Some(17));
        assert_eq!(led_index(0, 5), Some(18));
        assert_eq!(led_index(1, 9), Some(27));
        assert_eq!(led_index(3, 5), Some(33));
        assert_eq!(led_index(3, 7), Some(35));
        assert_eq!(led_index(3, 0), None);
        assert_eq!(led_index(3, 8), None);
        assert_eq!(led_index(4, 0), None);
    }

    #[test]
    fn test_home_row_mod_leds_are_modifiers() {
        let keymap = keymap();
        for row in 0..ROW {
            for col in 0..COL {
                let Some(index) = led_index(row, col) else {
                    continue;
                };
                let is_mod = matches!(keymap.action_at(row, col, 0), KeyAction::TapHold(_, Action::Modifier(_)));
                assert_eq!(LED_FLAGS[index as usize].modifier(), is_mod, "LED {}", index);
            }
        }
    }
}
