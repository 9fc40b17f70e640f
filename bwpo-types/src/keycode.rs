//! Keycode definitions.
//!
//! The values follow the HID usage table for basic keys, and QMK's layout
//! for the extended ranges (consumer, mouse, RGB, keyboard-level and user
//! keycodes), so that keycodes can be exchanged with QMK-compatible hosts.

use strum::FromRepr;

/// Keycodes used by the BWPO keymap, flat and `u16`-sized like QMK's.
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// Reserved, no-key.
    No = 0x0000,
    A = 0x0004,
    B = 0x0005,
    C = 0x0006,
    D = 0x0007,
    E = 0x0008,
    F = 0x0009,
    G = 0x000A,
    H = 0x000B,
    I = 0x000C,
    J = 0x000D,
    K = 0x000E,
    L = 0x000F,
    M = 0x0010,
    N = 0x0011,
    O = 0x0012,
    P = 0x0013,
    Q = 0x0014,
    R = 0x0015,
    S = 0x0016,
    T = 0x0017,
    U = 0x0018,
    V = 0x0019,
    W = 0x001A,
    X = 0x001B,
    Y = 0x001C,
    Z = 0x001D,
    Kc1 = 0x001E,
    Kc2 = 0x001F,
    Kc3 = 0x0020,
    Kc4 = 0x0021,
    Kc5 = 0x0022,
    Kc6 = 0x0023,
    Kc7 = 0x0024,
    Kc8 = 0x0025,
    Kc9 = 0x0026,
    Kc0 = 0x0027,
    /// `Enter`
    Enter = 0x0028,
    /// `Esc`
    Escape = 0x0029,
    /// `Backspace`
    Backspace = 0x002A,
    /// `Tab`
    Tab = 0x002B,
    /// `Spacebar`
    Space = 0x002C,
    /// `-` and `_`
    Minus = 0x002D,
    /// `=` and `+`
    Equal = 0x002E,
    /// `[` and `{`
    LeftBracket = 0x002F,
    /// `]` and `}`
    RightBracket = 0x0030,
    /// `\` and `|`
    Backslash = 0x0031,
    /// Non-US `#` and `~`
    NonusHash = 0x0032,
    /// `;` and `:`
    Semicolon = 0x0033,
    /// `'` and `"`
    Quote = 0x0034,
    /// `` ` `` and `~`
    Grave = 0x0035,
    /// `,` and `<`
    Comma = 0x0036,
    /// `.` and `>`
    Dot = 0x0037,
    /// `/` and `?`
    Slash = 0x0038,
    /// `CapsLock`
    CapsLock = 0x0039,
    F1 = 0x003A,
    F2 = 0x003B,
    F3 = 0x003C,
    F4 = 0x003D,
    F5 = 0x003E,
    F6 = 0x003F,
    F7 = 0x0040,
    F8 = 0x0041,
    F9 = 0x0042,
    F10 = 0x0043,
    F11 = 0x0044,
    F12 = 0x0045,
    PrintScreen = 0x0046,
    ScrollLock = 0x0047,
    Pause = 0x0048,
    Insert = 0x0049,
    Home = 0x004A,
    PageUp = 0x004B,
    Delete = 0x004C,
    End = 0x004D,
    PageDown = 0x004E,
    Right = 0x004F,
    Left = 0x0050,
    Down = 0x0051,
    Up = 0x0052,
    // Consumer keycodes
    AudioMute = 0x00A8,
    AudioVolUp = 0x00A9,
    AudioVolDown = 0x00AA,
    MediaNextTrack = 0x00AB,
    MediaPrevTrack = 0x00AC,
    MediaStop = 0x00AD,
    MediaPlayPause = 0x00AE,
    // Mouse keycodes
    MouseUp = 0x00CD,
    MouseDown = 0x00CE,
    MouseLeft = 0x00CF,
    MouseRight = 0x00D0,
    MouseBtn1 = 0x00D1,
    MouseBtn2 = 0x00D2,
    MouseBtn3 = 0x00D3,
    MouseWheelUp = 0x00D9,
    MouseWheelDown = 0x00DA,
    MouseWheelLeft = 0x00DB,
    MouseWheelRight = 0x00DC,
    // Modifiers
    LCtrl = 0x00E0,
    LShift = 0x00E1,
    LAlt = 0x00E2,
    LGui = 0x00E3,
    RCtrl = 0x00E4,
    RShift = 0x00E5,
    RAlt = 0x00E6,
    RGui = 0x00E7,
    // RGB keycodes, uses 0x620 ~ 0x634
    RgbTog = 0x620,
    RgbModeForward = 0x621,
    RgbModeReverse = 0x622,
    RgbHui = 0x623,
    RgbHud = 0x624,
    RgbSai = 0x625,
    RgbSad = 0x626,
    RgbVai = 0x627,
    RgbVad = 0x628,
    RgbSpi = 0x629,
    RgbSpd = 0x62A,
    // Firmware control keycodes
    Bootloader = 0x700,
    Reboot = 0x701,
    ClearEeprom = 0x703,
    // Keyboard-level keycodes, used by the Dilemma pointing device, 0x800 ~ 0x807
    PointerDefaultDpiForward = 0x800,
    PointerDefaultDpiReverse = 0x801,
    PointerSnipingDpiForward = 0x802,
    PointerSnipingDpiReverse = 0x803,
    SnipingMode = 0x804,
    SnipingModeToggle = 0x805,
    DragScrollMode = 0x806,
    DragScrollModeToggle = 0x807,
    // User keycodes, use 0x840 ~ 0x847
    User0 = 0x840,
    User1 = 0x841,
    User2 = 0x842,
    User3 = 0x843,
    User4 = 0x844,
    User5 = 0x845,
    User6 = 0x846,
    User7 = 0x847,
}

/// Keycode and shift state that type `ascii` on an en-us layout.
///
/// Returns `(KeyCode::No, false)` for bytes that can't be typed.
pub fn from_ascii(ascii: u8) -> (KeyCode, bool) {
    let typed = match ascii {
        b'a'..=b'z' => offset(KeyCode::A, ascii - b'a').map(|k| (k, false)),
        b'A'..=b'Z' => offset(KeyCode::A, ascii - b'A').map(|k| (k, true)),
        b'1'..=b'9' => offset(KeyCode::Kc1, ascii - b'1').map(|k| (k, false)),
        b'0' => Some((KeyCode::Kc0, false)),
        b' ' => Some((KeyCode::Space, false)),
        b'\n' => Some((KeyCode::Enter, false)),
        b'\t' => Some((KeyCode::Tab, false)),
        0x08 => Some((KeyCode::Backspace, false)),
        0x1B => Some((KeyCode::Escape, false)),
        0x7F => Some((KeyCode::Delete, false)),
        _ => shifted_digit(ascii).or_else(|| punctuation(ascii)),
    };
    typed.unwrap_or((KeyCode::No, false))
}

/// Symbols typed with shift and the digit row, starting from `1`
const SHIFTED_DIGITS: &[u8; 10] = b"!@#$%^&*()";

/// Punctuation keys with their unshifted and shifted characters
const PUNCTUATION: [(KeyCode, u8, u8); 11] = [
    (KeyCode::Minus, b'-', b'_'),
    (KeyCode::Equal, b'=', b'+'),
    (KeyCode::LeftBracket, b'[', b'{'),
    (KeyCode::RightBracket, b']', b'}'),
    (KeyCode::Backslash, b'\\', b'|'),
    (KeyCode::Semicolon, b';', b':'),
    (KeyCode::Quote, b'\'', b'"'),
    (KeyCode::Grave, b'`', b'~'),
    (KeyCode::Comma, b',', b'<'),
    (KeyCode::Dot, b'.', b'>'),
    (KeyCode::Slash, b'/', b'?'),
];

fn offset(base: KeyCode, n: u8) -> Option<KeyCode> {
    KeyCode::from_repr(base as u16 + n as u16)
}

fn shifted_digit(ascii: u8) -> Option<(KeyCode, bool)> {
    let n = SHIFTED_DIGITS.iter().position(|c| *c == ascii)?;
    offset(KeyCode::Kc1, n as u8).map(|k| (k, true))
}

fn punctuation(ascii: u8) -> Option<(KeyCode, bool)> {
    PUNCTUATION.iter().find_map(|&(keycode, plain, shifted)| {
        if ascii == plain {
            Some((keycode, false))
        } else if ascii == shifted {
            Some((keycode, true))
        } else {
            None
        }
    })
}
