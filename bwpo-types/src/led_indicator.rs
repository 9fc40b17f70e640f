use core::ops::BitOr;

use bitfield_struct::bitfield;

/// Lock LED state reported by the host
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct LedIndicator {
    #[bits(1)]
    pub num_lock: bool,
    #[bits(1)]
    pub caps_lock: bool,
    #[bits(1)]
    pub scroll_lock: bool,
    #[bits(1)]
    pub compose: bool,
    #[bits(1)]
    pub kana: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for LedIndicator {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl LedIndicator {
    pub const NUM_LOCK: Self = Self::new().with_num_lock(true);
    pub const CAPS_LOCK: Self = Self::new().with_caps_lock(true);
}

/// Role of a single RGB matrix LED, fixed by the keyboard geometry.
///
/// Bit layout matches QMK's `LED_FLAG_*` constants.
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct LedFlags {
    /// LED sits under a modifier key
    #[bits(1)]
    pub modifier: bool,
    /// LED is used for underglow
    #[bits(1)]
    pub underglow: bool,
    /// LED lights up a key
    #[bits(1)]
    pub keylight: bool,
    /// LED is a state indicator
    #[bits(1)]
    pub indicator: bool,
    #[bits(4)]
    _reserved: u8,
}

impl LedFlags {
    pub const NONE: Self = Self::new();
    pub const MODIFIER: Self = Self::new().with_modifier(true);
    pub const UNDERGLOW: Self = Self::new().with_underglow(true);
    pub const KEYLIGHT: Self = Self::new().with_keylight(true);
    pub const INDICATOR: Self = Self::new().with_indicator(true);

    /// Returns `true` if all flags set in `other` are also set in `self`
    pub fn has_flags(self, other: LedFlags) -> bool {
        self.into_bits() & other.into_bits() == other.into_bits()
    }
}

impl BitOr for LedFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}
