//! Compile-time configuration of the BWPO keymap.

use embassy_time::Duration;

/// Rows of the logical matrix: three alpha rows plus the thumb row
pub const ROW: usize = 4;
/// Columns of the logical matrix, both halves side by side
pub const COL: usize = 10;
/// Number of layers in the keymap
pub const NUM_LAYER: usize = 7;
/// Number of rotary encoders, one per half
pub const NUM_ENCODER: usize = 2;
/// Number of per-key RGB matrix LEDs
pub const LED_COUNT: usize = 36;

/// Config for the layer indicator
#[derive(Clone, Copy, Debug)]
pub struct IndicatorConfig {
    /// Added to the matrix brightness to get the minimum brightness of the layer color
    pub layer_brightness_offset: u8,
    /// Added to the matrix brightness to get the red level of modifier LEDs when caps lock is on
    pub caps_lock_brightness_offset: u8,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            layer_brightness_offset: 22,
            caps_lock_brightness_offset: 76,
        }
    }
}

/// Config for text macros
#[derive(Clone, Copy, Debug)]
pub struct MacroConfig {
    /// Delay between two characters of a text macro
    pub char_interval: Duration,
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            char_interval: Duration::from_millis(5),
        }
    }
}
