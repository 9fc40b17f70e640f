//! RGB matrix layer indicator.
//!
//! While a layer other than the base layer is active, the whole LED range is painted
//! with the color of that layer. While caps lock is on, the LEDs under modifier keys
//! turn red on top of it.
//!
//! The LED buffer belongs to the host's RGB matrix driver, it's lent to
//! [`LayerIndicator::render`] for the duration of one frame.

use smart_leds::RGB8;
use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::config::IndicatorConfig;
use crate::led_indicator::{LedFlags, LedIndicator};

pub const HSV_AZURE: Hsv = Hsv { hue: 132, sat: 102, val: 255 };
pub const HSV_BLUE: Hsv = Hsv { hue: 170, sat: 255, val: 255 };
pub const HSV_GREEN: Hsv = Hsv { hue: 85, sat: 255, val: 255 };
pub const HSV_ORANGE: Hsv = Hsv { hue: 21, sat: 255, val: 255 };
pub const HSV_PURPLE: Hsv = Hsv { hue: 191, sat: 255, val: 255 };
pub const HSV_RED: Hsv = Hsv { hue: 0, sat: 255, val: 255 };
pub const HSV_TEAL: Hsv = Hsv { hue: 128, sat: 255, val: 128 };

/// Colors of layers 1 to 6. Higher layers use [`HSV_RED`].
const LAYER_COLORS: [Hsv; 6] = [HSV_BLUE, HSV_AZURE, HSV_ORANGE, HSV_GREEN, HSV_TEAL, HSV_PURPLE];

/// Color shown at boot, before any layer change
pub const STARTUP_COLOR: Hsv = HSV_RED;

/// Indicator color of a layer, `None` for the base layer
pub fn layer_color(layer: u8) -> Option<Hsv> {
    match layer {
        0 => None,
        n => Some(LAYER_COLORS.get(n as usize - 1).copied().unwrap_or(HSV_RED)),
    }
}

/// Color buffer of the RGB matrix, indexed by LED id.
///
/// Writes to LEDs that don't exist are ignored.
pub trait LedBuffer {
    fn set_color(&mut self, index: u8, color: RGB8);
}

impl LedBuffer for [RGB8] {
    fn set_color(&mut self, index: u8, color: RGB8) {
        if let Some(led) = self.get_mut(index as usize) {
            *led = color;
        }
    }
}

impl<const N: usize> LedBuffer for [RGB8; N] {
    fn set_color(&mut self, index: u8, color: RGB8) {
        self.as_mut_slice().set_color(index, color)
    }
}

/// Controls of the host's RGB driver used at boot
pub trait RgbLight {
    /// Turn the RGB matrix on without saving the state to eeprom
    fn enable_noeeprom(&mut self);

    /// Set the base color without saving it to eeprom
    fn set_hsv_noeeprom(&mut self, hsv: Hsv);
}

/// Boot-time lighting: RGB on, red base color
pub fn init_lighting<L: RgbLight>(light: &mut L) {
    info!("Enabling RGB matrix");
    light.enable_noeeprom();
    light.set_hsv_noeeprom(STARTUP_COLOR);
}

/// Keyboard state sampled by the host for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndicatorState {
    /// Highest active layer
    pub highest_layer: u8,
    /// Lock LEDs reported by the host
    pub host_leds: LedIndicator,
    /// Current brightness of the RGB matrix
    pub brightness: u8,
}

/// Layer indicator over a fixed LED geometry
pub struct LayerIndicator<'a> {
    flags: &'a [LedFlags],
    config: IndicatorConfig,
}

impl<'a> LayerIndicator<'a> {
    pub fn new(flags: &'a [LedFlags], config: IndicatorConfig) -> Self {
        Self { flags, config }
    }

    /// Paint LEDs `led_min..led_max` for the current frame.
    ///
    /// Returns `false`: the host must not run its default indicators afterwards.
    pub fn render<B: LedBuffer + ?Sized>(&self, buffer: &mut B, led_min: u8, led_max: u8, state: &IndicatorState) -> bool {
        if let Some(mut hsv) = layer_color(state.highest_layer) {
            // Never dimmer than the matrix itself
            let floor = state.brightness.saturating_add(self.config.layer_brightness_offset);
            hsv.val = hsv.val.max(floor);
            let rgb = hsv2rgb(hsv);
            for i in led_min..led_max {
                buffer.set_color(i, rgb);
            }
        }

        if state.host_leds.caps_lock() {
            let red = state.brightness.saturating_add(self.config.caps_lock_brightness_offset);
            for i in led_min..led_max {
                if self.is_modifier(i) {
                    buffer.set_color(i, RGB8::new(red, 0, 0));
                }
            }
        }

        false
    }

    fn is_modifier(&self, index: u8) -> bool {
        self.flags
            .get(index as usize)
            .is_some_and(|flags| flags.has_flags(LedFlags::MODIFIER))
    }
}
