//! BWPO keymap for the Bastard Keyboards Dilemma 3x5_3.
//!
//! The crate holds the keymap tables and the two pieces of logic the keymap
//! adds on top of the host firmware:
//!
//! - [`indicator`]: paints the RGB matrix with the color of the highest active layer,
//!   and highlights modifier keys while caps lock is on
//! - [`keyboard_macros`]: custom keycodes that type a fixed text on press
//!
//! Matrix scanning, HID, tap/hold resolution, the pointing device and the LED driver
//! belong to the host firmware, which calls into this crate through the traits defined here.

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod indicator;
pub mod keyboard_macros;
pub mod keymap;
pub mod layout;
pub mod layout_macro;
#[cfg(feature = "pointing")]
pub mod pointing;

pub use bwpo_types::{action, keycode, led_indicator, modifier};
pub use heapless;
pub use smart_leds;
