//! # BWPO Types
//!
//! Fundamental type definitions shared by the BWPO keymap.
//!
//! ## Modules
//!
//! - [`action`] - Key actions stored in the keymap and the encoder map
//! - [`keycode`] - Keycode definitions, including media, mouse, RGB and user keycodes
//! - [`modifier`] - Modifier key combinations used by home-row mods
//! - [`led_indicator`] - Host LED indicator state and per-LED geometry flags

#![no_std]

pub mod action;
pub mod keycode;
pub mod led_indicator;
pub mod modifier;
