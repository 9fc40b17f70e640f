//! Pointing device glue, only built with the `pointing` feature.

use crate::keymap::LayerState;
use crate::layout::Layer;

/// Controls of the host's pointing device driver
pub trait PointingDevice {
    /// Switch the sensor to the low sniping DPI, or back to the default DPI
    fn set_sniping_enabled(&mut self, enabled: bool);
}

/// Layer whose activation turns sniping mode on
pub const AUTO_SNIPING_LAYER: Layer = Layer::Pointer;

/// Layer state hook: sniping follows the pointer layer.
///
/// Called by the host every time the layer state changes, the returned state is
/// the one the host applies.
pub fn layer_state_set<P: PointingDevice>(device: &mut P, state: LayerState) -> LayerState {
    let sniping = state.is_on(AUTO_SNIPING_LAYER.index());
    debug!("Layer state {}, sniping: {}", state.bits(), sniping);
    device.set_sniping_enabled(sniping);
    state
}
