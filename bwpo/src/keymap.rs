use crate::action::{Direction, EncoderAction, KeyAction};

/// Bitmask of active layers, bit `n` is set when layer `n` is on.
///
/// The layer state is owned by the host's layer stack, the keymap only reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    /// Max number of layers a layer state can hold
    pub const MAX_LAYER: u8 = 32;

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns a copy of the state with the given layer on
    pub fn with_layer(self, layer: u8) -> Self {
        if layer >= Self::MAX_LAYER {
            warn!("Not a valid layer {}, layer state holds only {} layers", layer, Self::MAX_LAYER);
            return self;
        }
        Self(self.0 | (1 << layer))
    }

    /// Returns a copy of the state with the given layer off
    pub fn without_layer(self, layer: u8) -> Self {
        if layer >= Self::MAX_LAYER {
            warn!("Not a valid layer {}, layer state holds only {} layers", layer, Self::MAX_LAYER);
            return self;
        }
        Self(self.0 & !(1 << layer))
    }

    pub fn is_on(self, layer: u8) -> bool {
        layer < Self::MAX_LAYER && self.0 & (1 << layer) != 0
    }

    /// Index of the highest active layer, 0 if no layer is on
    pub fn highest_layer(self) -> u8 {
        if self.0 == 0 {
            0
        } else {
            (u32::BITS - 1 - self.0.leading_zeros()) as u8
        }
    }
}

impl From<u32> for LayerState {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Layers are static tables: the keymap never changes them. Which layers are active
/// is decided by the host and passed in as a [`LayerState`] on every lookup.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize = 0> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Rotary encoders, each rotary encoder is represented as (Clockwise, CounterClockwise)
    encoders: Option<&'a [[EncoderAction; NUM_ENCODER]; NUM_LAYER]>,
    /// Default layer number, always considered active
    default_layer: u8,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize>
    KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>
{
    pub const fn new(
        action_map: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
        encoder_map: Option<&'a [[EncoderAction; NUM_ENCODER]; NUM_LAYER]>,
    ) -> Self {
        KeyMap {
            layers: action_map,
            encoders: encoder_map,
            default_layer: 0,
        }
    }

    /// Fetch the action stored at the given position, without resolving transparent keys
    pub fn action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        match self.layers.get(layer_num).and_then(|l| l.get(row)).and_then(|r| r.get(col)) {
            Some(action) => *action,
            None => {
                warn!("Key position ({}, {}) on layer {} is out of the keymap", row, col, layer_num);
                KeyAction::No
            }
        }
    }

    /// Fetch the action of a key under the given layer state.
    ///
    /// Iterates from the highest layer down to the default layer. `Transparent`
    /// actions fall through to the next active layer.
    pub fn get_action(&self, layer_state: LayerState, row: usize, col: usize) -> KeyAction {
        if row >= ROW || col >= COL {
            warn!("Key position ({}, {}) is out of the keymap", row, col);
            return KeyAction::No;
        }

        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if layer_state.is_on(layer_idx as u8) || layer_idx as u8 == self.default_layer {
                let action = layer[row][col];
                if action == KeyAction::Transparent {
                    continue;
                }
                return action;
            }

            if layer_idx as u8 == self.default_layer {
                // No action
                break;
            }
        }

        KeyAction::No
    }

    /// Fetch the action of an encoder rotation under the given layer state.
    ///
    /// Resolved like a key: the highest active layer wins and `Transparent` falls through.
    pub fn get_encoder_action(&self, layer_state: LayerState, id: usize, direction: Direction) -> KeyAction {
        let Some(encoders) = self.encoders else {
            return KeyAction::No;
        };
        if id >= NUM_ENCODER {
            warn!("Encoder {} is out of the encoder map", id);
            return KeyAction::No;
        }

        for (layer_idx, layer) in encoders.iter().enumerate().rev() {
            if layer_state.is_on(layer_idx as u8) || layer_idx as u8 == self.default_layer {
                let action = match direction {
                    Direction::Clockwise => layer[id].clockwise(),
                    Direction::CounterClockwise => layer[id].counter_clockwise(),
                };
                if action == KeyAction::Transparent {
                    continue;
                }
                return action;
            }

            if layer_idx as u8 == self.default_layer {
                break;
            }
        }

        KeyAction::No
    }

    /// The highest layer of the keymap that is active in the given state
    pub fn get_activated_layer(&self, layer_state: LayerState) -> u8 {
        for layer_idx in (0..NUM_LAYER).rev() {
            if layer_state.is_on(layer_idx as u8) || layer_idx as u8 == self.default_layer {
                return layer_idx as u8;
            }
        }

        self.default_layer
    }
}
