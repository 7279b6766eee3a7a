//! Edge-sensitive button inputs.

use embedded_hal::digital::PinState;

/// Signal edge directions an input can watch for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Low-to-high transition
    Rising,
    /// High-to-low transition
    Falling,
}

impl Edge {
    /// The edge in the other direction.
    pub fn opposite(self) -> Edge {
        match self {
            Edge::Rising => Edge::Falling,
            Edge::Falling => Edge::Rising,
        }
    }

    /// Level the line holds after completing a transition in this direction.
    pub fn settled_level(self) -> PinState {
        match self {
            Edge::Rising => PinState::High,
            Edge::Falling => PinState::Low,
        }
    }
}

/// An input pin whose edges raise an interrupt, with a pending flag and a
/// selectable trigger direction.
///
/// On MSP430 ports this maps to the PxIN, PxIES and PxIFG bits of one pin.
pub trait EdgeInput {
    /// Sample the current line level.
    fn level(&mut self) -> PinState;

    /// Select which edge direction raises the pending flag. Edges in the
    /// other direction are not latched.
    fn arm(&mut self, edge: Edge);

    /// Clear the pending edge flag.
    fn ack(&mut self);
}
