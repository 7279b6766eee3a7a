//! Discrete reactions to debounced events.

use crate::event::ButtonEvent;
use embedded_hal::digital::{OutputPin, StatefulOutputPin};

/// Toggles a pin on each confirmed press, the debounced-toggle demo in a
/// struct. Releases are ignored.
pub struct Toggle<P: StatefulOutputPin> {
    pin: P,
}

impl<P: StatefulOutputPin> Toggle<P> {
    /// Wrap a pin.
    pub fn new(pin: P) -> Self {
        Toggle { pin }
    }

    /// Apply a debounced event.
    pub fn handle(&mut self, event: ButtonEvent) -> Result<(), P::Error> {
        match event {
            ButtonEvent::Press => self.pin.toggle(),
            ButtonEvent::Release => Ok(()),
        }
    }
}

/// Mirrors the debounced button state onto a pin: high from confirmed press
/// to confirmed release.
pub struct Indicator<P: OutputPin> {
    pin: P,
}

impl<P: OutputPin> Indicator<P> {
    /// Wrap a pin.
    pub fn new(pin: P) -> Self {
        Indicator { pin }
    }

    /// Apply a debounced event.
    pub fn handle(&mut self, event: ButtonEvent) -> Result<(), P::Error> {
        match event {
            ButtonEvent::Press => self.pin.set_high(),
            ButtonEvent::Release => self.pin.set_low(),
        }
    }
}
