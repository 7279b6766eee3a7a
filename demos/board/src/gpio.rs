//! Wrappers for the port-1 pins the demos use.
//!
//! Port 1 is a single peripheral shared by all three wrappers, so each
//! wrapper is a zero-sized token over its own pin and steals the register
//! block per access, never touching another wrapper's bits.

use button_fader::hw_traits::gpio::{Edge, EdgeInput};
use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin, PinState, StatefulOutputPin};

use crate::pac;

fn port() -> pac::PORT_1_2 {
    unsafe { pac::Peripherals::steal() }.PORT_1_2
}

/// The port-1 pins used by the demos.
pub struct Pins {
    /// S2 pushbutton on P1.3, active low.
    pub switch2: Switch2,
    /// Red LED on P1.0.
    pub red_led: RedLed,
    /// Green LED on P1.6.
    pub green_led: GreenLed,
}

impl Pins {
    /// Consume the port peripheral and configure the demo pins: both LEDs
    /// output and low, S2 a pulled-up input with its falling edge armed
    /// and the port interrupt enabled.
    pub fn split(port: pac::PORT_1_2) -> Pins {
        port.p1dir
            .modify(|_, w| w.p0().set_bit().p3().clear_bit().p6().set_bit());
        port.p1out
            .modify(|_, w| w.p0().clear_bit().p3().set_bit().p6().clear_bit());
        port.p1ren.modify(|_, w| w.p3().set_bit());
        port.p1ies.modify(|_, w| w.p3().set_bit());
        port.p1ifg.write(|w| unsafe { w.bits(0) });
        port.p1ie.modify(|_, w| w.p3().set_bit());
        Pins {
            switch2: Switch2(()),
            red_led: RedLed(()),
            green_led: GreenLed(()),
        }
    }
}

/// S2 pushbutton on P1.3.
pub struct Switch2(());

impl EdgeInput for Switch2 {
    fn level(&mut self) -> PinState {
        if port().p1in.read().p3().bit() {
            PinState::High
        } else {
            PinState::Low
        }
    }

    fn arm(&mut self, edge: Edge) {
        match edge {
            Edge::Falling => port().p1ies.modify(|_, w| w.p3().set_bit()),
            Edge::Rising => port().p1ies.modify(|_, w| w.p3().clear_bit()),
        }
    }

    fn ack(&mut self) {
        port().p1ifg.modify(|_, w| w.p3().clear_bit());
    }
}

macro_rules! led {
    ($(#[$attr:meta])* $Led:ident, $pin:ident) => {
        $(#[$attr])*
        pub struct $Led(());

        impl ErrorType for $Led {
            type Error = Infallible;
        }

        impl OutputPin for $Led {
            #[inline]
            fn set_low(&mut self) -> Result<(), Self::Error> {
                port().p1out.modify(|_, w| w.$pin().clear_bit());
                Ok(())
            }

            #[inline]
            fn set_high(&mut self) -> Result<(), Self::Error> {
                port().p1out.modify(|_, w| w.$pin().set_bit());
                Ok(())
            }
        }

        impl StatefulOutputPin for $Led {
            fn is_set_high(&mut self) -> Result<bool, Self::Error> {
                Ok(port().p1out.read().$pin().bit())
            }

            fn is_set_low(&mut self) -> Result<bool, Self::Error> {
                Ok(!port().p1out.read().$pin().bit())
            }
        }
    };
}

led!(
    /// Red LED on P1.0.
    RedLed,
    p0
);
led!(
    /// Green LED on P1.6. [`PwmTa0`] consumes it to hand the pin to the
    /// timer.
    ///
    /// [`PwmTa0`]: crate::pwm::PwmTa0
    GreenLed,
    p6
);
