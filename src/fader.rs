//! Duty-cycle ratchet.

use crate::event::ButtonEvent;
use crate::hw_traits::pwm::PwmOut;

/// Steps a PWM duty cycle upward on each confirmed press, wrapping to zero
/// past a ceiling.
///
/// The duty only ever moves in whole steps from its starting point, so it
/// walks the sequence `initial, initial + step, ...` up to the last value
/// not above the ceiling. The press after that resets the duty to zero and
/// disables the output outright, instead of producing one out-of-range
/// frame. Releases never touch the duty, so a fade level survives the
/// button being let go.
pub struct Fader<P: PwmOut> {
    pwm: P,
    duty: u16,
    step: u16,
    ceiling: u16,
    enabled: bool,
}

impl<P: PwmOut> Fader<P> {
    /// Take ownership of the output and apply the starting duty, enabling
    /// the waveform only if it is nonzero.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero, or `ceiling` exceeds the output's maximum
    /// duty, or `initial` exceeds `ceiling`. These are configuration
    /// mistakes, not run-time conditions.
    pub fn new(mut pwm: P, step: u16, ceiling: u16, initial: u16) -> Self {
        assert!(step > 0);
        assert!(ceiling <= pwm.max_duty());
        assert!(initial <= ceiling);
        pwm.set_duty(initial);
        let enabled = initial > 0;
        if enabled {
            pwm.enable();
        } else {
            pwm.disable();
        }
        Fader {
            pwm,
            duty: initial,
            step,
            ceiling,
            enabled,
        }
    }

    /// Advance the ratchet one step.
    ///
    /// Re-enables the output on every in-range step, so stepping up from
    /// zero brings a disabled output back.
    pub fn step_up(&mut self) {
        // Checked in u32: duty + step can pass u16::MAX before the
        // comparison for extreme configurations.
        if u32::from(self.duty) + u32::from(self.step) <= u32::from(self.ceiling) {
            self.duty += self.step;
            self.pwm.set_duty(self.duty);
            self.pwm.enable();
            self.enabled = true;
        } else {
            self.duty = 0;
            self.pwm.set_duty(0);
            self.pwm.disable();
            self.enabled = false;
        }
    }

    /// Apply a debounced event: presses step the ratchet, releases are
    /// ignored.
    pub fn handle(&mut self, event: ButtonEvent) {
        if let ButtonEvent::Press = event {
            self.step_up();
        }
    }

    /// Current duty in timer ticks.
    pub fn duty(&self) -> u16 {
        self.duty
    }

    /// True while the output waveform is being driven.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Mutable access to the wrapped output, for servicing the waveform
    /// interrupts of a software-generated PWM.
    pub fn pwm_mut(&mut self) -> &mut P {
        &mut self.pwm
    }
}
