//! PWM synthesized in software on a plain output pin.
//!
//! Two compare interrupts per timer period do the work: the rollover
//! interrupt raises the pin, the mid-period compare drops it. Moving the
//! compare threshold moves the duty cycle, which makes this a drop-in
//! [`PwmOut`] for pins with no timer output routing.

use crate::hw_traits::pwm::PwmOut;
use crate::hw_traits::timer::CompareTimer;
use core::convert::Infallible;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::{ErrorType, SetDutyCycle};

/// PWM waveform bit-banged onto `P` from the compare interrupts of `T`.
///
/// The caller owns the interrupt plumbing: route the timer's rollover
/// interrupt to [`on_period_start`] and its mid-period compare interrupt to
/// [`on_duty_match`]. The pin should start out driven low.
///
/// A duty above the period never fires the mid-period compare, so the pin
/// simply stays high, matching what a hardware reset/set compare channel
/// does.
///
/// [`on_period_start`]: SoftPwm::on_period_start
/// [`on_duty_match`]: SoftPwm::on_duty_match
pub struct SoftPwm<T: CompareTimer, P: OutputPin> {
    timer: T,
    pin: P,
    period: u16,
    duty: u16,
    enabled: bool,
}

impl<T: CompareTimer, P: OutputPin> SoftPwm<T, P> {
    /// Wrap a configured period timer and an output pin. The timer stays
    /// halted until [`PwmOut::enable`].
    pub fn new(mut timer: T, pin: P, period: u16, duty: u16) -> Self {
        timer.set_compare(duty);
        SoftPwm {
            timer,
            pin,
            period,
            duty,
            enabled: false,
        }
    }

    /// Period rollover handler: raise the pin for the new period.
    ///
    /// A zero duty keeps the pin low, so 0% really means no pulses rather
    /// than one-tick slivers at every rollover.
    pub fn on_period_start(&mut self) -> Result<(), P::Error> {
        if self.enabled && self.duty > 0 {
            self.pin.set_high()
        } else {
            Ok(())
        }
    }

    /// Mid-period compare handler: drop the pin for the rest of the period.
    pub fn on_duty_match(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()
    }
}

impl<T: CompareTimer, P: OutputPin> PwmOut for SoftPwm<T, P> {
    #[inline]
    fn set_duty(&mut self, duty: u16) {
        self.duty = duty;
        self.timer.set_compare(duty);
    }

    #[inline]
    fn max_duty(&self) -> u16 {
        self.period
    }

    #[inline]
    fn enable(&mut self) {
        self.enabled = true;
        self.timer.run();
    }

    fn disable(&mut self) {
        self.timer.halt();
        self.enabled = false;
        // With the tick source stopped no compare will ever drop the line,
        // so force it low here.
        self.pin.set_low().ok();
    }
}

impl<T: CompareTimer, P: OutputPin> ErrorType for SoftPwm<T, P> {
    type Error = Infallible;
}

impl<T: CompareTimer, P: OutputPin> SetDutyCycle for SoftPwm<T, P> {
    fn max_duty_cycle(&self) -> u16 {
        self.period
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        PwmOut::set_duty(self, duty);
        Ok(())
    }
}
