//! Hardware PWM on Timer0_A3's CCR1 channel, routed to P1.6.
//!
//! The timer counts up to CCR0 and the channel runs in reset/set mode, so
//! the pin is high from rollover until the CCR1 match. No interrupts are
//! involved; the waveform survives duty changes without glitching.

use button_fader::hw_traits::pwm::PwmOut;
use core::convert::Infallible;
use embedded_hal::pwm::{ErrorType, SetDutyCycle};

use crate::gpio::GreenLed;
use crate::pac;

/// Timer0_A3 driving the green LED as a PWM output.
pub struct PwmTa0 {
    timer: pac::TIMER0_A3,
}

impl PwmTa0 {
    /// Take ownership of the timer and the green LED pin, route the pin to
    /// the timer and load `period` into CCR0. The timer stays halted until
    /// [`enable`](PwmOut::enable).
    pub fn new(timer: pac::TIMER0_A3, _pin: GreenLed, period: u16) -> Self {
        unsafe { pac::Peripherals::steal() }
            .PORT_1_2
            .p1sel
            .modify(|_, w| w.p6().set_bit());
        timer.ta0ctl.write(|w| w.tassel().tassel_2().mc().mc_0());
        timer.ta0ccr0.write(|w| unsafe { w.bits(period) });
        timer.ta0ccr1.write(|w| unsafe { w.bits(0) });
        PwmTa0 { timer }
    }
}

impl PwmOut for PwmTa0 {
    #[inline]
    fn set_duty(&mut self, duty: u16) {
        self.timer.ta0ccr1.write(|w| unsafe { w.bits(duty) });
    }

    #[inline]
    fn max_duty(&self) -> u16 {
        self.timer.ta0ccr0.read().bits()
    }

    #[inline]
    fn enable(&mut self) {
        self.timer.ta0cctl1.modify(|_, w| w.outmod().outmod_7());
        self.timer.ta0ctl.modify(|_, w| w.mc().mc_1());
    }

    fn disable(&mut self) {
        self.timer.ta0ctl.modify(|_, w| w.mc().mc_0());
        // In output mode 0 the pin follows the OUT bit, so clearing both
        // holds the line low.
        self.timer
            .ta0cctl1
            .modify(|_, w| w.outmod().outmod_0().out().clear_bit());
    }
}

impl ErrorType for PwmTa0 {
    type Error = Infallible;
}

impl SetDutyCycle for PwmTa0 {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty()
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        PwmOut::set_duty(self, duty);
        Ok(())
    }
}
