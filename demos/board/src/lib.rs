//! Board support for the MSP-EXP430G2 LaunchPad (MSP430G2553) demos.
//!
//! Implements the `button-fader` capability traits over the G2553's port 1
//! and Timer_A peripherals: S2 on P1.3 as the debounced input, the red LED
//! on P1.0 and the green LED on P1.6 as outputs, and TA0's compare channel
//! 1 as a hardware PWM source for P1.6.
//!
//! Everything runs off the power-on ~1 MHz DCO, so timer ticks are about a
//! microsecond and no clock setup is needed.

#![no_std]
#![deny(missing_docs)]

pub mod gpio;
pub mod pwm;
pub mod timer;

pub use msp430g2553 as pac;

/// Stop the watchdog so it never resets a demo.
pub fn stop_watchdog(wdt: &pac::WATCHDOG_TIMER) {
    wdt.wdtctl
        .write(|w| unsafe { w.bits(0x5A00) }.wdthold().set_bit());
}
