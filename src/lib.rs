//! Interrupt-driven button debouncing and PWM duty-cycle fade control for
//! MSP430-class microcontrollers.
//!
//! Two small state machines cover the classic LaunchPad button demos.
//! [`debounce::Button`] turns noisy pin edges into confirmed press/release
//! events: every raw edge restarts a hardware countdown, and only a level
//! that still matches the armed edge once the countdown expires quietly is
//! reported. [`fader::Fader`] steps a PWM duty cycle upward on each
//! confirmed press and wraps back to zero, output off, once another step
//! would pass its ceiling.
//!
//! All register access goes through the capability traits in [`hw_traits`],
//! so the same control logic drives a timer compare channel, a plain GPIO
//! pin toggled from two compare interrupts ([`soft_pwm::SoftPwm`]), or
//! simulated peripherals in host tests.
//!
//! # Usage
//!
//! Implement [`hw_traits::gpio::EdgeInput`] and
//! [`hw_traits::timer::DebounceTimer`] over the target's port-interrupt and
//! timer registers. Feed one [`event::Message`] per hardware interrupt to
//! [`debounce::Button::process`], then hand any confirmed event to a
//! [`fader::Fader`], [`led::Toggle`] or [`led::Indicator`], either directly
//! in the handler or through an [`event::EventCell`] into the main loop.
//!
//! # Examples
//!
//! The `demos/` directory contains firmware crates for the MSP-EXP430G2
//! LaunchPad (MSP430G2553): a debounced toggle, a hardware-PWM fade and a
//! software-PWM fade.

#![no_std]
#![deny(missing_docs)]

#[cfg(test)]
extern crate std;

pub mod debounce;
pub mod event;
pub mod fader;
pub mod hw_traits;
pub mod led;
pub mod prelude;
pub mod soft_pwm;

#[cfg(test)]
mod sim;

#[cfg(test)]
mod tests {
    use crate::debounce::{Button, Events, Polarity};
    use crate::event::{ButtonEvent, EventCell, Message};
    use crate::fader::Fader;
    use crate::led::Indicator;
    use crate::sim::{SimInput, SimLed, SimPwm, SimTimer};
    use embedded_hal::digital::PinState;

    const WINDOW: u16 = 5;

    fn settle(
        button: &mut Button<SimInput, SimTimer>,
        timer: &SimTimer,
        cell: &EventCell,
    ) -> Option<ButtonEvent> {
        let mut confirmed = None;
        for _ in 0..WINDOW {
            if timer.tick() {
                if let Some(ev) = button.process(Message::TimerExpired) {
                    cell.post(ev);
                    confirmed = Some(ev);
                }
            }
        }
        confirmed
    }

    // Full pipeline: raw edges through the debouncer, confirmed events through
    // the mailbox, presses into the duty ratchet and the indicator LED.
    #[test]
    fn fade_control_loop() {
        let input = SimInput::new(PinState::High);
        let timer = SimTimer::new(WINDOW);
        let pwm = SimPwm::new(999);
        let led = SimLed::new(PinState::Low);

        let mut button = Button::new(
            input.clone(),
            timer.clone(),
            Polarity::ActiveLow,
            Events::PRESS | Events::RELEASE,
        );
        let mut fader = Fader::new(pwm.clone(), 100, 900, 499);
        let mut indicator = Indicator::new(led.clone());
        let cell = EventCell::new();

        assert_eq!(pwm.duty(), 499);
        assert!(pwm.is_enabled());

        // The mailbox holds one event, so the loop drains it after every
        // confirmation, same as the firmware main loop blocking on wait().
        let cycle = |button: &mut Button<SimInput, SimTimer>,
                     fader: &mut Fader<SimPwm>,
                     indicator: &mut Indicator<SimLed>| {
            // Press with a short bounce, then a quiet window.
            if input.drive(PinState::Low) {
                button.process(Message::RawEdge);
            }
            input.drive(PinState::High);
            if input.drive(PinState::Low) {
                button.process(Message::RawEdge);
            }
            assert_eq!(settle(button, &timer, &cell), Some(ButtonEvent::Press));
            while let Some(ev) = cell.take() {
                fader.handle(ev);
                indicator.handle(ev).unwrap();
            }
            assert_eq!(led.level(), PinState::High);

            // Clean release.
            if input.drive(PinState::High) {
                button.process(Message::RawEdge);
            }
            assert_eq!(settle(button, &timer, &cell), Some(ButtonEvent::Release));
            while let Some(ev) = cell.take() {
                fader.handle(ev);
                indicator.handle(ev).unwrap();
            }
            assert_eq!(led.level(), PinState::Low);
        };

        for expected in &[599, 699, 799, 899] {
            cycle(&mut button, &mut fader, &mut indicator);
            assert_eq!(pwm.duty(), *expected);
            assert!(pwm.is_enabled());
        }

        // One more step would pass the ceiling: full reset, output off.
        cycle(&mut button, &mut fader, &mut indicator);
        assert_eq!(pwm.duty(), 0);
        assert!(!pwm.is_enabled());

        // The ratchet starts over from zero.
        cycle(&mut button, &mut fader, &mut indicator);
        assert_eq!(pwm.duty(), 100);
        assert!(pwm.is_enabled());
    }

    // The indicator pin tracks the debounced (not raw) button state.
    #[test]
    fn indicator_follows_confirmed_state() {
        let input = SimInput::new(PinState::High);
        let timer = SimTimer::new(WINDOW);
        let led = SimLed::new(PinState::Low);

        let mut button = Button::new(
            input.clone(),
            timer.clone(),
            Polarity::ActiveLow,
            Events::PRESS | Events::RELEASE,
        );
        let mut indicator = Indicator::new(led.clone());
        let cell = EventCell::new();

        assert!(input.drive(PinState::Low));
        button.process(Message::RawEdge);
        // Still bouncing, nothing confirmed yet.
        assert_eq!(led.level(), PinState::Low);

        settle(&mut button, &timer, &cell);
        while let Some(ev) = cell.take() {
            indicator.handle(ev).unwrap();
        }
        assert_eq!(led.level(), PinState::High);

        assert!(input.drive(PinState::High));
        button.process(Message::RawEdge);
        settle(&mut button, &timer, &cell);
        while let Some(ev) = cell.take() {
            indicator.handle(ev).unwrap();
        }
        assert_eq!(led.level(), PinState::Low);
    }
}
