//! Button-controlled hardware PWM fade.
//!
//! Timer0_A3 drives the green LED from its CCR1 compare channel in
//! reset/set mode, so the waveform costs no interrupts at all. Each
//! confirmed press of S2 steps the duty cycle up by a tenth of the period;
//! the press after the ratchet tops out switches the LED off and resets
//! the duty to zero. The red LED mirrors the debounced button state, high
//! from confirmed press to confirmed release.
//!
//! Timer1_A3 runs the debounce countdown, and everything happens in the
//! interrupt handlers.

#![no_main]
#![no_std]
#![feature(abi_msp430_interrupt)]

extern crate panic_msp430;

use button_fader::debounce::{Button, Events, Polarity};
use button_fader::event::Message;
use button_fader::fader::Fader;
use button_fader::led::Indicator;
use core::cell::RefCell;
use exp430g2::gpio::{Pins, RedLed, Switch2};
use exp430g2::pwm::PwmTa0;
use exp430g2::timer::DebounceTa1;
use msp430::{asm, interrupt::Mutex};
use msp430_rt::entry;
use msp430g2553::{interrupt, Peripherals};

/// Debounce window in SMCLK ticks, about 5 ms at the ~1 MHz DCO.
const DEBOUNCE_TICKS: u16 = 0x1388;
/// PWM period in SMCLK ticks, about 1 kHz.
const PWM_PERIOD: u16 = 999;
/// Duty added per confirmed press.
const DUTY_STEP: u16 = 100;
/// Highest duty the ratchet holds before wrapping to off.
const DUTY_CEILING: u16 = 900;
/// Duty applied at reset, about half brightness.
const INITIAL_DUTY: u16 = 499;

struct FadeDemo {
    button: Button<Switch2, DebounceTa1>,
    fader: Fader<PwmTa0>,
    indicator: Indicator<RedLed>,
}

static DEMO: Mutex<RefCell<Option<FadeDemo>>> = Mutex::new(RefCell::new(None));

#[entry]
fn main(cs: CriticalSection) -> ! {
    let p = Peripherals::take().unwrap();
    exp430g2::stop_watchdog(&p.WATCHDOG_TIMER);

    let pins = Pins::split(p.PORT_1_2);
    let pwm = PwmTa0::new(p.TIMER0_A3, pins.green_led, PWM_PERIOD);
    let timer = DebounceTa1::new(p.TIMER1_A3, DEBOUNCE_TICKS);
    let demo = FadeDemo {
        button: Button::new(
            pins.switch2,
            timer,
            Polarity::ActiveLow,
            Events::PRESS | Events::RELEASE,
        ),
        fader: Fader::new(pwm, DUTY_STEP, DUTY_CEILING, INITIAL_DUTY),
        indicator: Indicator::new(pins.red_led),
    };
    *DEMO.borrow(cs).borrow_mut() = Some(demo);

    // Safe because interrupts are disabled after a reset.
    unsafe { msp430::interrupt::enable() };

    loop {
        asm::nop();
    }
}

#[interrupt]
fn PORT1(cs: CriticalSection) {
    if let Some(demo) = DEMO.borrow(cs).borrow_mut().as_mut() {
        demo.button.process(Message::RawEdge);
    }
}

#[interrupt]
fn TIMER1_A0(cs: CriticalSection) {
    if let Some(demo) = DEMO.borrow(cs).borrow_mut().as_mut() {
        if let Some(event) = demo.button.process(Message::TimerExpired) {
            demo.fader.handle(event);
            demo.indicator.handle(event).ok();
        }
    }
}

// The compiler emits calls to the abort() intrinsic when debug assertions
// are enabled. MSP430 has no meaningful abort() support, so provide one.
#[no_mangle]
extern "C" fn abort() -> ! {
    panic!();
}
