//! Button-controlled software PWM fade.
//!
//! The red LED on P1.0 has no timer output routing, so Timer1_A3's compare
//! interrupts bit-bang the waveform instead: the CCR0 handler raises the
//! pin at each period start and the CCR1 handler drops it at the duty
//! match. S2 presses ratchet the duty exactly as in the hardware fade, and
//! the green LED mirrors the debounced button state.
//!
//! Timer0_A3 runs the debounce countdown.

#![no_main]
#![no_std]
#![feature(abi_msp430_interrupt)]

extern crate panic_msp430;

use button_fader::debounce::{Button, Events, Polarity};
use button_fader::event::Message;
use button_fader::fader::Fader;
use button_fader::led::Indicator;
use button_fader::soft_pwm::SoftPwm;
use core::cell::RefCell;
use exp430g2::gpio::{GreenLed, Pins, RedLed, Switch2};
use exp430g2::timer::{ta1_interrupt_vector, CompareTa1, DebounceTa0, TimerVector};
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
    button: Button<Switch2, DebounceTa0>,
    fader: Fader<SoftPwm<CompareTa1, RedLed>>,
    indicator: Indicator<GreenLed>,
}

static DEMO: Mutex<RefCell<Option<FadeDemo>>> = Mutex::new(RefCell::new(None));

#[entry]
fn main(cs: CriticalSection) -> ! {
    let p = Peripherals::take().unwrap();
    exp430g2::stop_watchdog(&p.WATCHDOG_TIMER);

    let pins = Pins::split(p.PORT_1_2);
    let pwm = SoftPwm::new(
        CompareTa1::new(p.TIMER1_A3, PWM_PERIOD),
        pins.red_led,
        PWM_PERIOD,
        0,
    );
    let timer = DebounceTa0::new(p.TIMER0_A3, DEBOUNCE_TICKS);
    let demo = FadeDemo {
        button: Button::new(
            pins.switch2,
            timer,
            Polarity::ActiveLow,
            Events::PRESS | Events::RELEASE,
        ),
        fader: Fader::new(pwm, DUTY_STEP, DUTY_CEILING, INITIAL_DUTY),
        indicator: Indicator::new(pins.green_led),
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
fn TIMER0_A0(cs: CriticalSection) {
    if let Some(demo) = DEMO.borrow(cs).borrow_mut().as_mut() {
        if let Some(event) = demo.button.process(Message::TimerExpired) {
            demo.fader.handle(event);
            demo.indicator.handle(event).ok();
        }
    }
}

#[interrupt]
fn TIMER1_A0(cs: CriticalSection) {
    if let Some(demo) = DEMO.borrow(cs).borrow_mut().as_mut() {
        demo.fader.pwm_mut().on_period_start().ok();
    }
}

#[interrupt]
fn TIMER1_A1(cs: CriticalSection) {
    // Reading the vector register clears the flag, so decode it even if
    // the demo state is not in place yet.
    if let TimerVector::Ccr1 = ta1_interrupt_vector() {
        if let Some(demo) = DEMO.borrow(cs).borrow_mut().as_mut() {
            demo.fader.pwm_mut().on_duty_match().ok();
        }
    }
}

// The compiler emits calls to the abort() intrinsic when debug assertions
// are enabled. MSP430 has no meaningful abort() support, so provide one.
#[no_mangle]
extern "C" fn abort() -> ! {
    panic!();
}
