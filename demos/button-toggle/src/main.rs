//! Debounced button toggle.
//!
//! Each confirmed press of S2 toggles the red LED. Only presses are
//! subscribed, so the falling edge stays armed the whole time and release
//! chatter is filtered out without ever reaching the main loop.
//!
//! The interrupt handlers only feed the debounce state machine; the LED
//! work happens in `main`, which picks confirmed presses out of the
//! mailbox.

#![no_main]
#![no_std]
#![feature(abi_msp430_interrupt)]

extern crate panic_msp430;

use button_fader::debounce::{Button, Events, Polarity};
use button_fader::event::{EventCell, Message};
use button_fader::led::Toggle;
use core::cell::RefCell;
use exp430g2::gpio::{Pins, Switch2};
use exp430g2::timer::DebounceTa0;
use msp430::interrupt::Mutex;
use msp430_rt::entry;
use msp430g2553::{interrupt, Peripherals};
use nb::block;

/// Debounce window in SMCLK ticks, about 5 ms at the ~1 MHz DCO.
const DEBOUNCE_TICKS: u16 = 0x1388;

static BUTTON: Mutex<RefCell<Option<Button<Switch2, DebounceTa0>>>> =
    Mutex::new(RefCell::new(None));
static EVENTS: EventCell = EventCell::new();

#[entry]
fn main(cs: CriticalSection) -> ! {
    let p = Peripherals::take().unwrap();
    exp430g2::stop_watchdog(&p.WATCHDOG_TIMER);

    let pins = Pins::split(p.PORT_1_2);
    let timer = DebounceTa0::new(p.TIMER0_A3, DEBOUNCE_TICKS);
    let button = Button::new(pins.switch2, timer, Polarity::ActiveLow, Events::PRESS);
    *BUTTON.borrow(cs).borrow_mut() = Some(button);

    let mut toggle = Toggle::new(pins.red_led);

    // Safe because interrupts are disabled after a reset.
    unsafe { msp430::interrupt::enable() };

    loop {
        let event = block!(EVENTS.wait()).unwrap();
        toggle.handle(event).ok();
    }
}

#[interrupt]
fn PORT1(cs: CriticalSection) {
    if let Some(button) = BUTTON.borrow(cs).borrow_mut().as_mut() {
        button.process(Message::RawEdge);
    }
}

#[interrupt]
fn TIMER0_A0(cs: CriticalSection) {
    if let Some(button) = BUTTON.borrow(cs).borrow_mut().as_mut() {
        if let Some(event) = button.process(Message::TimerExpired) {
            EVENTS.post(event);
        }
    }
}

// The compiler emits calls to the abort() intrinsic when debug assertions
// are enabled. MSP430 has no meaningful abort() support, so provide one.
#[no_mangle]
extern "C" fn abort() -> ! {
    panic!();
}
