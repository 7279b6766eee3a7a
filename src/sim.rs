//! Simulated peripherals for host tests.
//!
//! Each type is a cheap clone sharing its state through `Rc`, so a test can
//! hand one clone to the object under test and keep another to poke levels
//! and read back what the hardware was told to do.

use core::cell::Cell;
use core::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use crate::debounce::Button;
use crate::event::{ButtonEvent, Message};
use crate::hw_traits::gpio::{Edge, EdgeInput};
use crate::hw_traits::pwm::PwmOut;
use crate::hw_traits::timer::{CompareTimer, DebounceTimer};
use embedded_hal::digital::{ErrorType, OutputPin, PinState, StatefulOutputPin};

/// Edge-interrupt input pin with an externally driven level.
#[derive(Clone)]
pub struct SimInput {
    level: Rc<Cell<PinState>>,
    armed: Rc<Cell<Edge>>,
}

impl SimInput {
    pub fn new(level: PinState) -> Self {
        SimInput {
            level: Rc::new(Cell::new(level)),
            armed: Rc::new(Cell::new(Edge::Falling)),
        }
    }

    /// Drive the line to `level`, reporting whether the transition matches
    /// the armed direction, i.e. whether the hardware would latch the
    /// pending flag and interrupt.
    pub fn drive(&self, level: PinState) -> bool {
        let prev = self.level.replace(level);
        if prev == level {
            return false;
        }
        let edge = match level {
            PinState::High => Edge::Rising,
            PinState::Low => Edge::Falling,
        };
        edge == self.armed.get()
    }

    /// Currently armed edge direction.
    pub fn armed(&self) -> Edge {
        self.armed.get()
    }
}

impl EdgeInput for SimInput {
    fn level(&mut self) -> PinState {
        self.level.get()
    }

    fn arm(&mut self, edge: Edge) {
        self.armed.set(edge);
    }

    fn ack(&mut self) {}
}

/// One-shot countdown advanced manually with [`tick`].
///
/// [`tick`]: SimTimer::tick
#[derive(Clone)]
pub struct SimTimer {
    window: u16,
    remaining: Rc<Cell<Option<u16>>>,
}

impl SimTimer {
    pub fn new(window: u16) -> Self {
        assert!(window > 0);
        SimTimer {
            window,
            remaining: Rc::new(Cell::new(None)),
        }
    }

    /// Advance one tick; true when the countdown expires on this tick.
    pub fn tick(&self) -> bool {
        match self.remaining.get() {
            Some(1) => {
                self.remaining.set(None);
                true
            }
            Some(n) => {
                self.remaining.set(Some(n - 1));
                false
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.remaining.get().is_some()
    }
}

impl DebounceTimer for SimTimer {
    fn restart(&mut self) {
        self.remaining.set(Some(self.window));
    }

    fn halt(&mut self) {
        self.remaining.set(None);
    }

    fn ack(&mut self) {}
}

/// Register-level view of a hardware PWM channel.
#[derive(Clone)]
pub struct SimPwm {
    period: u16,
    duty: Rc<Cell<u16>>,
    enabled: Rc<Cell<bool>>,
}

impl SimPwm {
    pub fn new(period: u16) -> Self {
        SimPwm {
            period,
            duty: Rc::new(Cell::new(0)),
            enabled: Rc::new(Cell::new(false)),
        }
    }

    pub fn duty(&self) -> u16 {
        self.duty.get()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }
}

impl PwmOut for SimPwm {
    fn set_duty(&mut self, duty: u16) {
        self.duty.set(duty);
    }

    fn max_duty(&self) -> u16 {
        self.period
    }

    fn enable(&mut self) {
        self.enabled.set(true);
    }

    fn disable(&mut self) {
        self.enabled.set(false);
    }
}

/// Compare half of a software PWM: records the threshold and whether the
/// counter is running.
#[derive(Clone)]
pub struct SimCompare {
    compare: Rc<Cell<u16>>,
    running: Rc<Cell<bool>>,
}

impl SimCompare {
    pub fn new() -> Self {
        SimCompare {
            compare: Rc::new(Cell::new(0)),
            running: Rc::new(Cell::new(false)),
        }
    }

    pub fn compare(&self) -> u16 {
        self.compare.get()
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl CompareTimer for SimCompare {
    fn set_compare(&mut self, ticks: u16) {
        self.compare.set(ticks);
    }

    fn run(&mut self) {
        self.running.set(true);
    }

    fn halt(&mut self) {
        self.running.set(false);
    }
}

/// Plain output pin.
#[derive(Clone)]
pub struct SimLed(Rc<Cell<PinState>>);

impl SimLed {
    pub fn new(level: PinState) -> Self {
        SimLed(Rc::new(Cell::new(level)))
    }

    pub fn level(&self) -> PinState {
        self.0.get()
    }
}

impl ErrorType for SimLed {
    type Error = Infallible;
}

impl OutputPin for SimLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set(PinState::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set(PinState::High);
        Ok(())
    }
}

impl StatefulOutputPin for SimLed {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get() == PinState::High)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get() == PinState::Low)
    }
}

/// Tick the countdown `n` times, feeding each expiry to the button and
/// collecting everything it confirms.
pub fn run_ticks<I: EdgeInput>(
    btn: &mut Button<I, SimTimer>,
    timer: &SimTimer,
    n: u16,
) -> Vec<ButtonEvent> {
    let mut out = Vec::new();
    for _ in 0..n {
        if timer.tick() {
            out.extend(btn.process(Message::TimerExpired));
        }
    }
    out
}
