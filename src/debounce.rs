//! Button debouncing.
//!
//! A mechanical switch chatters for a few milliseconds around every
//! transition. [`Button`] filters that chatter with a hardware countdown:
//! each raw edge restarts the countdown from zero, so it only expires after
//! the line has been quiet for the full window. At expiry the line is
//! sampled once; a level that still matches the armed edge confirms the
//! transition, anything else was a bounce that settled back and is dropped.
//!
//! Confirmation, not the raw interrupt, is what flips the armed edge and
//! reaches the consumer, so a storm of edges costs nothing but countdown
//! restarts.

use crate::event::{ButtonEvent, Message};
use crate::hw_traits::gpio::EdgeInput;
use crate::hw_traits::timer::DebounceTimer;
use bitflags::bitflags;

pub use crate::hw_traits::gpio::Edge;

/// Electrical polarity of the button circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// Line is pulled up and reads low while pressed. Presses are falling
    /// edges. This is the common LaunchPad switch wiring.
    ActiveLow,
    /// Line reads high while pressed. Presses are rising edges.
    ActiveHigh,
}

impl Polarity {
    fn press_edge(self) -> Edge {
        match self {
            Polarity::ActiveLow => Edge::Falling,
            Polarity::ActiveHigh => Edge::Rising,
        }
    }
}

bitflags! {
    /// Which confirmed transitions a [`Button`] reports.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Events: u8 {
        /// Report confirmed presses.
        const PRESS = 1;
        /// Report confirmed releases. Subscribing this also makes the
        /// button re-arm the opposite edge after each confirmed
        /// transition; without it the press edge stays armed forever.
        const RELEASE = 1 << 1;
    }
}

/// Debounce state machine for one button.
///
/// Owns the edge-interrupt input and the countdown timer, and is driven
/// entirely by [`Message`]s fed from the two interrupt handlers. At most one
/// countdown is ever in flight; a raw edge while one is running restarts it,
/// so the countdown always measures time since the last edge.
pub struct Button<I: EdgeInput, T: DebounceTimer> {
    input: I,
    timer: T,
    polarity: Polarity,
    events: Events,
    armed: Edge,
    debouncing: bool,
}

impl<I: EdgeInput, T: DebounceTimer> Button<I, T> {
    /// Take ownership of the input and countdown and arm the press edge.
    ///
    /// The caller configures the countdown window and enables the two
    /// interrupts; from then on the button manages the edge select and the
    /// countdown by itself.
    pub fn new(mut input: I, timer: T, polarity: Polarity, events: Events) -> Self {
        let armed = polarity.press_edge();
        input.arm(armed);
        Button {
            input,
            timer,
            polarity,
            events,
            armed,
            debouncing: false,
        }
    }

    /// Feed one interrupt's worth of work through the state machine,
    /// returning a confirmed transition if this message produced one.
    pub fn process(&mut self, msg: Message) -> Option<ButtonEvent> {
        match msg {
            Message::RawEdge => {
                self.on_raw_edge();
                None
            }
            Message::TimerExpired => self.on_timer_expired(),
        }
    }

    /// Handle an edge in the armed direction. Call from the port interrupt.
    ///
    /// Acknowledges the pin's pending flag, then restarts the countdown
    /// from zero whether or not one was already running.
    pub fn on_raw_edge(&mut self) {
        self.input.ack();
        self.timer.restart();
        self.debouncing = true;
    }

    /// Handle countdown expiry. Call from the timer interrupt.
    ///
    /// Stops the countdown and samples the line. The transition is
    /// confirmed only if the level still matches the armed edge; a bounce
    /// that settled back to where it started confirms nothing and the same
    /// edge stays armed. An expiry with no countdown in flight is ignored.
    pub fn on_timer_expired(&mut self) -> Option<ButtonEvent> {
        self.timer.ack();
        self.timer.halt();
        if !self.debouncing {
            return None;
        }
        self.debouncing = false;

        if self.input.level() != self.armed.settled_level() {
            return None;
        }

        let confirmed = self.armed;
        if self.events.contains(Events::RELEASE) {
            self.armed = confirmed.opposite();
            self.input.arm(self.armed);
        }

        let event = if confirmed == self.polarity.press_edge() {
            ButtonEvent::Press
        } else {
            ButtonEvent::Release
        };
        let wanted = match event {
            ButtonEvent::Press => Events::PRESS,
            ButtonEvent::Release => Events::RELEASE,
        };
        if self.events.contains(wanted) {
            Some(event)
        } else {
            None
        }
    }

    /// Edge direction currently armed.
    pub fn armed_edge(&self) -> Edge {
        self.armed
    }

    /// True while a countdown is in flight.
    pub fn is_debouncing(&self) -> bool {
        self.debouncing
    }
}
