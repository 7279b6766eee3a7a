//! Debounced events and the interrupt-to-main mailbox.

use core::cell::Cell;
use core::convert::Infallible;
use critical_section::Mutex;

/// A confirmed button transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    /// The button settled into its pressed level.
    Press,
    /// The button settled into its released level.
    Release,
}

/// One unit of work for [`Button::process`], one per hardware interrupt
/// source.
///
/// [`Button::process`]: crate::debounce::Button::process
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    /// The input pin latched an edge in the armed direction.
    RawEdge,
    /// The debounce countdown expired.
    TimerExpired,
}

/// Depth-one mailbox for handing confirmed events from interrupt context to
/// the main loop.
///
/// A later [`post`] replaces an event the consumer has not taken yet, so the
/// loop always sees the most recent transition.
///
/// [`post`]: EventCell::post
pub struct EventCell(Mutex<Cell<Option<ButtonEvent>>>);

impl EventCell {
    /// Create an empty mailbox, usable in a `static`.
    pub const fn new() -> Self {
        EventCell(Mutex::new(Cell::new(None)))
    }

    /// Deposit an event, replacing any unconsumed one.
    pub fn post(&self, event: ButtonEvent) {
        critical_section::with(|cs| self.0.borrow(cs).set(Some(event)));
    }

    /// Remove and return the pending event, if any.
    pub fn take(&self) -> Option<ButtonEvent> {
        critical_section::with(|cs| self.0.borrow(cs).take())
    }

    /// Non-blocking wait for the next event, for use with `nb::block!`.
    pub fn wait(&self) -> nb::Result<ButtonEvent, Infallible> {
        self.take().ok_or(nb::Error::WouldBlock)
    }
}

impl Default for EventCell {
    fn default() -> Self {
        EventCell::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_empties_the_cell() {
        let cell = EventCell::new();
        assert_eq!(cell.take(), None);
        cell.post(ButtonEvent::Press);
        assert_eq!(cell.take(), Some(ButtonEvent::Press));
        assert_eq!(cell.take(), None);
    }

    #[test]
    fn later_post_replaces_unconsumed_event() {
        let cell = EventCell::new();
        cell.post(ButtonEvent::Press);
        cell.post(ButtonEvent::Release);
        assert_eq!(cell.take(), Some(ButtonEvent::Release));
        assert_eq!(cell.take(), None);
    }

    #[test]
    fn wait_blocks_until_posted() {
        let cell = EventCell::new();
        assert_eq!(cell.wait(), Err(nb::Error::WouldBlock));
        cell.post(ButtonEvent::Press);
        assert_eq!(cell.wait(), Ok(ButtonEvent::Press));
        assert_eq!(cell.wait(), Err(nb::Error::WouldBlock));
    }
}
