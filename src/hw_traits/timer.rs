//! Timer capabilities: the one-shot debounce countdown and the compare
//! channel that paces a software PWM period.

/// A one-shot countdown with a pending expiry flag.
///
/// The countdown length is fixed when the timer is configured; the control
/// logic only restarts and stops it. On MSP430 this is a Timer_A instance
/// with the window in a compare register.
pub trait DebounceTimer {
    /// Zero the counter and start the countdown, whether or not one is
    /// already running.
    fn restart(&mut self);

    /// Stop counting.
    fn halt(&mut self);

    /// Clear the pending expiry flag.
    fn ack(&mut self);
}

/// A free-running period counter with a movable mid-period compare.
///
/// Each period raises two interrupts: one at rollover, one when the counter
/// reaches the compare value. [`SoftPwm`] turns those into a PWM waveform
/// on a plain output pin.
///
/// [`SoftPwm`]: crate::soft_pwm::SoftPwm
pub trait CompareTimer {
    /// Move the mid-period compare threshold, in timer ticks.
    fn set_compare(&mut self, ticks: u16);

    /// Start the period counter.
    fn run(&mut self);

    /// Stop the period counter.
    fn halt(&mut self);
}
