//! PWM output capability.

/// A single PWM output with a fixed period and an adjustable duty cycle.
///
/// Implementations generate the waveform however they like: a timer compare
/// channel in reset/set mode, or [`SoftPwm`] bit-banging a GPIO pin from
/// compare interrupts.
///
/// [`SoftPwm`]: crate::soft_pwm::SoftPwm
pub trait PwmOut {
    /// Set the duty cycle in timer ticks.
    ///
    /// A duty above the period leaves the output high for the whole period,
    /// same as a compare channel whose threshold is never reached.
    fn set_duty(&mut self, duty: u16);

    /// Duty value equal to a 100% duty cycle, i.e. the period.
    fn max_duty(&self) -> u16;

    /// Begin driving the waveform. Safe to call when already enabled.
    fn enable(&mut self);

    /// Stop driving the waveform and force the output low, so the line does
    /// not freeze at whatever level the last compare left it.
    fn disable(&mut self);
}
