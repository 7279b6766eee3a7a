//! Capability traits over the hardware the control logic drives.
//!
//! Firmware implements these over a device's registers; host tests implement
//! them over simulated peripherals. Every method is a small register
//! operation that runs to completion inside an interrupt handler.

pub mod gpio;
pub mod pwm;
pub mod timer;
