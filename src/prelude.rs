//! Prelude

pub use crate::hw_traits::gpio::EdgeInput as _button_fader_EdgeInput;
pub use crate::hw_traits::pwm::PwmOut as _button_fader_PwmOut;
pub use crate::hw_traits::timer::CompareTimer as _button_fader_CompareTimer;
pub use crate::hw_traits::timer::DebounceTimer as _button_fader_DebounceTimer;
