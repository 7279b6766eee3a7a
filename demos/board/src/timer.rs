//! Debounce and compare wrappers over the two Timer_A3 instances.
//!
//! Both wrappers clock the timer from SMCLK, which the demos leave at the
//! ~1 MHz calibrated DCO, so one tick is roughly one microsecond. The
//! debounce wrapper runs the timer in continuous mode and treats CCR0 as a
//! one-shot alarm; the compare wrapper runs it in up mode so CCR0 fixes
//! the period and CCR1 marks a point inside it.

use button_fader::hw_traits::timer::{CompareTimer, DebounceTimer};

use crate::pac;

/// Highest-priority pending source decoded from a timer's grouped
/// interrupt vector.
///
/// Reading the vector register clears the reported flag, so decode it
/// exactly once per `TIMERx_A1` interrupt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerVector {
    /// Nothing pending.
    None,
    /// CCR1 compare match.
    Ccr1,
    /// CCR2 compare match.
    Ccr2,
    /// Counter overflow.
    Overflow,
}

macro_rules! timer_impls {
    ($(#[$dmeta:meta])* $Debounce:ident,
     $(#[$cmeta:meta])* $Compare:ident,
     $(#[$vmeta:meta])* $iv_fn:ident,
     $TIMER:ident, $tactl:ident, $tar:ident, $taccr0:ident, $tacctl0:ident,
     $taccr1:ident, $tacctl1:ident, $taiv:ident) => {
        $(#[$dmeta])*
        pub struct $Debounce {
            timer: pac::$TIMER,
        }

        impl $Debounce {
            /// Take ownership of the timer, halted, with the debounce
            /// window loaded into CCR0 and its interrupt enabled.
            pub fn new(timer: pac::$TIMER, window: u16) -> Self {
                timer.$tactl.write(|w| w.tassel().tassel_2().mc().mc_0());
                timer.$taccr0.write(|w| unsafe { w.bits(window) });
                timer.$tacctl0.write(|w| w.ccie().set_bit());
                $Debounce { timer }
            }
        }

        impl DebounceTimer for $Debounce {
            #[inline]
            fn restart(&mut self) {
                self.timer.$tar.write(|w| unsafe { w.bits(0) });
                self.timer.$tactl.modify(|_, w| w.mc().mc_2());
            }

            #[inline]
            fn halt(&mut self) {
                self.timer.$tactl.modify(|_, w| w.mc().mc_0());
            }

            #[inline]
            fn ack(&mut self) {
                self.timer.$tacctl0.modify(|_, w| w.ccifg().clear_bit());
            }
        }

        $(#[$cmeta])*
        pub struct $Compare {
            timer: pac::$TIMER,
        }

        impl $Compare {
            /// Take ownership of the timer, halted, with `period` in CCR0
            /// and interrupts enabled on both CCR0 and CCR1.
            pub fn new(timer: pac::$TIMER, period: u16) -> Self {
                timer.$tactl.write(|w| w.tassel().tassel_2().mc().mc_0());
                timer.$taccr0.write(|w| unsafe { w.bits(period) });
                timer.$taccr1.write(|w| unsafe { w.bits(0) });
                timer.$tacctl0.write(|w| w.ccie().set_bit());
                timer.$tacctl1.write(|w| w.ccie().set_bit());
                $Compare { timer }
            }
        }

        impl CompareTimer for $Compare {
            #[inline]
            fn set_compare(&mut self, ticks: u16) {
                self.timer.$taccr1.write(|w| unsafe { w.bits(ticks) });
            }

            #[inline]
            fn run(&mut self) {
                self.timer.$tactl.modify(|_, w| w.mc().mc_1());
            }

            #[inline]
            fn halt(&mut self) {
                self.timer.$tactl.modify(|_, w| w.mc().mc_0());
            }
        }

        $(#[$vmeta])*
        pub fn $iv_fn() -> TimerVector {
            let timer = unsafe { pac::Peripherals::steal() }.$TIMER;
            match timer.$taiv.read().bits() {
                2 => TimerVector::Ccr1,
                4 => TimerVector::Ccr2,
                10 => TimerVector::Overflow,
                _ => TimerVector::None,
            }
        }
    };
}

timer_impls!(
    /// Debounce countdown on Timer0_A3.
    DebounceTa0,
    /// Software PWM pacing on Timer0_A3.
    CompareTa0,
    /// Decode and clear Timer0_A3's grouped interrupt vector.
    ta0_interrupt_vector,
    TIMER0_A3, ta0ctl, ta0r, ta0ccr0, ta0cctl0, ta0ccr1, ta0cctl1, ta0iv
);

timer_impls!(
    /// Debounce countdown on Timer1_A3.
    DebounceTa1,
    /// Software PWM pacing on Timer1_A3.
    CompareTa1,
    /// Decode and clear Timer1_A3's grouped interrupt vector.
    ta1_interrupt_vector,
    TIMER1_A3, ta1ctl, ta1r, ta1ccr0, ta1cctl0, ta1ccr1, ta1cctl1, ta1iv
);
