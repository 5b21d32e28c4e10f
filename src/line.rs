//! Hardware boundary of the decoder.
//!
//! The protocol needs six primitives: switch the line between driving and
//! listening, drive it, sample it, read a microsecond clock, and block for
//! milliseconds or microseconds. The last two come straight from
//! [`DelayNs`](embedded_hal::delay::DelayNs); the rest are covered here.

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// Direction of the shared data line.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The host drives the line.
    Output,
    /// The host releases the line and the sensor drives it.
    Input,
}

/// A bidirectional digital line that can be switched between driving and listening.
pub trait Line: InputPin + OutputPin {
    /// Switches the line direction.
    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::Error>;
}

/// Adapts an open-drain GPIO into a [`Line`].
///
/// An open-drain output with a pull-up can be sampled while "driven" high, so
/// no real direction switch is needed: output mode is a no-op and input mode
/// releases the line by setting it high.
#[derive(Debug)]
pub struct OpenDrain<P> {
    pin: P,
}

impl<P> OpenDrain<P> {
    /// Wraps an open-drain pin.
    pub fn new(pin: P) -> Self {
        OpenDrain { pin }
    }

    /// Gives back the wrapped pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: ErrorType> ErrorType for OpenDrain<P> {
    type Error = P::Error;
}

impl<P: InputPin> InputPin for OpenDrain<P> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_high()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_low()
    }
}

impl<P: OutputPin> OutputPin for OpenDrain<P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()
    }
}

impl<P: InputPin + OutputPin> Line for OpenDrain<P> {
    fn set_mode(&mut self, mode: Mode) -> Result<(), Self::Error> {
        match mode {
            Mode::Output => Ok(()),
            Mode::Input => self.pin.set_high(),
        }
    }
}

/// A free-running microsecond counter.
///
/// Only differences between two readings are used, computed with wrapping
/// arithmetic, so the counter may overflow freely.
pub trait MicrosClock {
    /// Current counter value in microseconds.
    fn now_us(&mut self) -> u32;
}

impl<F: FnMut() -> u32> MicrosClock for F {
    fn now_us(&mut self) -> u32 {
        self()
    }
}
