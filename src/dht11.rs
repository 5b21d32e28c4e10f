use embedded_hal::delay::DelayNs;

use crate::config::Config;
use crate::error::DhtError;
use crate::frame::{FRAME_BITS, Frame, classify_pulse};
use crate::line::{Line, MicrosClock, Mode};

/// Driver for the DHT11 temperature and humidity sensor.
///
/// Owns the data line for its whole lifetime, so no other code can drive or
/// sample it in the middle of a read.
pub struct Dht11<LINE, DELAY, CLOCK> {
    line: LINE,
    delay: DELAY,
    clock: CLOCK,
    config: Config,
}

/// Reading returned by the DHT11 sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reading {
    /// Temperature in whole degrees Celsius.
    pub temperature: u8,
    /// Relative humidity in whole percent.
    pub humidity: u8,
}

impl Reading {
    /// Interprets a raw frame. Fraction bytes are ignored.
    pub const fn from_frame(frame: &Frame) -> Self {
        Reading {
            temperature: frame.temperature(),
            humidity: frame.humidity(),
        }
    }
}

impl<LINE, DELAY, CLOCK, E> Dht11<LINE, DELAY, CLOCK>
where
    LINE: Line<Error = E>,
    DELAY: DelayNs,
    CLOCK: MicrosClock,
{
    /// Creates a new instance of the DHT11 driver with the default [`Config`].
    ///
    /// # Arguments
    ///
    /// * `line` - The data line. Assumed idle-high (pulled up) before each read.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    /// * `clock` - A free-running microsecond counter used to time bit pulses.
    pub fn new(line: LINE, delay: DELAY, clock: CLOCK) -> Self {
        Self::with_config(line, delay, clock, Config::new())
    }

    /// Creates a new instance of the DHT11 driver with custom timing settings.
    pub fn with_config(line: LINE, delay: DELAY, clock: CLOCK, config: Config) -> Self {
        Dht11 {
            line,
            delay,
            clock,
            config,
        }
    }

    /// Settings used by this driver.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Destroys the driver and gives back the line, delay and clock.
    pub fn release(self) -> (LINE, DELAY, CLOCK) {
        (self.line, self.delay, self.clock)
    }

    /// Reads a temperature and humidity measurement from the sensor.
    ///
    /// Blocks for the 18 ms start signal plus the ~4 ms transmission. Nothing
    /// is retried: the first missed edge fails the whole read, and the caller
    /// decides whether to try again on its next sampling interval.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` if all 40 bits were received.
    /// * `Err(DhtError)` on timeout, line error, or (when enabled) checksum mismatch.
    pub fn read(&mut self) -> Result<Reading, DhtError<E>> {
        let frame = self.read_frame()?;
        Ok(Reading::from_frame(&frame))
    }

    /// Reads the raw five byte frame, including fractions and checksum.
    pub fn read_frame(&mut self) -> Result<Frame, DhtError<E>> {
        self.start()?;
        self.acknowledge()?;
        let frame = self.decode_frame()?;

        if self.config.verify_checksum && !frame.is_checksum_valid() {
            warn!(
                "dht11 checksum mismatch: got {}, expected {}",
                frame.checksum(),
                frame.expected_checksum()
            );
            return Err(DhtError::ChecksumMismatch);
        }

        debug!("dht11 frame {}", frame.as_bytes());
        Ok(frame)
    }

    /// Sends the start signal and hands the line over to the sensor.
    ///
    /// Holds the line low long enough for the sensor to notice, drives it high
    /// for the request pulse, then switches to input.
    fn start(&mut self) -> Result<(), DhtError<E>> {
        self.line.set_mode(Mode::Output)?;
        self.line.set_low()?;
        self.delay.delay_ms(self.config.start_low_ms);
        self.line.set_high()?;
        self.delay.delay_us(self.config.request_high_us);
        self.line.set_mode(Mode::Input)?;
        Ok(())
    }

    /// Consumes the sensor's response: 80us low followed by 80us high.
    fn acknowledge(&mut self) -> Result<(), DhtError<E>> {
        self.wait_for_high()?;
        self.wait_for_low()?;
        Ok(())
    }

    /// Reads the 40 data bits into a frame.
    ///
    /// The frame only leaves this function once every bit has been received.
    fn decode_frame(&mut self) -> Result<Frame, DhtError<E>> {
        let mut frame = Frame::default();

        for index in 0..FRAME_BITS {
            let bit = self.read_bit().inspect_err(|_| {
                trace!("dht11 aborted at bit {}", index);
            })?;
            if bit {
                frame.set_bit(index);
            }
        }

        Ok(frame)
    }

    /// Reads a single bit from the sensor.
    ///
    /// Every bit starts with a ~50us low separator; the length of the high
    /// pulse that follows encodes the value.
    fn read_bit(&mut self) -> Result<bool, DhtError<E>> {
        self.wait_for_high()?;
        let start = self.clock.now_us();
        self.wait_for_low()?;
        let width = self.clock.now_us().wrapping_sub(start);

        Ok(classify_pulse(width, self.config.one_threshold_us))
    }

    /// Waits until the data line goes high or times out.
    fn wait_for_high(&mut self) -> Result<(), DhtError<E>> {
        Self::wait_for_state(self.config.max_polls, || self.line.is_high())
    }

    /// Waits until the data line goes low or times out.
    fn wait_for_low(&mut self) -> Result<(), DhtError<E>> {
        Self::wait_for_state(self.config.max_polls, || self.line.is_low())
    }

    /// Busy-polls a pin condition until true or the poll budget runs out.
    ///
    /// There is no delay between samples; the condition is checked at most
    /// `max_polls` times.
    ///
    /// # Errors
    ///
    /// Returns `DhtError::Timeout` if the budget is exhausted
    fn wait_for_state<F>(max_polls: u32, mut condition: F) -> Result<(), DhtError<E>>
    where
        F: FnMut() -> Result<bool, E>,
    {
        for _ in 0..max_polls {
            if condition()? {
                return Ok(());
            }
        }
        Err(DhtError::Timeout)
    }
}
