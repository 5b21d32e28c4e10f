/// Default number of line samples allowed per edge.
///
/// Tuned for an 8-bit AVR running at 16 MHz, where it comfortably exceeds the
/// longest pulse the sensor produces (80 µs). Faster cores poll faster and
/// need a larger budget; recalibrate against your own loop overhead.
pub const DEFAULT_MAX_POLLS: u32 = 10_000;

/// High pulses strictly longer than this many microseconds decode as `1`.
///
/// The sensor sends roughly 26-28 µs for a `0` and 70 µs for a `1`.
pub const DEFAULT_ONE_THRESHOLD_US: u32 = 40;

/// How long the host holds the line low to wake the sensor.
pub const DEFAULT_START_LOW_MS: u32 = 18;

/// How long the host drives the line high before releasing it.
pub const DEFAULT_REQUEST_HIGH_US: u32 = 40;

/// Timing and validation settings for [`Dht11`](crate::Dht11).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Low hold of the start signal, in milliseconds.
    pub start_low_ms: u32,
    /// High hold of the request pulse, in microseconds.
    pub request_high_us: u32,
    /// Maximum number of line samples while waiting for one edge.
    ///
    /// This is an iteration count, not a duration: it depends on how fast the
    /// target executes the polling loop.
    pub max_polls: u32,
    /// Pulse width cutoff between a `0` and a `1` bit, in microseconds.
    pub one_threshold_us: u32,
    /// Reject frames whose checksum byte does not match the data bytes.
    pub verify_checksum: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Settings matching the sensor datasheet, without checksum validation.
    pub const fn new() -> Self {
        Self {
            start_low_ms: DEFAULT_START_LOW_MS,
            request_high_us: DEFAULT_REQUEST_HIGH_US,
            max_polls: DEFAULT_MAX_POLLS,
            one_threshold_us: DEFAULT_ONE_THRESHOLD_US,
            verify_checksum: false,
        }
    }

    /// Same as [`Config::new`] but rejects frames with a bad checksum.
    pub const fn strict() -> Self {
        Self {
            verify_checksum: true,
            ..Self::new()
        }
    }

    /// Sets the per-edge poll budget.
    pub const fn with_max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = max_polls;
        self
    }

    /// Sets the `0`/`1` pulse width cutoff.
    pub const fn with_one_threshold_us(mut self, threshold_us: u32) -> Self {
        self.one_threshold_us = threshold_us;
        self
    }

    /// Enables or disables checksum validation.
    pub const fn with_verify_checksum(mut self, verify: bool) -> Self {
        self.verify_checksum = verify;
        self
    }
}
