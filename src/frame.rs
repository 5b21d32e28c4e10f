/// Number of bytes in one sensor frame.
pub const FRAME_LEN: usize = 5;

/// Number of bit pulses in one sensor frame.
pub const FRAME_BITS: usize = FRAME_LEN * 8;

/// The five raw bytes sent by the sensor in one transmission.
///
/// Layout: humidity integer, humidity fraction, temperature integer,
/// temperature fraction, checksum. The DHT11 always sends zero (or a
/// meaningless value) in the fraction bytes.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    /// Builds a frame from raw bytes.
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Frame(bytes)
    }

    /// Raw bytes in transmission order.
    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// Relative humidity, integer part, in percent.
    pub const fn humidity(&self) -> u8 {
        self.0[0]
    }

    /// Relative humidity, fractional part.
    pub const fn humidity_fraction(&self) -> u8 {
        self.0[1]
    }

    /// Temperature, integer part, in degrees Celsius.
    pub const fn temperature(&self) -> u8 {
        self.0[2]
    }

    /// Temperature, fractional part.
    pub const fn temperature_fraction(&self) -> u8 {
        self.0[3]
    }

    /// Checksum byte as transmitted.
    pub const fn checksum(&self) -> u8 {
        self.0[4]
    }

    /// Sum of the four data bytes, modulo 256.
    pub fn expected_checksum(&self) -> u8 {
        self.0[..4].iter().fold(0u8, |sum, v| sum.wrapping_add(*v))
    }

    /// Returns `true` if the transmitted checksum matches the data bytes.
    pub fn is_checksum_valid(&self) -> bool {
        self.expected_checksum() == self.checksum()
    }

    /// Sets frame bit `index` (0..40), most significant bit of each byte first.
    pub(crate) fn set_bit(&mut self, index: usize) {
        self.0[index / 8] |= 1 << (7 - (index % 8));
    }
}

/// Decodes one bit from the width of its high pulse.
///
/// A pulse exactly `threshold_us` long decodes as `0`.
pub const fn classify_pulse(width_us: u32, threshold_us: u32) -> bool {
    width_us > threshold_us
}
