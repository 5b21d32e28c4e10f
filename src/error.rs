use core::fmt;

/// Possible errors from the DHT11 driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// The line did not reach the expected level within the poll budget.
    ///
    /// A sensor that is absent or stuck also reports this.
    Timeout,
    /// Checksum did not match the received data.
    ///
    /// Only returned when [`Config::verify_checksum`](crate::Config::verify_checksum) is set.
    ChecksumMismatch,
    /// Error from the GPIO line (input/output/mode switch).
    PinError(E),
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}

impl<E: fmt::Debug> fmt::Display for DhtError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("timed out waiting for a line transition"),
            Self::ChecksumMismatch => f.write_str("frame checksum mismatch"),
            Self::PinError(e) => write!(f, "line error: {e:?}"),
        }
    }
}
