//! Log record assembled once per sampling interval.
//!
//! The DHT11 fills two fields of the record; the rest come from analog inputs
//! sampled elsewhere. A failed DHT11 read leaves its fields at the previous
//! values so a single missed edge does not blank the log.

use core::fmt::{self, Write};

use crate::dht11::Reading;
use crate::error::DhtError;

/// Column names, in the order [`LogRecord::write_csv`] writes them.
pub const CSV_HEADER: &str =
    "millis,type,gsr,bodyTemp,envTempDigi,envTempAnalog,envHumidity,envLumi,envSound";

/// Field separator used in CSV rows.
pub const CSV_SEPARATOR: char = ',';

/// Line terminator written after every CSV row.
pub const CSV_LINE_END: &str = "\r\n";

/// Number of records buffered before they are flushed to storage.
pub const RECORD_CACHE_LEN: usize = 32;

/// Where the record was taken.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnvironmentKind {
    #[default]
    Station,
    Tunnel,
}

impl EnvironmentKind {
    /// Single character tag written to the log.
    pub const fn as_char(self) -> char {
        match self {
            EnvironmentKind::Station => 'S',
            EnvironmentKind::Tunnel => 'T',
        }
    }

    /// Switches between station and tunnel.
    pub const fn toggled(self) -> Self {
        match self {
            EnvironmentKind::Station => EnvironmentKind::Tunnel,
            EnvironmentKind::Tunnel => EnvironmentKind::Station,
        }
    }
}

/// One row of the log.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogRecord {
    /// Milliseconds since the recording started.
    pub millis: u32,
    /// Station or tunnel, toggled by the mode button.
    pub kind: EnvironmentKind,
    /// Skin conductance, normalized to 0..999.
    pub gsr: i16,
    /// Body thermistor, degrees Celsius.
    pub body_temperature: i16,
    /// DHT11 temperature, degrees Celsius.
    pub external_temperature: i16,
    /// Environment thermistor, degrees Celsius.
    pub external_temperature_analog: i16,
    /// DHT11 relative humidity, percent.
    pub external_humidity: i16,
    /// Light level, normalized to 0..999.
    pub luminance: i16,
    /// Sound pressure level, normalized to 0..999.
    pub sound_pressure: i16,
}

impl LogRecord {
    /// Creates a record with every sensor field zeroed.
    pub fn new(millis: u32, kind: EnvironmentKind) -> Self {
        LogRecord {
            millis,
            kind,
            ..Default::default()
        }
    }

    /// Copies a DHT11 reading into the record.
    ///
    /// Returns `false` and keeps the previous values if the read failed.
    pub fn apply_environment<E>(&mut self, result: &Result<Reading, DhtError<E>>) -> bool {
        match result {
            Ok(reading) => {
                self.external_temperature = i16::from(reading.temperature);
                self.external_humidity = i16::from(reading.humidity);
                true
            }
            Err(_) => {
                debug!("dht11 read failed, keeping previous environment values");
                false
            }
        }
    }

    /// Writes the record as one CSV row (no line terminator), in [`CSV_HEADER`] order.
    pub fn write_csv<W: Write>(&self, w: &mut W) -> fmt::Result {
        write!(w, "{}", self.millis)?;
        w.write_char(CSV_SEPARATOR)?;
        w.write_char(self.kind.as_char())?;
        for value in [
            self.gsr,
            self.body_temperature,
            self.external_temperature,
            self.external_temperature_analog,
            self.external_humidity,
            self.luminance,
            self.sound_pressure,
        ] {
            w.write_char(CSV_SEPARATOR)?;
            write!(w, "{value}")?;
        }
        Ok(())
    }
}

/// Records waiting to be written to storage.
///
/// Storage writes are slow and batched: records are pushed once per sampling
/// interval and flushed together once the cache fills up.
#[derive(Debug)]
pub struct RecordCache {
    records: [LogRecord; RECORD_CACHE_LEN],
    len: usize,
}

impl Default for RecordCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        RecordCache {
            records: [LogRecord::default(); RECORD_CACHE_LEN],
            len: 0,
        }
    }

    /// Appends a record.
    ///
    /// Hands the record back if the cache is already full.
    pub fn push(&mut self, record: LogRecord) -> Result<(), LogRecord> {
        if self.is_full() {
            warn!("record cache full, dropping record at {} ms", record.millis);
            return Err(record);
        }
        self.records[self.len] = record;
        self.len += 1;
        Ok(())
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is waiting to be flushed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` once [`RECORD_CACHE_LEN`] records are cached.
    pub fn is_full(&self) -> bool {
        self.len == RECORD_CACHE_LEN
    }

    /// Cached records in push order.
    pub fn records(&self) -> &[LogRecord] {
        &self.records[..self.len]
    }

    /// Writes every cached record as a CSV row, then empties the cache.
    ///
    /// The cache is left untouched if the writer fails, so the records can be
    /// flushed again.
    pub fn flush<W: Write>(&mut self, w: &mut W) -> fmt::Result {
        for record in self.records() {
            record.write_csv(w)?;
            w.write_str(CSV_LINE_END)?;
        }
        debug!("flushed {} records", self.len);
        self.len = 0;
        Ok(())
    }
}
