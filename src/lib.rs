//! DHT11 Sensor Driver for an Embedded Data Logger
//!
//! This crate decodes the DHT11 single-wire protocol by bit-banging a GPIO
//! line, built on top of the [`embedded-hal`] traits, and provides the log
//! record the readings end up in.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Pulse widths measured against a microsecond clock, edge waits bounded by
//!   a configurable poll budget
//! - Designed for `no_std` environments
//! - Optional logging support via `defmt`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access, plus the crate's own
//!   [`Line`] trait for switching line direction
//! - [`DelayNs`] for the start signal
//!
//! A [`MicrosClock`] is also required; any `FnMut() -> u32` returning a
//! free-running microsecond count works.
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and emits driver logs through `defmt`
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod config;
pub mod dht11;
pub mod error;
pub mod frame;
pub mod line;
pub mod record;

pub use config::Config;
pub use dht11::{Dht11, Reading};
pub use error::DhtError;
pub use frame::Frame;
pub use line::{Line, MicrosClock, Mode, OpenDrain};
pub use record::{EnvironmentKind, LogRecord, RecordCache};
