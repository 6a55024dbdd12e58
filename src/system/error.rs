//! System Errors
//!
//! One error type for the whole core. Nothing here is ever propagated past a
//! task: mailbox misses are absorbed, sensor init failures park the task that
//! hit them and invalid controller states heal back to `Init`.

use core::fmt;

/// Result type used throughout the crate
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by the robot core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Read from a mailbox that holds no value
    MailboxEmpty,
    /// A sensor did not come up at boot
    SensorInit,
    /// Bus transfer failed after the sensor was initialized
    Bus,
    /// Controller state code outside the defined set
    InvalidControllerState(u8),
    /// Direction code outside the shared encoding
    InvalidDirection(u8),
    /// Motor driver rejected a command
    Motor,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MailboxEmpty => f.write_str("mailbox is empty"),
            Error::SensorInit => f.write_str("sensor failed to initialize"),
            Error::Bus => f.write_str("bus transfer failed"),
            Error::InvalidControllerState(code) => {
                write!(f, "invalid controller state code {}", code)
            }
            Error::InvalidDirection(code) => write!(f, "invalid direction code {}", code),
            Error::Motor => f.write_str("motor driver error"),
        }
    }
}
