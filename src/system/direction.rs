//! Directions and motor commands
//!
//! The numeric direction encoding is shared by the person detector, the
//! mastermind, the bumper flags and the motor actuator:
//!
//! | Direction | Code |
//! |-----------|------|
//! | Stop      | 0    |
//! | Forward   | 1    |
//! | Reverse   | 2    |
//! | Left      | 3    |
//! | Right     | 4    |
//!
//! The actuator never sees `Stop`. A stop is `Forward` at zero power, so a
//! [`MotorCommand`] always carries a direction together with its power.

use crate::system::error::{Error, Result};

/// Direction in the shared numeric encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    Stop = 0,
    /// Straight ahead, also the detector's "middle" bucket
    Forward = 1,
    Reverse = 2,
    Left = 3,
    Right = 4,
}

impl Direction {
    /// Numeric code of this direction
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a numeric direction code
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Direction::Stop),
            1 => Ok(Direction::Forward),
            2 => Ok(Direction::Reverse),
            3 => Ok(Direction::Left),
            4 => Ok(Direction::Right),
            other => Err(Error::InvalidDirection(other)),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Direction::from_code(code)
    }
}

/// Directions the motor actuator accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveDirection {
    Forward,
    Reverse,
    Left,
    Right,
}

impl From<DriveDirection> for Direction {
    fn from(direction: DriveDirection) -> Self {
        match direction {
            DriveDirection::Forward => Direction::Forward,
            DriveDirection::Reverse => Direction::Reverse,
            DriveDirection::Left => Direction::Left,
            DriveDirection::Right => Direction::Right,
        }
    }
}

/// Maximum power value (full duty cycle)
pub const POWER_MAX: u8 = 255;

/// Command for the motor actuator: a direction together with its power
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorCommand {
    pub direction: DriveDirection,
    /// Duty cycle, 0-255
    pub power: u8,
}

impl MotorCommand {
    /// Standing still
    pub const STOP: MotorCommand = MotorCommand::new(DriveDirection::Forward, 0);

    pub const fn new(direction: DriveDirection, power: u8) -> Self {
        Self { direction, power }
    }

    /// Build a command from a shared-encoding direction
    ///
    /// `Stop` becomes `Forward` at zero power regardless of `power`.
    pub const fn from_direction(direction: Direction, power: u8) -> Self {
        match direction {
            Direction::Stop => Self::STOP,
            Direction::Forward => Self::new(DriveDirection::Forward, power),
            Direction::Reverse => Self::new(DriveDirection::Reverse, power),
            Direction::Left => Self::new(DriveDirection::Left, power),
            Direction::Right => Self::new(DriveDirection::Right, power),
        }
    }

    /// Signed track speeds in percent (-100 to 100) as `(left, right)`
    ///
    /// Turns are executed in place: the inner track runs backward.
    pub fn track_speeds(&self) -> (i8, i8) {
        let speed = (self.power as u16 * 100 / POWER_MAX as u16) as i8;
        match self.direction {
            DriveDirection::Forward => (speed, speed),
            DriveDirection::Reverse => (-speed, -speed),
            DriveDirection::Left => (-speed, speed),
            DriveDirection::Right => (speed, -speed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_shared_encoding() {
        assert_eq!(Direction::Stop.code(), 0);
        assert_eq!(Direction::Forward.code(), 1);
        assert_eq!(Direction::Reverse.code(), 2);
        assert_eq!(Direction::Left.code(), 3);
        assert_eq!(Direction::Right.code(), 4);
    }

    #[test]
    fn decode_rejects_unknown_codes() {
        for code in 0..=4u8 {
            assert_eq!(Direction::from_code(code).map(Direction::code), Ok(code));
        }
        assert_eq!(Direction::try_from(5), Err(Error::InvalidDirection(5)));
        assert_eq!(Direction::try_from(255), Err(Error::InvalidDirection(255)));
    }

    #[test]
    fn stop_is_forward_at_zero_power() {
        let stop = MotorCommand::from_direction(Direction::Stop, 125);
        assert_eq!(stop, MotorCommand::new(DriveDirection::Forward, 0));
        assert_eq!(stop.track_speeds(), (0, 0));
    }

    #[test]
    fn directions_keep_power() {
        assert_eq!(
            MotorCommand::from_direction(Direction::Left, 125),
            MotorCommand::new(DriveDirection::Left, 125)
        );
        assert_eq!(
            MotorCommand::from_direction(Direction::Reverse, 125),
            MotorCommand::new(DriveDirection::Reverse, 125)
        );
    }

    #[test]
    fn track_speeds_turn_in_place() {
        assert_eq!(MotorCommand::new(DriveDirection::Forward, 255).track_speeds(), (100, 100));
        assert_eq!(MotorCommand::new(DriveDirection::Reverse, 255).track_speeds(), (-100, -100));
        // 150 * 100 / 255 = 58
        assert_eq!(MotorCommand::new(DriveDirection::Left, 150).track_speeds(), (-58, 58));
        assert_eq!(MotorCommand::new(DriveDirection::Right, 125).track_speeds(), (49, -49));
    }
}
