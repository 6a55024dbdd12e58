//! Collaborator interfaces
//!
//! The hardware the core talks to, reduced to what the core needs. The firmware
//! implements these for the real sensors and drivers; tests implement them with
//! scripted fakes.

use crate::system::direction::DriveDirection;
use crate::system::error::Result;
use crate::system::frame::ThermalFrame;

/// Source of 8x8 thermal frames
#[allow(async_fn_in_trait)]
pub trait ThermalSensor {
    /// Bring the sensor up; failure here is fatal for the sampling task
    async fn init(&mut self) -> Result<()>;

    /// Read one complete frame; may block briefly on bus I/O
    async fn read_frame(&mut self) -> Result<ThermalFrame>;
}

/// Digital contact such as a bumper switch
pub trait ContactInput {
    /// Whether the contact is currently closed; never blocks
    fn is_engaged(&mut self) -> bool;
}

/// Drive train
///
/// `drive` must be idempotent: the same command may arrive every control cycle.
pub trait MotorActuator {
    fn drive(&mut self, direction: DriveDirection, power: u8) -> Result<()>;
}
