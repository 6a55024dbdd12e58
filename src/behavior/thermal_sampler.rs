//! Thermal Sampler
//!
//! Owns the thermal sensor and posts one frame per period into the frame
//! mailbox. The detector drains that mailbox on its own schedule; a frame it
//! has not picked up yet is simply replaced by the newer one.

use crate::system::error::Result;
use crate::system::frame::ThermalFrame;
use crate::system::mailbox::Mailbox;
use crate::system::peripheral::ThermalSensor;

/// Reads frames from a sensor into the frame mailbox
pub struct ThermalSampler<'a, S> {
    sensor: S,
    frames: &'a Mailbox<ThermalFrame>,
}

impl<'a, S: ThermalSensor> ThermalSampler<'a, S> {
    pub fn new(sensor: S, frames: &'a Mailbox<ThermalFrame>) -> Self {
        Self { sensor, frames }
    }

    /// Bring the sensor up
    ///
    /// An error here is fatal for the sampling task.
    pub async fn start(&mut self) -> Result<()> {
        self.sensor.init().await?;
        info!("thermal sensor ready");
        Ok(())
    }

    /// Read one frame and post it
    ///
    /// A failed read is logged and skipped; the next period retries.
    pub async fn sample(&mut self) -> Result<()> {
        match self.sensor.read_frame().await {
            Ok(frame) => {
                self.frames.put(frame);
                Ok(())
            }
            Err(e) => {
                warn!("thermal read failed: {}", e);
                Err(e)
            }
        }
    }
}
