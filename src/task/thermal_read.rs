//! Thermal Camera Task
//!
//! Brings up the AMG88xx and posts one frame per period into the frame mailbox.
//!
//! A camera that does not come up at boot parks this task for good. The bumper
//! and motor tasks keep running, so the robot can still be stopped safely.

use core::future::pending;

use defmt::{error, info};
use embassy_rp::i2c::{self, I2c};
use embassy_time::Timer;
use scroomba::behavior::thermal_sampler::ThermalSampler;
use scroomba::system::amg88xx::Amg88xx;
use scroomba::system::config::ThermalConfig;
use scroomba::system::frame::ThermalFrame;
use scroomba::system::mailbox::Mailbox;

use crate::task::resources::{Irqs, ThermalCameraResources};

/// I2C bus speed, the AMG88xx supports fast mode
const I2C_FREQUENCY_HZ: u32 = 400_000;

#[embassy_executor::task]
pub async fn thermal_read(r: ThermalCameraResources, frames: &'static Mailbox<ThermalFrame>) {
    let config = ThermalConfig::DEFAULT;

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let bus = I2c::new_async(r.i2c, r.scl_pin, r.sda_pin, Irqs, i2c_config);

    let mut sampler = ThermalSampler::new(Amg88xx::new(bus), frames);
    if let Err(e) = sampler.start().await {
        error!("could not find a valid AMG88xx sensor, check wiring: {}", e);
        pending::<()>().await;
    }

    // let the sensor boot up
    Timer::after(config.boot_delay).await;
    info!("thermal camera streaming");

    loop {
        // failures are logged by the sampler, the next period tries again
        sampler.sample().await.ok();
        Timer::after(config.period).await;
    }
}
