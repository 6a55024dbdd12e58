//! Robot firmware entry point
//!
//! Initializes the board and spawns one task per component. All tasks share
//! nothing but the mailboxes in [`MAILBOXES`].

#![no_std]
#![no_main]

use crate::task::{
    bumper_monitor::bumper_monitor, mastermind::mastermind, motor_drive::motor_drive,
    person_detect::person_detect, thermal_read::thermal_read,
};
use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_rp::gpio::{Input, Pull};
use scroomba::system::config::BumperConfig;
use scroomba::system::wiring::Mailboxes;
use task::resources::{
    AssignedResources, BackBumperResources, FrontBumperResources, MotorDriverResources,
    ThermalCameraResources,
};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Task implementations
mod task;

/// Inter-task mailboxes
static MAILBOXES: Mailboxes = Mailboxes::new();

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());
    info!("Scroomba starting");

    // Split the resources into separate groups for each task
    let r = split_resources!(p);

    let front = Input::new(r.front_bumper.pin, Pull::Down);
    let back = Input::new(r.back_bumper.pin, Pull::Down);

    // Actuator and safety tasks first, so the robot can always stop
    spawner.spawn(motor_drive(r.motor_driver, &MAILBOXES.motor)).unwrap();
    spawner
        .spawn(bumper_monitor(front, BumperConfig::FRONT, &MAILBOXES.front_bumper))
        .unwrap();
    spawner
        .spawn(bumper_monitor(back, BumperConfig::BACK, &MAILBOXES.back_bumper))
        .unwrap();
    spawner.spawn(mastermind(&MAILBOXES)).unwrap();
    spawner.spawn(person_detect(&MAILBOXES)).unwrap();
    spawner.spawn(thermal_read(r.thermal_camera, &MAILBOXES.frames)).unwrap();
}
