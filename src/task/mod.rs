pub mod bumper_monitor;
pub mod mastermind;
pub mod motor_drive;
pub mod person_detect;
pub mod resources;
pub mod thermal_read;
