//! Robot behaviours, one per task
pub mod bumper_monitor;
pub mod mastermind;
pub mod person_detector;
pub mod thermal_sampler;
