//! Person Detection Task
//!
//! Runs the person detector on a short fixed period so resets and suppression
//! are picked up promptly between frames.

use defmt::info;
use embassy_time::Timer;
use scroomba::behavior::person_detector::PersonDetector;
use scroomba::system::config::DetectorConfig;
use scroomba::system::wiring::Mailboxes;

#[embassy_executor::task]
pub async fn person_detect(mailboxes: &'static Mailboxes) {
    let config = DetectorConfig::DEFAULT;
    let mut detector = PersonDetector::new(config, mailboxes.detector_links());
    info!("person detector started, calibrating over {} frames", config.calibration_frames);

    loop {
        detector.cycle();
        Timer::after(config.period).await;
    }
}
