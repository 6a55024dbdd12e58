//! Mastermind Task
//!
//! Steps the behavioural state machine on a fixed short cycle. The reset
//! maneuver waits inside a step using the embassy delay.

use defmt::info;
use embassy_time::{Delay, Timer};
use scroomba::behavior::mastermind::Mastermind;
use scroomba::system::config::MastermindConfig;
use scroomba::system::wiring::Mailboxes;

#[embassy_executor::task]
pub async fn mastermind(mailboxes: &'static Mailboxes) {
    let config = MastermindConfig::DEFAULT;
    let mut mastermind = Mastermind::new(config, mailboxes.mastermind_links(), Delay);
    info!("mastermind started");

    loop {
        mastermind.step().await;
        Timer::after(config.cycle).await;
    }
}
