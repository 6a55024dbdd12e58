//! Bumper Monitor Task
//!
//! Polls a limit switch and raises its flag for the mastermind. One task
//! instance runs per bumper.
//!
//! # Operation
//! - Switch pulls the pin high when pressed
//! - Polled rather than edge-triggered; the flag is level-triggered anyway
//! - Backs off while the previous flag is still unconsumed

use embassy_rp::gpio::Input;
use embassy_time::Timer;
use scroomba::behavior::bumper_monitor::BumperMonitor;
use scroomba::system::config::BumperConfig;
use scroomba::system::direction::Direction;
use scroomba::system::mailbox::Mailbox;
use scroomba::system::peripheral::ContactInput;

/// Limit switch on a GPIO input
struct LimitSwitch(Input<'static>);

impl ContactInput for LimitSwitch {
    fn is_engaged(&mut self) -> bool {
        self.0.is_high()
    }
}

#[embassy_executor::task(pool_size = 2)]
pub async fn bumper_monitor(
    pin: Input<'static>,
    config: BumperConfig,
    flag: &'static Mailbox<Direction>,
) {
    let mut monitor = BumperMonitor::new(config, LimitSwitch(pin), flag);

    loop {
        let poll = monitor.poll();
        Timer::after(monitor.pause_for(poll)).await;
    }
}
