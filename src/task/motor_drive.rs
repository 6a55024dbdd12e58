//! Motor Drive Task
//!
//! Applies motor commands from the mastermind to a TB6612FNG dual motor driver.
//!
//! Turns are executed in place, with the tracks running in opposite directions.
//! Power 0-255 is scaled to the driver's 0-100 percent duty cycle; zero power
//! lets the tracks coast.

use defmt::{info, warn};
use embassy_rp::gpio::{Level, Output};
use embassy_rp::pwm::{self, Pwm, PwmOutput};
use scroomba::system::direction::{DriveDirection, MotorCommand};
use scroomba::system::error::{Error, Result};
use scroomba::system::mailbox::Mailbox;
use scroomba::system::peripheral::MotorActuator;
use tb6612fng::{DriveCommand, Motor};

use crate::task::resources::MotorDriverResources;

/// We use 10kHz as cheaper DC motors often work better at lower frequencies
const PWM_FREQUENCY_HZ: u32 = 10_000;

type TrackMotor = Motor<Output<'static>, Output<'static>, PwmOutput<'static>>;

/// Both tracks of the robot
struct Tracks {
    left: TrackMotor,
    right: TrackMotor,
    /// Held high for as long as the task runs
    _standby: Output<'static>,
}

impl MotorActuator for Tracks {
    fn drive(&mut self, direction: DriveDirection, power: u8) -> Result<()> {
        let (left, right) = MotorCommand::new(direction, power).track_speeds();
        drive_track(&mut self.left, left)?;
        drive_track(&mut self.right, right)
    }
}

fn drive_track(motor: &mut TrackMotor, speed: i8) -> Result<()> {
    let command = match speed {
        0 => DriveCommand::Stop,
        s if s > 0 => DriveCommand::Forward(s as u8),
        s => DriveCommand::Backward(s.unsigned_abs()),
    };
    motor.drive(command).map_err(|_| Error::Motor)
}

fn pwm_config() -> pwm::Config {
    let clock_freq_hz = embassy_rp::clocks::clk_sys_freq(); // 150MHz

    // Calculate minimum divider needed to keep period under 16-bit limit (65535)
    let divider = ((clock_freq_hz / PWM_FREQUENCY_HZ) / 65535 + 1) as u8;
    let period = (clock_freq_hz / (PWM_FREQUENCY_HZ * divider as u32)) as u16 - 1;

    let mut config = pwm::Config::default();
    config.divider = divider.into();
    config.top = period;
    config
}

#[embassy_executor::task]
pub async fn motor_drive(r: MotorDriverResources, commands: &'static Mailbox<MotorCommand>) {
    let config = pwm_config();

    // motor A, here defined to be the left track
    let left_fwd = Output::new(r.left_forward_pin, Level::Low);
    let left_bckw = Output::new(r.left_backward_pin, Level::Low);
    let (left_pwm, _) = Pwm::new_output_a(r.left_slice, r.left_pwm_pin, config.clone()).split();

    // motor B, here defined to be the right track
    let right_fwd = Output::new(r.right_forward_pin, Level::Low);
    let right_bckw = Output::new(r.right_backward_pin, Level::Low);
    let (_, right_pwm) = Pwm::new_output_b(r.right_slice, r.right_pwm_pin, config).split();

    let left_pwm = left_pwm.expect("left PWM channel A not configured");
    let right_pwm = right_pwm.expect("right PWM channel B not configured");
    let mut tracks = Tracks {
        left: Motor::new(left_fwd, left_bckw, left_pwm).unwrap(),
        right: Motor::new(right_fwd, right_bckw, right_pwm).unwrap(),
        _standby: Output::new(r.standby_pin, Level::High),
    };
    info!("motor driver ready");

    loop {
        let command = commands.wait().await;
        if let Err(e) = tracks.drive(command.direction, command.power) {
            warn!("motor command {} failed: {}", command, e);
        }
    }
}
