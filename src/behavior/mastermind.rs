//! Mastermind
//!
//! The robot's behavioural state machine. It fuses the person direction and
//! both bumper flags into motor commands, and tells the person detector when to
//! stop hunting and when to recalibrate.
//!
//! # States
//! ```text
//! Init -> Hunting -> Reversing -> Resetting -> Hunting -> ...
//! ```
//! - **Init**: stop the motors, start hunting. Entered once at startup, or when
//!   an unknown state code has to be recovered from.
//! - **Hunting**: steer toward the latest direction. A front bumper hit
//!   suppresses the detector and switches to reversing.
//! - **Reversing**: back up every cycle until the back bumper confirms
//!   clearance. Repeated front hits are drained and ignored.
//! - **Resetting**: nudge forward to release the back switch, stop, then ask the
//!   detector to recalibrate since the scene has moved. The two waits are fixed
//!   and are not cut short by mailbox activity.

use embedded_hal_async::delay::DelayNs;

use crate::system::config::MastermindConfig;
use crate::system::direction::{Direction, DriveDirection, MotorCommand};
use crate::system::error::{Error, Result};
use crate::system::mailbox::Mailbox;

/// Mastermind states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ControllerState {
    Init = 0,
    Hunting = 1,
    Reversing = 2,
    Resetting = 3,
}

impl TryFrom<u8> for ControllerState {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(ControllerState::Init),
            1 => Ok(ControllerState::Hunting),
            2 => Ok(ControllerState::Reversing),
            3 => Ok(ControllerState::Resetting),
            other => Err(Error::InvalidControllerState(other)),
        }
    }
}

/// Mailboxes the mastermind reads and writes
#[derive(Clone, Copy)]
pub struct MastermindLinks<'a> {
    /// Person direction from the detector (consumed)
    pub direction: &'a Mailbox<Direction>,
    /// Front bumper flag (consumed)
    pub front_bumper: &'a Mailbox<Direction>,
    /// Back bumper flag (consumed)
    pub back_bumper: &'a Mailbox<Direction>,
    /// Commands for the motor actuator
    pub motor: &'a Mailbox<MotorCommand>,
    /// Suppresses the detector while not hunting
    pub stop_hunt: &'a Mailbox<()>,
    /// Asks the detector to recalibrate
    pub reset: &'a Mailbox<()>,
}

/// Behavioural state machine
pub struct Mastermind<'a, D> {
    config: MastermindConfig,
    links: MastermindLinks<'a>,
    delay: D,
    state: ControllerState,
}

impl<'a, D: DelayNs> Mastermind<'a, D> {
    /// Create a mastermind in `Init`
    ///
    /// `delay` times the settle waits of the reset maneuver.
    pub fn new(config: MastermindConfig, links: MastermindLinks<'a>, delay: D) -> Self {
        Self {
            config,
            links,
            delay,
            state: ControllerState::Init,
        }
    }

    /// Current state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Resume from a raw state code
    ///
    /// Unknown codes are logged and recovered by falling back to `Init`.
    pub fn restore_state(&mut self, code: u8) -> ControllerState {
        self.state = match ControllerState::try_from(code) {
            Ok(state) => state,
            Err(e) => {
                error!("internal error: {}, forcing Init", e);
                ControllerState::Init
            }
        };
        self.state
    }

    /// Run one controller cycle and return the state for the next one
    pub async fn step(&mut self) -> ControllerState {
        let next = match self.state {
            ControllerState::Init => self.init(),
            ControllerState::Hunting => self.hunt(),
            ControllerState::Reversing => self.reverse(),
            ControllerState::Resetting => self.reset().await,
        };

        if next != self.state {
            info!("mastermind: {} -> {}", self.state, next);
            self.state = next;
        }
        next
    }

    fn emit(&self, command: MotorCommand) {
        self.links.motor.put(command);
    }

    fn init(&mut self) -> ControllerState {
        self.emit(MotorCommand::STOP);
        ControllerState::Hunting
    }

    fn hunt(&mut self) -> ControllerState {
        if self.links.front_bumper.get().is_ok() {
            self.links.stop_hunt.put(());
            info!("front bumper hit, backing off");
            return ControllerState::Reversing;
        }

        if let Ok(direction) = self.links.direction.get() {
            self.emit(MotorCommand::from_direction(direction, self.config.cruise_power));
        }
        ControllerState::Hunting
    }

    fn reverse(&mut self) -> ControllerState {
        // the detector must stay quiet for the whole maneuver
        if self.links.stop_hunt.is_empty() {
            self.links.stop_hunt.put(());
        }

        // pressed again while already backing off
        self.links.front_bumper.clear();

        if self.links.back_bumper.any() {
            self.emit(MotorCommand::STOP);
            return ControllerState::Resetting;
        }

        self.emit(MotorCommand::new(DriveDirection::Reverse, self.config.reverse_power));
        ControllerState::Reversing
    }

    async fn reset(&mut self) -> ControllerState {
        self.emit(MotorCommand::new(DriveDirection::Forward, self.config.nudge_power));
        self.delay.delay_ms(self.config.nudge_settle.as_millis() as u32).await;

        self.emit(MotorCommand::STOP);
        self.delay.delay_ms(self.config.stop_settle.as_millis() as u32).await;

        self.links.back_bumper.clear();
        self.links.reset.put(());
        ControllerState::Hunting
    }
}
