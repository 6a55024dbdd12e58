//! Task wiring
//!
//! Every mailbox the robot uses, in one place. The firmware keeps a single
//! `static` instance; tests build their own. Components never reach for these
//! directly: each constructor takes exactly the handles it reads or writes, so
//! the producer/consumer relationships are visible at the call site.
//!
//! | Mailbox        | Writer          | Reader(s)                          |
//! |----------------|-----------------|------------------------------------|
//! | `frames`       | thermal sampler | person detector                    |
//! | `direction`    | person detector | mastermind (detector clears it)    |
//! | `front_bumper` | front monitor   | mastermind (monitor peeks)         |
//! | `back_bumper`  | back monitor    | mastermind (monitor peeks)         |
//! | `motor`        | mastermind      | motor actuator                     |
//! | `stop_hunt`    | mastermind      | person detector (clears on reset)  |
//! | `reset`        | mastermind      | person detector                    |

use crate::behavior::mastermind::MastermindLinks;
use crate::behavior::person_detector::DetectorLinks;
use crate::system::direction::{Direction, MotorCommand};
use crate::system::frame::ThermalFrame;
use crate::system::mailbox::Mailbox;

/// All inter-task mailboxes
pub struct Mailboxes {
    pub frames: Mailbox<ThermalFrame>,
    pub direction: Mailbox<Direction>,
    pub front_bumper: Mailbox<Direction>,
    pub back_bumper: Mailbox<Direction>,
    pub motor: Mailbox<MotorCommand>,
    pub stop_hunt: Mailbox<()>,
    pub reset: Mailbox<()>,
}

impl Mailboxes {
    pub const fn new() -> Self {
        Self {
            frames: Mailbox::new(),
            direction: Mailbox::new(),
            front_bumper: Mailbox::new(),
            back_bumper: Mailbox::new(),
            motor: Mailbox::new(),
            stop_hunt: Mailbox::new(),
            reset: Mailbox::new(),
        }
    }

    /// Handles for the person detector
    pub fn detector_links(&self) -> DetectorLinks<'_> {
        DetectorLinks {
            frames: &self.frames,
            direction: &self.direction,
            stop_hunt: &self.stop_hunt,
            reset: &self.reset,
        }
    }

    /// Handles for the mastermind
    pub fn mastermind_links(&self) -> MastermindLinks<'_> {
        MastermindLinks {
            direction: &self.direction,
            front_bumper: &self.front_bumper,
            back_bumper: &self.back_bumper,
            motor: &self.motor,
            stop_hunt: &self.stop_hunt,
            reset: &self.reset,
        }
    }
}

impl Default for Mailboxes {
    fn default() -> Self {
        Self::new()
    }
}
