//! Compiled-in configuration
//!
//! The robot has no external configuration surface. Every tunable lives in one
//! of these structs with a `DEFAULT` constant matching the reference hardware;
//! tests build their own values to single-step components deterministically.

use embassy_time::Duration;

use crate::system::direction::Direction;
use crate::system::frame::PIXEL_COUNT;

/// Person detector tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    /// Frames averaged into the ambient baseline
    pub calibration_frames: u16,
    /// Rise above ambient (°C) that counts as a person
    pub threshold: f32,
    /// Peak indices below this are to the robot's right
    pub right_edge: usize,
    /// Peak indices at or above this are to the robot's left
    pub left_edge: usize,
    /// Delay between detector cycles
    pub period: Duration,
}

impl DetectorConfig {
    pub const DEFAULT: DetectorConfig = DetectorConfig {
        calibration_frames: 50,
        threshold: 3.0,
        right_edge: 16,
        left_edge: 48,
        period: Duration::from_millis(20),
    };

    /// Map a cell index to the direction the person is in
    pub fn classify(&self, index: usize) -> Direction {
        debug_assert!(index < PIXEL_COUNT);
        if index < self.right_edge {
            Direction::Right
        } else if index >= self.left_edge {
            Direction::Left
        } else {
            Direction::Forward
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Mastermind tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MastermindConfig {
    /// Delay between controller cycles
    pub cycle: Duration,
    /// Power while steering toward a person
    pub cruise_power: u8,
    /// Power while backing off an obstacle
    pub reverse_power: u8,
    /// Power of the forward nudge that releases the back bumper
    pub nudge_power: u8,
    /// How long the nudge runs
    pub nudge_settle: Duration,
    /// Standstill after the nudge before hunting resumes
    pub stop_settle: Duration,
}

impl MastermindConfig {
    pub const DEFAULT: MastermindConfig = MastermindConfig {
        cycle: Duration::from_millis(10),
        cruise_power: 125,
        reverse_power: 125,
        nudge_power: 150,
        nudge_settle: Duration::from_millis(500),
        stop_settle: Duration::from_millis(500),
    };
}

impl Default for MastermindConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Bumper monitor tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BumperConfig {
    /// Value raised in the flag mailbox when the contact closes
    pub tag: Direction,
    /// Delay between polls
    pub poll: Duration,
    /// Extra delay while the previous flag is still unconsumed
    pub backoff: Duration,
}

impl BumperConfig {
    /// Front bumper: asks the mastermind to reverse
    pub const FRONT: BumperConfig = BumperConfig {
        tag: Direction::Reverse,
        poll: Duration::from_millis(50),
        backoff: Duration::from_millis(500),
    };

    /// Back bumper: asks the mastermind to stop reversing
    pub const BACK: BumperConfig = BumperConfig {
        tag: Direction::Stop,
        poll: Duration::from_millis(100),
        backoff: Duration::from_millis(500),
    };
}

/// Thermal sampler tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalConfig {
    /// Delay between frames
    pub period: Duration,
    /// Settle time after sensor init before the first frame
    pub boot_delay: Duration,
}

impl ThermalConfig {
    pub const DEFAULT: ThermalConfig = ThermalConfig {
        period: Duration::from_millis(100),
        boot_delay: Duration::from_millis(100),
    };
}

impl Default for ThermalConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
