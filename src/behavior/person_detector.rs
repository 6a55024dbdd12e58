//! Person Detector
//!
//! Turns thermal frames into a coarse direction toward a warm body.
//!
//! # Phases
//! 1. **Calibrating**: the first `calibration_frames` frames are summed per cell
//!    and averaged into the ambient baseline.
//! 2. **Searching**: each frame is compared against the baseline. The first
//!    cell at least `threshold` above ambient marks a detection.
//! 3. **Tracking**: once detected, every frame yields its hottest raw cell,
//!    which is classified into right / forward / left and posted to the
//!    direction mailbox. The peak is re-acquired from scratch every frame.
//!
//! # Control from the mastermind
//! - `stop_hunt` set: frames are still drained so the sampler never stalls,
//!   but no state changes and any pending direction is thrown away.
//! - `reset` pending: back to calibration from scratch; stale suppression and
//!   stale directions are cleared as well.
//!
//! The detector never reports "nobody there". No message means no new
//! information.

use crate::system::config::DetectorConfig;
use crate::system::direction::Direction;
use crate::system::frame::{ThermalFrame, PIXEL_COUNT};
use crate::system::mailbox::Mailbox;

/// Per-cell difference between a frame and the ambient baseline
pub type DifferentialMap = [f32; PIXEL_COUNT];

/// Mailboxes the detector reads and writes
#[derive(Clone, Copy)]
pub struct DetectorLinks<'a> {
    /// Incoming frames (consumed)
    pub frames: &'a Mailbox<ThermalFrame>,
    /// Outgoing directions
    pub direction: &'a Mailbox<Direction>,
    /// Suppression flag raised by the mastermind (peeked, cleared on reset)
    pub stop_hunt: &'a Mailbox<()>,
    /// Reset command from the mastermind (consumed)
    pub reset: &'a Mailbox<()>,
}

/// Hottest cell seen in the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Peak {
    pub index: usize,
    pub temperature: f32,
}

/// What a detector cycle did
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DetectorCycle {
    /// No frame was waiting
    Idle,
    /// Frame drained while suppressed
    Suppressed,
    /// Frame added to the baseline; carries the number of frames so far
    Calibrating(u16),
    /// Last calibration frame; baseline is now averaged
    Calibrated,
    /// Frame checked, nobody above threshold
    Searching,
    /// Person located and direction posted
    Spotted(Direction),
}

/// Thermal person detector
pub struct PersonDetector<'a> {
    config: DetectorConfig,
    links: DetectorLinks<'a>,
    /// Running sum while calibrating, per-cell average afterwards
    ambient: [f32; PIXEL_COUNT],
    calibrated: bool,
    detected: bool,
    count: u16,
    peak: Option<Peak>,
}

impl<'a> PersonDetector<'a> {
    pub fn new(config: DetectorConfig, links: DetectorLinks<'a>) -> Self {
        Self {
            config,
            links,
            ambient: [0.0; PIXEL_COUNT],
            calibrated: false,
            detected: false,
            count: 0,
            peak: None,
        }
    }

    /// Run one detector cycle: honour a pending reset, then process one frame
    pub fn cycle(&mut self) -> DetectorCycle {
        if self.links.reset.get().is_ok() {
            self.reset();
        }

        match self.links.frames.get() {
            Ok(frame) => self.process_frame(&frame),
            Err(_) => DetectorCycle::Idle,
        }
    }

    /// Feed one frame through the detector
    pub fn process_frame(&mut self, frame: &ThermalFrame) -> DetectorCycle {
        if self.links.stop_hunt.any() {
            // not hunting: drop anything that slipped into the direction mailbox
            self.links.direction.clear();
            return DetectorCycle::Suppressed;
        }

        if !self.calibrated {
            return self.calibrate(frame);
        }

        if !self.detected {
            self.search(frame);
        } else {
            self.track(frame, 0);
        }

        match self.peak.take() {
            Some(peak) if self.detected => {
                let direction = self.config.classify(peak.index);
                trace!("person at cell {} ({} C): {}", peak.index, peak.temperature, direction);
                self.links.direction.put(direction);
                DetectorCycle::Spotted(direction)
            }
            _ => DetectorCycle::Searching,
        }
    }

    /// Return to calibration from scratch
    ///
    /// Also clears stale suppression and stale directions, so calling it twice
    /// leaves the same state as calling it once.
    pub fn reset(&mut self) {
        self.ambient = [0.0; PIXEL_COUNT];
        self.calibrated = false;
        self.detected = false;
        self.count = 0;
        self.peak = None;
        self.links.stop_hunt.clear();
        self.links.direction.clear();
        info!("person detector reset, recalibrating");
    }

    /// Difference between `frame` and the ambient baseline
    ///
    /// `None` until calibration has finished.
    pub fn differential(&self, frame: &ThermalFrame) -> Option<DifferentialMap> {
        let ambient = self.ambient()?;
        let mut diff = [0.0; PIXEL_COUNT];
        for ((d, &reading), &base) in diff.iter_mut().zip(frame.cells()).zip(ambient) {
            *d = reading - base;
        }
        Some(diff)
    }

    /// Averaged ambient baseline, available once calibrated
    pub fn ambient(&self) -> Option<&[f32; PIXEL_COUNT]> {
        self.calibrated.then_some(&self.ambient)
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    pub fn is_detected(&self) -> bool {
        self.detected
    }

    /// Frames accumulated toward the baseline so far
    pub fn calibration_count(&self) -> u16 {
        self.count
    }

    fn calibrate(&mut self, frame: &ThermalFrame) -> DetectorCycle {
        for (sum, &reading) in self.ambient.iter_mut().zip(frame.cells()) {
            *sum += reading;
        }
        self.count += 1;

        if self.count < self.config.calibration_frames {
            return DetectorCycle::Calibrating(self.count);
        }

        let frames = self.count as f32;
        for cell in self.ambient.iter_mut() {
            *cell /= frames;
        }
        self.calibrated = true;
        info!("ambient calibrated over {} frames", self.count);
        DetectorCycle::Calibrated
    }

    fn search(&mut self, frame: &ThermalFrame) {
        let Some(ambient) = self.ambient() else {
            return;
        };
        // compare against the raised baseline, a cell exactly at threshold must trigger
        let threshold = self.config.threshold;
        let Some(first) = frame
            .cells()
            .iter()
            .zip(ambient)
            .position(|(&reading, &base)| reading >= base + threshold)
        else {
            return;
        };

        self.detected = true;
        info!("person detected at cell {}", first);
        // the rest of this frame is already tracking
        self.track(frame, first);
    }

    fn track(&mut self, frame: &ThermalFrame, from: usize) {
        let (index, temperature) = frame.hottest_from(from);
        self.peak = Some(Peak { index, temperature });
    }
}
