//! Scroomba robot core
//!
//! Hardware-independent decision making for a small tracked robot that hunts a
//! warm body with an 8x8 thermal array and backs away when its bumpers hit
//! something.
//!
//! - [`system`]: mailboxes, shared encodings, configuration, errors and the
//!   collaborator traits the firmware implements
//! - [`behavior`]: the components that run as tasks (person detector,
//!   mastermind, bumper monitors, thermal sampler)
//!
//! The firmware binary (`rp` feature) wires these into embassy tasks.

#![cfg_attr(not(test), no_std)]

// must stay first so the logging macros are visible to all other modules
mod fmt;

pub mod behavior;
pub mod system;

pub use system::error::{Error, Result};
