//! Core system components shared by all tasks
pub mod amg88xx;
pub mod config;
pub mod direction;
pub mod error;
pub mod frame;
pub mod mailbox;
pub mod peripheral;
pub mod wiring;
