//! Mailbox
//!
//! Single-slot, last-write-wins message cell used for all inter-task signaling.
//! A mailbox is either empty or holds exactly one value; a new `put` silently
//! replaces anything unread. That makes it a level-triggered flag or a one-shot
//! message, never an event queue.
//!
//! Built on an embassy-sync [`Signal`] guarded by a critical section, so `get`
//! is atomic with respect to concurrent `any`/`get` calls from other tasks.
//! Every mailbox in the robot has one writer and one reader, except the
//! front-bumper flag which the bumper monitor peeks and the mastermind consumes.
//!
//! # Usage
//! ```rust
//! use scroomba::system::mailbox::Mailbox;
//!
//! static FLAG: Mailbox<u8> = Mailbox::new();
//!
//! FLAG.put(1);
//! FLAG.put(2);
//! assert_eq!(FLAG.get(), Ok(2));
//! assert!(FLAG.is_empty());
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::system::error::{Error, Result};

/// Single-slot message cell
pub struct Mailbox<T> {
    slot: Signal<CriticalSectionRawMutex, T>,
}

impl<T> Mailbox<T> {
    /// Create an empty mailbox
    pub const fn new() -> Self {
        Self { slot: Signal::new() }
    }

    /// Store a value, replacing any unread one
    pub fn put(&self, value: T) {
        self.slot.signal(value);
    }

    /// Store a value only if the slot is empty
    ///
    /// Returns whether the value was stored. Only the single writer of a
    /// mailbox may use this: the check and the store are two steps, and a reader
    /// emptying the slot in between only makes the writer skip one round.
    pub fn put_if_empty(&self, value: T) -> bool {
        if self.any() {
            return false;
        }
        self.put(value);
        true
    }

    /// Whether a value is waiting, without consuming it
    pub fn any(&self) -> bool {
        self.slot.signaled()
    }

    /// Whether the slot is empty
    pub fn is_empty(&self) -> bool {
        !self.any()
    }

    /// Take the stored value, leaving the mailbox empty
    pub fn get(&self) -> Result<T> {
        self.slot.try_take().ok_or(Error::MailboxEmpty)
    }

    /// Discard any stored value
    pub fn clear(&self) {
        self.slot.reset();
    }

    /// Wait until a value is stored and take it
    pub async fn wait(&self) -> T {
        self.slot.wait().await
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn new_mailbox_is_empty() {
        let mailbox: Mailbox<u8> = Mailbox::new();
        assert!(!mailbox.any());
        assert!(mailbox.is_empty());
        assert_eq!(mailbox.get(), Err(Error::MailboxEmpty));
    }

    #[test]
    fn last_write_wins() {
        let mailbox = Mailbox::new();
        mailbox.put(3u8);
        mailbox.put(4u8);
        assert!(mailbox.any());
        assert_eq!(mailbox.get(), Ok(4));
        assert!(mailbox.is_empty());
        assert_eq!(mailbox.get(), Err(Error::MailboxEmpty));
    }

    #[test]
    fn any_does_not_consume() {
        let mailbox = Mailbox::new();
        mailbox.put(7u8);
        assert!(mailbox.any());
        assert!(mailbox.any());
        assert_eq!(mailbox.get(), Ok(7));
    }

    #[test]
    fn put_if_empty_keeps_unread_value() {
        let mailbox = Mailbox::new();
        assert!(mailbox.put_if_empty(1u8));
        assert!(!mailbox.put_if_empty(2u8));
        assert_eq!(mailbox.get(), Ok(1));
        assert!(mailbox.put_if_empty(2u8));
        assert_eq!(mailbox.get(), Ok(2));
    }

    #[test]
    fn clear_discards_value() {
        let mailbox = Mailbox::new();
        mailbox.put(());
        mailbox.clear();
        assert!(mailbox.is_empty());
        // clearing an empty mailbox is harmless
        mailbox.clear();
        assert!(mailbox.is_empty());
    }

    #[test]
    fn wait_takes_pending_value() {
        let mailbox = Mailbox::new();
        mailbox.put(9u8);
        assert_eq!(block_on(mailbox.wait()), 9);
        assert!(mailbox.is_empty());
    }

    #[test]
    fn shared_between_threads() {
        static SHARED: Mailbox<u32> = Mailbox::new();
        let writer = std::thread::spawn(|| {
            for i in 0..100 {
                SHARED.put(i);
            }
        });
        writer.join().unwrap();
        assert_eq!(SHARED.get(), Ok(99));
    }
}
