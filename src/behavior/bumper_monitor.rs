//! Bumper Monitor
//!
//! Polls one bumper contact and raises a level-triggered flag for the
//! mastermind while the contact is closed.
//!
//! An unconsumed flag is never overwritten: the monitor backs off until the
//! mastermind has taken it, so a "stop" cannot get lost mid-maneuver.

use embassy_time::Duration;

use crate::system::config::BumperConfig;
use crate::system::direction::Direction;
use crate::system::mailbox::Mailbox;
use crate::system::peripheral::ContactInput;

/// Outcome of one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BumperPoll {
    /// Contact open, nothing raised
    Clear,
    /// Contact closed, flag raised
    Raised,
    /// Previous flag still unconsumed
    Pending,
}

/// Monitor for a single bumper contact
pub struct BumperMonitor<'a, C> {
    config: BumperConfig,
    contact: C,
    flag: &'a Mailbox<Direction>,
}

impl<'a, C: ContactInput> BumperMonitor<'a, C> {
    pub fn new(config: BumperConfig, contact: C, flag: &'a Mailbox<Direction>) -> Self {
        Self { config, contact, flag }
    }

    /// Check the contact once
    pub fn poll(&mut self) -> BumperPoll {
        if self.flag.any() {
            return BumperPoll::Pending;
        }
        if !self.contact.is_engaged() {
            return BumperPoll::Clear;
        }
        if self.flag.put_if_empty(self.config.tag) {
            debug!("bumper {} raised", self.config.tag);
            BumperPoll::Raised
        } else {
            BumperPoll::Pending
        }
    }

    /// How long to wait before polling again
    pub fn pause_for(&self, poll: BumperPoll) -> Duration {
        match poll {
            BumperPoll::Pending => self.config.backoff + self.config.poll,
            BumperPoll::Clear | BumperPoll::Raised => self.config.poll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Contact that reports a fixed state and counts reads
    struct FakeContact {
        engaged: bool,
        reads: usize,
    }

    impl ContactInput for FakeContact {
        fn is_engaged(&mut self) -> bool {
            self.reads += 1;
            self.engaged
        }
    }

    fn contact(engaged: bool) -> FakeContact {
        FakeContact { engaged, reads: 0 }
    }

    #[test]
    fn open_contact_raises_nothing() {
        let flag = Mailbox::new();
        let mut monitor = BumperMonitor::new(BumperConfig::FRONT, contact(false), &flag);
        assert_eq!(monitor.poll(), BumperPoll::Clear);
        assert!(flag.is_empty());
        assert_eq!(monitor.pause_for(BumperPoll::Clear), Duration::from_millis(50));
    }

    #[test]
    fn closed_contact_raises_tag() {
        let front = Mailbox::new();
        let mut monitor = BumperMonitor::new(BumperConfig::FRONT, contact(true), &front);
        assert_eq!(monitor.poll(), BumperPoll::Raised);
        assert_eq!(front.get(), Ok(Direction::Reverse));

        let back = Mailbox::new();
        let mut monitor = BumperMonitor::new(BumperConfig::BACK, contact(true), &back);
        assert_eq!(monitor.poll(), BumperPoll::Raised);
        assert_eq!(back.get(), Ok(Direction::Stop));
    }

    #[test]
    fn pending_flag_is_not_overwritten() {
        let flag = Mailbox::new();
        flag.put(Direction::Forward);
        let mut monitor = BumperMonitor::new(BumperConfig::BACK, contact(true), &flag);

        assert_eq!(monitor.poll(), BumperPoll::Pending);
        assert_eq!(monitor.contact.reads, 0);
        assert_eq!(monitor.pause_for(BumperPoll::Pending), Duration::from_millis(600));
        assert_eq!(flag.get(), Ok(Direction::Forward));

        // consumed: raised again on the next poll while still pressed
        assert_eq!(monitor.poll(), BumperPoll::Raised);
        assert_eq!(flag.get(), Ok(Direction::Stop));
    }
}
