use chrono::{Local, Timelike};

/// Source of the wall-clock hour used by the day/night message.
///
/// This is always the caller's clock, never the timezone of the location
/// being displayed.
pub trait Clock: Send + Sync {
    /// Hour of day, 0–23.
    fn hour(&self) -> u32;
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// A clock stuck at one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.0
    }
}
