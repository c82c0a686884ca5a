use chrono::{Local, Timelike};

/// Source of the hour of day used by the off-peak surge rule.
pub trait Clock {
    fn hour(&self) -> u32;
}

/// Local wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn hour(&self) -> u32 {
        Local::now().hour()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.0
    }
}
