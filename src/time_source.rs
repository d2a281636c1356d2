use std::time::Instant;

use chrono::{Local, Timelike};

/// Wall-clock time as the clock face displays it. `hour` honors the active
/// 12/24-hour format (1-12 in 12-hour mode).
pub trait TimeSource {
    fn hour(&self) -> u8;
    fn minute(&self) -> u8;
    fn second(&self) -> u8;
    fn is_pm(&self) -> bool;
    fn is_24_hour(&self) -> bool;
    fn set_24_hour(&mut self, enabled: bool);
}

/// Monotonic clock used for animation timing. Injected so tests can drive
/// animations deterministically.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// System local time via chrono.
#[derive(Debug, Clone)]
pub struct LocalTime {
    twenty_four_hour: bool,
}

impl LocalTime {
    pub fn new(twenty_four_hour: bool) -> Self {
        LocalTime { twenty_four_hour }
    }
}

impl TimeSource for LocalTime {
    fn hour(&self) -> u8 {
        let now = Local::now();
        if self.twenty_four_hour {
            now.hour() as u8
        } else {
            now.hour12().1 as u8
        }
    }

    fn minute(&self) -> u8 {
        Local::now().minute() as u8
    }

    fn second(&self) -> u8 {
        Local::now().second() as u8
    }

    fn is_pm(&self) -> bool {
        Local::now().hour12().0
    }

    fn is_24_hour(&self) -> bool {
        self.twenty_four_hour
    }

    fn set_24_hour(&mut self, enabled: bool) {
        self.twenty_four_hour = enabled;
    }
}

/// The process monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_time_values_are_in_range() {
        let time = LocalTime::new(true);
        assert!(time.hour() < 24);
        assert!(time.minute() < 60);
        assert!(time.second() < 60);
    }

    #[test]
    fn twelve_hour_mode_never_exceeds_twelve() {
        let time = LocalTime::new(false);
        let hour = time.hour();
        assert!((1..=12).contains(&hour));
    }
}
