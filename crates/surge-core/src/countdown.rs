use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running,
    Complete,
}

/// Remaining-time model behind the timer dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: Duration,
    remaining: Duration,
}

impl Countdown {
    /// A zero duration counts down from one minute, the input's minimum.
    pub fn from_minutes(minutes: u32) -> Self {
        let total = Duration::from_secs(u64::from(minutes.max(1)) * 60);
        Self {
            total,
            remaining: total,
        }
    }

    pub fn tick(&mut self, elapsed: Duration) -> CountdownState {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.state()
    }

    pub fn state(&self) -> CountdownState {
        if self.remaining.is_zero() {
            CountdownState::Complete
        } else {
            CountdownState::Running
        }
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// `MM:SS`, rounding partial seconds up so `00:00` only shows when done
    pub fn label(&self) -> String {
        let secs = self.remaining.as_millis().div_ceil(1000) as u64;
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    pub fn fraction_remaining(&self) -> f64 {
        self.remaining.as_secs_f64() / self.total.as_secs_f64()
    }
}
