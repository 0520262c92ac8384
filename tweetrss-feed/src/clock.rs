use chrono::{DateTime, FixedOffset, Local};

/// Where trend batches get their "now" from.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall-clock time in the local zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<FixedOffset> + Send + Sync,
{
    fn now(&self) -> DateTime<FixedOffset> {
        self()
    }
}
