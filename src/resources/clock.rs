use chrono::Utc;
use mockall::automock;

/// Time source returning fractional seconds since the Unix epoch.
#[automock]
pub trait Clock {
    fn now_seconds(&self) -> f64;
}

pub struct WallClock;

impl Clock for WallClock {
    fn now_seconds(&self) -> f64 {
        Utc::now().timestamp_micros() as f64 / 1_000_000.0
    }
}
