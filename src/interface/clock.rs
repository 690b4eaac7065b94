use chrono::{DateTime, Utc};

/// A source of the current time, used to compute search date floors.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Sync + Send {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}
