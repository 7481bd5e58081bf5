// src/application/ports/time.rs
use chrono::{DateTime, NaiveDate, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date stamped on drafts that do not carry one.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
