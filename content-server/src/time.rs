use time::{Date, OffsetDateTime};

pub trait TimeSource {
    /// The day review dates are counted back from.
    fn today(&self) -> Date;
}

#[derive(Clone)]
pub struct SystemTime {}

impl TimeSource for SystemTime {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().date()
    }
}

/// Pins the reference day, so a static build renders the same review dates on every run.
#[derive(Clone)]
pub struct FixedTime {
    pub date: Date,
}

impl TimeSource for FixedTime {
    fn today(&self) -> Date {
        self.date
    }
}
