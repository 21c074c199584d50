use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Source of the current moment for id assignment and creation stamps.
///
/// The running application injects [`SystemClock`]; tests supply a fixed
/// implementation so generated ids and timestamps are deterministic.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds since the Unix epoch; the raw material for entry ids.
    fn timestamp_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// The current moment as an ISO 8601 timestamp string (UTC, millisecond
    /// precision), the form stored in each entry's `createdAt`.
    fn iso_now(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// The current calendar date, used by the no-future-dates rule and to
    /// pre-fill the date field.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock implementation used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
