use chrono::{Local, NaiveDate};

/// Date provider seam - injected so tests can pin the board to any day
/// without waiting for real time.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Real clock: today's local calendar date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Whole days between the Unix epoch and this calendar date. Drives the
/// daily selection: one stable integer per local day.
pub fn day_index(date: NaiveDate) -> i64 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch date is valid");
    (date - epoch).num_days()
}

/// Cache key form of a date: `YYYY-MM-DD`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_day_zero() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(day_index(epoch), 0);
    }

    #[test]
    fn day_index_counts_whole_days() {
        let date = NaiveDate::from_ymd_opt(1970, 1, 11).unwrap();
        assert_eq!(day_index(date), 10);

        let modern = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(day_index(modern), 20672);
    }

    #[test]
    fn consecutive_days_differ_by_one() {
        let d1 = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(day_index(d2), day_index(d1) + 1);
    }

    #[test]
    fn date_key_is_iso_formatted() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(date_key(date), "2026-08-07");
    }

    #[test]
    fn fixed_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
