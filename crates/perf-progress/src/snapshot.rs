//! Point-in-time progress figures and their text rendering.

use std::fmt;
use std::time::Duration;

/// Progress of a driving loop at one sampling instant.
///
/// The rate figures are cumulative: they divide the whole elapsed time by
/// the whole processed count, so they converge over a run instead of tracking
/// the instantaneous rate.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    pub processed: u64,
    /// Expected number of items, when known up front.
    pub total: Option<u64>,
    pub elapsed: Duration,
    /// Singular unit name, e.g. "record".
    pub noun: &'static str,
    /// Past participle describing the work, e.g. "written".
    pub verb: &'static str,
}

impl ProgressSnapshot {
    /// Share of `total` already processed, in percent.
    ///
    /// Zero when the total is unknown or zero.
    pub fn percent(&self) -> f64 {
        match self.total {
            Some(total) if total > 0 => self.processed as f64 * 100.0 / total as f64,
            _ => 0.0,
        }
    }

    /// Mean time spent per processed item so far.
    pub fn average(&self) -> Duration {
        average_per_item(self.elapsed, self.processed)
    }

    /// Processed items per second so far.
    pub fn rate(&self) -> f64 {
        items_per_second(self.processed, self.elapsed)
    }
}

impl fmt::Display for ProgressSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total {
            Some(total) => {
                let width = total.to_string().len();
                write!(
                    f,
                    "{:>width$}/{:>width$} ({:6.2}%) {}, avg: {:?}/{}, {:.2} {}s/s",
                    self.processed,
                    total,
                    self.percent(),
                    self.verb,
                    self.average(),
                    self.noun,
                    self.rate(),
                    self.noun,
                )
            }
            None => write!(
                f,
                "{} {}s {}, avg: {:?}/{}, {:.2} {}s/s",
                group_thousands(self.processed),
                self.noun,
                self.verb,
                self.average(),
                self.noun,
                self.rate(),
                self.noun,
            ),
        }
    }
}

/// `elapsed / count`, or zero when nothing was processed.
pub fn average_per_item(elapsed: Duration, count: u64) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    let nanos = elapsed.as_nanos() / u128::from(count);
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

/// `count / elapsed_seconds`, or zero when no time has passed.
pub fn items_per_second(count: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        count as f64 / secs
    } else {
        0.0
    }
}

/// Render `n` with comma thousands separators, e.g. `1234567` as `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(processed: u64, total: Option<u64>, elapsed: Duration) -> ProgressSnapshot {
        ProgressSnapshot {
            processed,
            total,
            elapsed,
            noun: "record",
            verb: "written",
        }
    }

    #[test]
    fn test_percent() {
        assert_eq!(snapshot(250, Some(1000), Duration::from_secs(1)).percent(), 25.0);
        assert_eq!(snapshot(5, None, Duration::from_secs(1)).percent(), 0.0);
        assert_eq!(snapshot(0, Some(0), Duration::from_secs(1)).percent(), 0.0);
    }

    #[test]
    fn test_average_and_rate() {
        let s = snapshot(100, Some(1000), Duration::from_secs(2));

        assert_eq!(s.average(), Duration::from_millis(20));
        assert_eq!(s.rate(), 50.0);
    }

    #[test]
    fn test_nothing_processed_is_zero() {
        let s = snapshot(0, Some(1000), Duration::from_secs(2));

        assert_eq!(s.average(), Duration::ZERO);
        assert_eq!(s.rate(), 0.0);
    }

    #[test]
    fn test_zero_elapsed_rate() {
        assert_eq!(items_per_second(1000, Duration::ZERO), 0.0);
    }

    #[test]
    fn test_display_with_total_pads_to_total_width() {
        let s = snapshot(42, Some(1000), Duration::from_millis(84));

        assert_eq!(
            s.to_string(),
            "  42/1000 (  4.20%) written, avg: 2ms/record, 500.00 records/s"
        );
    }

    #[test]
    fn test_display_without_total() {
        let s = ProgressSnapshot {
            processed: 12_345,
            total: None,
            elapsed: Duration::from_secs(1),
            noun: "row",
            verb: "verified",
        };

        assert_eq!(
            s.to_string(),
            "12,345 rows verified, avg: 81.004µs/row, 12345.00 rows/s"
        );
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(100_000), "100,000");
    }
}
