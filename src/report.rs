//! Plain-text report of a finished sweep

use std::fmt;
use std::time::Duration;

use crate::draws::BucketProgress;
use crate::stats::{AggregateCounters, BucketTotals, CountingMode};

fn plural(larges: usize) -> &'static str {
    if larges == 1 { "" } else { "s" }
}

/// e.g. `40% (computed sets with 1 large)`
pub fn milestone_line(progress: &BucketProgress) -> String {
    format!(
        "{}% (computed sets with {} large{})",
        progress.percent(),
        progress.larges,
        plural(progress.larges)
    )
}

pub fn bucket_line(larges: usize, totals: &BucketTotals, mode: CountingMode) -> String {
    format!(
        "found {} solutions for {} sets with {} large number{} ({:.3}%)",
        totals.solutions(mode),
        totals.draws,
        larges,
        plural(larges),
        totals.percentage(mode)
    )
}

pub fn total_line(totals: &BucketTotals, mode: CountingMode) -> String {
    format!(
        "found {} total solutions for {} total sets ({:.3}%)",
        totals.solutions(mode),
        totals.draws,
        totals.percentage(mode)
    )
}

pub fn timing_line(elapsed: Duration) -> String {
    format!("took {:.3}s to compute", elapsed.as_secs_f64())
}

/// Bucket lines, the grand total and the timing line of a sweep
pub struct Report<'a> {
    pub counters: &'a AggregateCounters,
    pub mode: CountingMode,
    pub elapsed: Duration,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (larges, totals) in self.counters.buckets() {
            writeln!(f, "{}", bucket_line(larges, totals, self.mode))?;
        }
        writeln!(f, "{}", total_line(&self.counters.total(), self.mode))?;
        write!(f, "{}", timing_line(self.elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ReachabilitySet;

    #[test]
    fn test_milestone_lines() {
        let zero = BucketProgress {
            larges: 0,
            completed: 1,
            total: 5,
        };
        let one = BucketProgress {
            larges: 1,
            completed: 2,
            total: 5,
        };
        let four = BucketProgress {
            larges: 4,
            completed: 5,
            total: 5,
        };
        assert_eq!(milestone_line(&zero), "20% (computed sets with 0 larges)");
        assert_eq!(milestone_line(&one), "40% (computed sets with 1 large)");
        assert_eq!(milestone_line(&four), "100% (computed sets with 4 larges)");
    }

    #[test]
    fn test_bucket_and_total_lines() {
        let totals = BucketTotals {
            draws: 4,
            occurrences: 3,
            distinct: 2,
        };
        assert_eq!(
            bucket_line(1, &totals, CountingMode::Occurrences),
            "found 3 solutions for 4 sets with 1 large number (75.000%)"
        );
        assert_eq!(
            bucket_line(2, &totals, CountingMode::DistinctTargets),
            "found 2 solutions for 4 sets with 2 large numbers (50.000%)"
        );
        assert_eq!(
            total_line(&totals, CountingMode::Occurrences),
            "found 3 total solutions for 4 total sets (75.000%)"
        );
    }

    #[test]
    fn test_timing_line() {
        assert_eq!(
            timing_line(Duration::from_millis(1234)),
            "took 1.234s to compute"
        );
    }

    #[test]
    fn test_report_layout() {
        let mut counters = AggregateCounters::new();
        let mut recorder = ReachabilitySet::new();
        recorder.mark(500);
        assert!(counters.fold(3, &recorder).is_ok());

        let report = Report {
            counters: &counters,
            mode: CountingMode::Occurrences,
            elapsed: Duration::from_secs(2),
        };
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(
            lines.get(3).copied(),
            Some("found 1 solutions for 1 sets with 3 large numbers (100.000%)")
        );
        assert_eq!(
            lines.get(5).copied(),
            Some("found 1 total solutions for 1 total sets (100.000%)")
        );
        assert_eq!(lines.last().copied(), Some("took 2.000s to compute"));
    }
}
