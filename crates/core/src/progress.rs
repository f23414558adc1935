//! Percent-complete arithmetic for a cleanup campaign.

use serde::{Deserialize, Serialize};

/// Progress of the current campaign measured against its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Baseline: trashed items when the campaign started.
    pub total: u64,
    /// Trashed items still in the store.
    pub remaining: u64,
    /// `total - remaining`, clamped at zero.
    pub processed: u64,
    /// Rounded percentage in `0..=100`.
    pub percent: u8,
}

impl Progress {
    /// Derive processed/percent from a baseline and the live count.
    ///
    /// A zero baseline reports 100%. Items trashed after the baseline was
    /// taken can push `remaining` above `total`; `processed` clamps to zero.
    #[must_use]
    pub fn from_counts(total: u64, remaining: u64) -> Self {
        let processed = total.saturating_sub(remaining);
        Self { total, remaining, processed, percent: percent_of(processed, total) }
    }

    /// Nothing left in the trash.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

/// `round(part / whole * 100)`, rounding halves up; `100` when `whole == 0`.
#[must_use]
pub fn percent_of(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 100;
    }
    let part = u128::from(part.min(whole));
    let whole = u128::from(whole);
    let rounded = (part * 200 + whole) / (whole * 2);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_baseline_is_complete() {
        let progress = Progress::from_counts(0, 0);
        assert_eq!(progress, Progress { total: 0, remaining: 0, processed: 0, percent: 100 });
        assert!(progress.is_complete());
    }

    #[test]
    fn first_batch_of_three_hundred() {
        let progress = Progress::from_counts(300, 50);
        assert_eq!(progress.processed, 250);
        assert_eq!(progress.percent, 83);
    }

    #[test]
    fn drained_campaign_reports_full() {
        let progress = Progress::from_counts(300, 0);
        assert_eq!(progress, Progress { total: 300, remaining: 0, processed: 300, percent: 100 });
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(percent_of(1, 200), 1);
        assert_eq!(percent_of(1, 8), 13);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
    }

    #[test]
    fn growth_past_baseline_clamps_processed() {
        let progress = Progress::from_counts(40, 55);
        assert_eq!(progress.processed, 0);
        assert_eq!(progress.percent, 0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn percent_never_decreases_while_draining() {
        let total = 1234;
        let mut last = 0;
        for remaining in (0..=total).rev() {
            let percent = Progress::from_counts(total, remaining).percent;
            assert!(percent >= last);
            last = percent;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn huge_counts_do_not_overflow() {
        assert_eq!(percent_of(u64::MAX, u64::MAX), 100);
        assert_eq!(percent_of(u64::MAX / 2, u64::MAX), 50);
    }
}
