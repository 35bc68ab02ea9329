/// One index window over the entry-hour sequence: the hours it covers and how
/// many entries fall inside it. Windows are index-based (a count of
/// consecutive samples), so the count is always exactly the window size; the
/// report exists as a fixed-size batch view of the queue, not a true
/// time-span aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowReport {
    pub from: u32,
    pub to: u32,
    pub count: usize,
}

/// Counts every contiguous index window of `window` samples over a
/// non-decreasing hour sequence. Empty when the sequence is shorter than the
/// window, or the window is zero.
pub fn window_counts(hours: &[u32], window: usize) -> Vec<WindowReport> {
    if window == 0 || hours.len() < window {
        return Vec::new();
    }
    hours
        .windows(window)
        .map(|w| WindowReport {
            from: w[0],
            to: w[window - 1],
            count: w.len(),
        })
        .collect()
}

/// Picks the window with the fewest entries and returns its start hour and
/// count; the first such window wins ties. `None` when no window fits.
pub fn best_entry(hours: &[u32], window: usize) -> Option<(u32, usize)> {
    window_counts(hours, window)
        .into_iter()
        .min_by_key(|r| r.count)
        .map(|r| (r.from, r.count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::seed_entry_hours;

    #[test]
    fn test_every_window_count_equals_window_size() {
        let hours = seed_entry_hours().unwrap();
        for window in 1..=hours.len() {
            let reports = window_counts(&hours, window);
            assert_eq!(reports.len(), hours.len() - window + 1);
            assert!(reports.iter().all(|r| r.count == window));
        }
    }

    #[test]
    fn test_seed_report_covers_expected_ranges() {
        let hours = seed_entry_hours().unwrap();
        let reports = window_counts(&hours, 2);
        assert_eq!(reports[0], WindowReport { from: 1, to: 2, count: 2 });
        assert_eq!(reports.last(), Some(&WindowReport { from: 4, to: 5, count: 2 }));
    }

    #[test]
    fn test_best_entry_is_first_window_on_ties() {
        let hours = seed_entry_hours().unwrap();
        // every count is 2, so the earliest window wins
        assert_eq!(best_entry(&hours, 2), Some((1, 2)));
    }

    #[test]
    fn test_short_sequence_yields_nothing() {
        assert!(window_counts(&[1, 2], 3).is_empty());
        assert_eq!(best_entry(&[1, 2], 3), None);
        assert!(window_counts(&[], 1).is_empty());
    }

    #[test]
    fn test_zero_window_yields_nothing() {
        assert!(window_counts(&[1, 2, 3], 0).is_empty());
    }
}
