use serde::Serialize;

/// Five-number summary of one group of measures.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GroupSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl GroupSummary {
    /// Summary of an unsorted slice, or `None` when the slice is empty.
    ///
    /// NaN values sort last under `total_cmp`; callers are expected to have
    /// rejected them already.
    pub fn new(slice: &[f64]) -> Option<Self> {
        let mut vector = slice.to_owned();
        vector.sort_unstable_by(f64::total_cmp);
        Self::from_sorted(&vector)
    }

    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let min = *sorted.first()?;
        let max = *sorted.last()?;

        Some(Self {
            min,
            q1: quantile(sorted, 0.25),
            median: quantile(sorted, 0.5),
            q3: quantile(sorted, 0.75),
            max,
        })
    }

    pub fn values(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

/// R-7 quantile of an ascending slice: linear interpolation between the
/// order statistics around `p * (n - 1)`.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    assert!((0.0..=1.0).contains(&p));

    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let max_index = sorted.len() - 1;
    let raw_index = p * (max_index as f64);
    let bottom_index = raw_index.floor() as usize;

    if bottom_index >= max_index {
        return sorted[max_index];
    }
    let bottom_element = sorted[bottom_index];
    let next_element = sorted[bottom_index + 1];
    let distance = raw_index - bottom_index as f64;

    bottom_element + (next_element - bottom_element) * distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evenly_spaced_needs_no_interpolation() {
        let values: Vec<f64> = (1..=9).map(f64::from).collect();
        let summary = GroupSummary::new(&values).unwrap();
        assert_eq!(summary.values(), [1.0, 3.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn interpolates_between_order_statistics() {
        let summary = GroupSummary::new(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.q1, 1.75);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.q3, 3.25);
        assert_eq!(summary.max, 4.0);
    }

    #[test]
    fn singleton_collapses() {
        let summary = GroupSummary::new(&[42.5]).unwrap();
        assert_eq!(summary.values(), [42.5; 5]);
    }

    #[test]
    fn empty_has_no_summary() {
        assert_eq!(GroupSummary::new(&[]), None);
        assert!(quantile(&[], 0.5).is_nan());
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = GroupSummary::new(&[7.0, 1.0, 5.0, 3.0, 3.0, 10.0]).unwrap();
        let b = GroupSummary::new(&[3.0, 10.0, 3.0, 1.0, 7.0, 5.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ties_are_kept() {
        let summary = GroupSummary::new(&[2.0, 2.0, 2.0, 8.0]).unwrap();
        assert_eq!(summary.median, 2.0);
        assert_eq!(summary.q3, 3.5);
    }

    #[test]
    fn extreme_quantiles_hit_the_ends() {
        let sorted = [1.0, 4.0, 9.0];
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 1.0), 9.0);
    }
}
