use super::quartiles::GroupSummary;
use crate::errors::ChartError;

use anyhow::Result;
use log::debug;

use std::collections::BTreeMap;
use std::fmt::Display;

/// Five-number summaries keyed by group.
pub type GroupedSummaries<K> = BTreeMap<K, GroupSummary>;

/// Partition `records` by `group_key_of` and compute the five-number summary
/// of `measure_of` for every group.
///
/// A NaN or infinite measure fails the whole call with `NonFiniteMeasure`,
/// naming the group it belongs to.
pub fn summarize<I, R, K, G, M>(
    records: I,
    group_key_of: G,
    measure_of: M,
) -> Result<GroupedSummaries<K>>
where
    I: IntoIterator<Item = R>,
    K: Ord + Display,
    G: Fn(&R) -> K,
    M: Fn(&R) -> f64,
{
    let mut buckets: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for record in records {
        let key = group_key_of(&record);
        let value = measure_of(&record);
        if !value.is_finite() {
            return Err(ChartError::non_finite_measure(&key.to_string(), value).into());
        }
        buckets.entry(key).or_default().push(value);
    }

    let mut summaries = GroupedSummaries::new();
    for (key, mut values) in buckets {
        values.sort_unstable_by(f64::total_cmp);
        if let Some(summary) = GroupSummary::from_sorted(&values) {
            debug!("group {}: {} values, {:?}", key, values.len(), summary);
            summaries.insert(key, summary);
        }
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChartErrorRepr;

    #[test]
    fn groups_are_summarized_separately() {
        let records = [("A", 10.0), ("B", 20.0), ("A", 30.0)];
        let summaries = summarize(&records, |r| r.0, |r| r.1).unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries["A"], GroupSummary::new(&[10.0, 30.0]).unwrap());
        assert_eq!(summaries["A"].median, 20.0);
        assert_eq!(summaries["B"].values(), [20.0; 5]);
    }

    #[test]
    fn empty_input_gives_empty_map() {
        let records: Vec<(String, f64)> = Vec::new();
        let summaries = summarize(records, |r| r.0.clone(), |r| r.1).unwrap();
        assert!(summaries.is_empty());
    }

    #[test]
    fn single_group_known_sequence() {
        let records: Vec<(&str, f64)> = (1..=9)
            .rev()
            .map(|v| ("only", f64::from(v)))
            .collect();
        let summaries = summarize(&records, |r| r.0, |r| r.1).unwrap();
        assert_eq!(summaries["only"].values(), [1.0, 3.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn nan_measure_is_rejected() {
        let records = [("A", 1.0), ("A", f64::NAN)];
        let err = summarize(&records, |r| r.0, |r| r.1).unwrap_err();
        let chart_error = err.downcast_ref::<ChartError>().unwrap();
        assert!(chart_error.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "group 'A' has a measure of NaN, which is not finite"
        );
    }

    #[test]
    fn infinite_measure_names_its_group() {
        let records = [("Instagram".to_string(), f64::INFINITY)];
        let err = summarize(&records, |r| r.0.clone(), |r| r.1).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ChartError>().unwrap().repr,
            ChartErrorRepr::NonFiniteMeasure {
                group: "Instagram".to_string(),
                value: f64::INFINITY,
            }
        );
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let records = [
            ("x", 0.1),
            ("y", 0.7),
            ("x", 0.2),
            ("x", 0.3),
            ("y", 1.0 / 3.0),
        ];
        let first = summarize(&records, |r| r.0, |r| r.1).unwrap();
        let second = summarize(&records, |r| r.0, |r| r.1).unwrap();
        for (a, b) in first.values().zip(second.values()) {
            let a_bits = a.values().map(f64::to_bits);
            let b_bits = b.values().map(f64::to_bits);
            assert_eq!(a_bits, b_bits);
        }
    }
}
