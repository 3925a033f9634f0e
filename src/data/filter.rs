use serde::{Deserialize, Serialize};

use super::{InvestmentCost, YearRow};

/// Inclusive year interval selected on the range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// Accepts everything; used when the data carries no years at all.
    pub fn unbounded() -> Self {
        Self { from: i32::MIN, to: i32::MAX }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.from <= year && year <= self.to
    }
}

/// Copy of the rows whose energy source is among `selected`.
pub fn filter_energy_sources<S: AsRef<str>>(
    rows: &[InvestmentCost],
    selected: &[S],
) -> Vec<InvestmentCost> {
    rows.iter()
        .filter(|r| selected.iter().any(|s| s.as_ref() == r.energy_source))
        .cloned()
        .collect()
}

/// Copy of the rows with a year inside `range`, bounds included.
pub fn filter_years<R: YearRow + Clone>(rows: &[R], range: YearRange) -> Vec<R> {
    rows.iter()
        .filter(|r| range.contains(r.year()))
        .cloned()
        .collect()
}

/// "Select/Deselect All": a partial selection becomes everything, a full one becomes nothing.
pub fn toggle_all_sources(current: &[String], all: &[String]) -> Vec<String> {
    let everything_selected = all.iter().all(|s| current.contains(s));
    if everything_selected && !current.is_empty() {
        Vec::new()
    } else {
        all.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Emission, OperationalCost};
    use proptest::prelude::*;

    fn inv(source: &str, year: i32) -> InvestmentCost {
        InvestmentCost { energy_source: source.into(), year, value: 1.0 }
    }

    #[test]
    fn test_keeps_only_selected_sources() {
        let rows = vec![inv("Solar", 2020), inv("Wind", 2020), inv("Gas", 2025)];
        let out = filter_energy_sources(&rows, &["Gas", "Solar"]);
        assert_eq!(out, vec![inv("Solar", 2020), inv("Gas", 2025)]);
    }

    #[test]
    fn test_empty_source_selection_yields_nothing() {
        let rows = vec![inv("Solar", 2020)];
        assert!(filter_energy_sources::<&str>(&rows, &[]).is_empty());
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        let rows: Vec<OperationalCost> = (2020..=2040)
            .step_by(5)
            .map(|year| OperationalCost { year, value: 0.0 })
            .collect();
        let years: Vec<i32> = filter_years(&rows, YearRange::new(2025, 2035))
            .iter()
            .map(|r| r.year)
            .collect();
        assert_eq!(years, vec![2025, 2030, 2035]);
    }

    #[test]
    fn test_filtering_leaves_the_source_untouched() {
        let rows = vec![Emission { year: 2020, value: 3.0 }];
        let out = filter_years(&rows, YearRange::new(2030, 2040));
        assert!(out.is_empty());
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_toggle_switches_between_all_and_none() {
        let all: Vec<String> = vec!["Solar".into(), "Wind".into()];
        assert_eq!(toggle_all_sources(&all, &all), Vec::<String>::new());
        assert_eq!(toggle_all_sources(&[], &all), all);
        assert_eq!(toggle_all_sources(&["Wind".into()], &all), all);
    }

    proptest! {
        #[test]
        fn test_range_filter_matches_predicate(
            years in proptest::collection::vec(1990i32..2100, 0..40),
            a in 1990i32..2100,
            b in 1990i32..2100,
        ) {
            let range = YearRange::new(a.min(b), a.max(b));
            let rows: Vec<Emission> = years.iter().map(|&year| Emission { year, value: 0.0 }).collect();
            let out = filter_years(&rows, range);
            prop_assert!(out.iter().all(|r| range.from <= r.year && r.year <= range.to));
            prop_assert_eq!(out.len(), years.iter().filter(|&&y| range.contains(y)).count());
        }
    }
}
