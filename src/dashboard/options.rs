use serde::Serialize;
use thiserror::Error;

use super::Selection;
use crate::config::{DashboardConfig, EmissionsLimitConfig};
use crate::data::{Dataset, YearRange};

/// Everything the page needs to lay out its controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardOptions {
    pub title: String,
    pub energy_sources: Vec<String>,
    pub years: YearSlider,
    pub emissions_limit: EmissionsLimitConfig,
    pub scenarios: Vec<String>,
    pub default_scenario: String,
}

/// Range slider bounds. `min`/`max` are absent when the investment table is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSlider {
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub step: i32,
    pub marks: Vec<i32>,
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidSelection {
    #[error("year range is reversed: {from} > {to}")]
    ReversedYears { from: i32, to: i32 },
}

impl DashboardOptions {
    pub fn new(dataset: &Dataset, cfg: &DashboardConfig) -> Self {
        let bounds = dataset.year_bounds();
        let step = cfg.year_step.max(1);
        let marks = bounds
            .map(|(lo, hi)| (lo..=hi).step_by(step as usize).collect())
            .unwrap_or_default();

        Self {
            title: cfg.title.clone(),
            energy_sources: dataset.energy_sources(),
            years: YearSlider {
                min: bounds.map(|b| b.0),
                max: bounds.map(|b| b.1),
                step,
                marks,
            },
            emissions_limit: cfg.emissions_limit,
            scenarios: cfg.scenarios.clone(),
            default_scenario: cfg.default_scenario.clone(),
        }
    }

    /// The full year span, or everything when the data has no years.
    pub fn full_range(&self) -> YearRange {
        match (self.years.min, self.years.max) {
            (Some(from), Some(to)) => YearRange::new(from, to),
            _ => YearRange::unbounded(),
        }
    }

    /// Initial state of the controls: all sources, full span, default limit.
    pub fn default_selection(&self) -> Selection {
        Selection {
            sources: self.energy_sources.clone(),
            years: self.full_range(),
            emissions_limit: self.emissions_limit.default,
        }
    }

    /// Fill whatever the caller left out with the control defaults.
    pub fn selection(
        &self,
        sources: Option<Vec<String>>,
        from: Option<i32>,
        to: Option<i32>,
        limit: Option<f64>,
    ) -> Result<Selection, InvalidSelection> {
        let full = self.full_range();
        let years = YearRange::new(from.unwrap_or(full.from), to.unwrap_or(full.to));
        if years.from > years.to {
            return Err(InvalidSelection::ReversedYears { from: years.from, to: years.to });
        }

        Ok(Selection {
            sources: sources.unwrap_or_else(|| self.energy_sources.clone()),
            years,
            emissions_limit: limit.unwrap_or(self.emissions_limit.default),
        })
    }
}
