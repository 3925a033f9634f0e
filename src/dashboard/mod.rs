pub mod options;

pub use options::*;

use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::Arc;
use strum::{Display, EnumString};

use crate::charts::{plot_investment_costs, plot_operational_costs, plot_total_emissions, Figure};
use crate::config::Config;
use crate::data::{filter_energy_sources, filter_years, Dataset, YearRange};

/// What the user currently has selected on the controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub sources: Vec<String>,
    pub years: YearRange,
    pub emissions_limit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figures {
    pub investment_costs: Figure,
    pub operational_costs: Figure,
    pub total_emissions: Figure,
}

/// One of the three charts on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FigureKind {
    Investment,
    Operational,
    Emissions,
}

/// Build a single chart for `selection`.
///
/// Investment costs are narrowed by energy source and year, operational costs
/// by year; emissions are always plotted over the whole horizon.
pub fn build_figure(dataset: &Dataset, selection: &Selection, kind: FigureKind) -> Figure {
    match kind {
        FigureKind::Investment => {
            let rows = filter_energy_sources(&dataset.investment_costs, &selection.sources);
            plot_investment_costs(&filter_years(&rows, selection.years))
        }
        FigureKind::Operational => {
            plot_operational_costs(&filter_years(&dataset.operational_costs, selection.years))
        }
        FigureKind::Emissions => {
            plot_total_emissions(&dataset.total_emissions, selection.emissions_limit)
        }
    }
}

/// Rebuild every chart for `selection`.
pub fn update_figures(dataset: &Dataset, selection: &Selection) -> Figures {
    Figures {
        investment_costs: build_figure(dataset, selection, FigureKind::Investment),
        operational_costs: build_figure(dataset, selection, FigureKind::Operational),
        total_emissions: build_figure(dataset, selection, FigureKind::Emissions),
    }
}

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub dataset: Arc<Dataset>,
    pub options: Arc<DashboardOptions>,
}

impl AppState {
    /// Read the model outputs from the configured directory.
    pub fn load(cfg: Config) -> Result<Self> {
        let dataset = Dataset::load(
            &cfg.data.path,
            cfg.data.variable_prefix,
            cfg.data.year_label,
        )
        .with_context(|| format!("loading model outputs from {}", cfg.data.path.display()))?;
        Ok(Self::new(cfg, dataset))
    }

    pub fn new(cfg: Config, dataset: Dataset) -> Self {
        let options = DashboardOptions::new(&dataset, &cfg.dashboard);
        Self {
            cfg,
            dataset: Arc::new(dataset),
            options: Arc::new(options),
        }
    }
}
