use std::path::Path;

use itertools::{Itertools, MinMaxResult};
use serde::Serialize;
use tracing::info;

use super::{load_variables, DataError, VariableSet, VariableTable};

pub const INVESTMENT_COSTS: &str = "vInvCost";
pub const OPERATIONAL_COSTS: &str = "vOpCost";
pub const TOTAL_EMISSIONS: &str = "vEmiTot";

const YEAR_COLUMN: &str = "sYear";
const ENERGY_SOURCE_COLUMN: &str = "sCE";

/// Rows keyed by a model year.
pub trait YearRow {
    fn year(&self) -> i32;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentCost {
    pub energy_source: String,
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationalCost {
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Emission {
    pub year: i32,
    pub value: f64,
}

impl YearRow for InvestmentCost {
    fn year(&self) -> i32 {
        self.year
    }
}

impl YearRow for OperationalCost {
    fn year(&self) -> i32 {
        self.year
    }
}

impl YearRow for Emission {
    fn year(&self) -> i32 {
        self.year
    }
}

/// The three tables the dashboard plots. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Ordered by (value, year), both descending.
    pub investment_costs: Vec<InvestmentCost>,
    pub operational_costs: Vec<OperationalCost>,
    pub total_emissions: Vec<Emission>,
}

impl Dataset {
    pub fn load(dir: &Path, variable_prefix: char, year_label: char) -> Result<Self, DataError> {
        let vars = load_variables(dir, variable_prefix)?;
        let dataset = Self::from_variables(&vars, year_label)?;
        info!(
            investment_rows = dataset.investment_costs.len(),
            operational_rows = dataset.operational_costs.len(),
            emission_rows = dataset.total_emissions.len(),
            "dataset ready"
        );
        Ok(dataset)
    }

    pub fn from_variables(vars: &VariableSet, year_label: char) -> Result<Self, DataError> {
        let inv = variable(vars, INVESTMENT_COSTS)?;
        let sources = inv.column(ENERGY_SOURCE_COLUMN)?;
        let inv_years = years(inv, year_label)?;
        let inv_values = numbers(inv, INVESTMENT_COSTS)?;
        let mut investment_costs: Vec<InvestmentCost> = sources
            .into_iter()
            .zip(inv_years)
            .zip(inv_values)
            .map(|((source, year), value)| InvestmentCost {
                energy_source: source.to_string(),
                year,
                value,
            })
            .collect();
        investment_costs.sort_by(|a, b| {
            b.value
                .total_cmp(&a.value)
                .then_with(|| b.year.cmp(&a.year))
        });

        let op = variable(vars, OPERATIONAL_COSTS)?;
        let operational_costs = years(op, year_label)?
            .into_iter()
            .zip(numbers(op, OPERATIONAL_COSTS)?)
            .map(|(year, value)| OperationalCost { year, value })
            .collect();

        let emi = variable(vars, TOTAL_EMISSIONS)?;
        let total_emissions = years(emi, year_label)?
            .into_iter()
            .zip(numbers(emi, TOTAL_EMISSIONS)?)
            .map(|(year, value)| Emission { year, value })
            .collect();

        Ok(Self {
            investment_costs,
            operational_costs,
            total_emissions,
        })
    }

    /// Distinct energy sources in the order they appear in the investment table.
    pub fn energy_sources(&self) -> Vec<String> {
        self.investment_costs
            .iter()
            .map(|r| r.energy_source.clone())
            .unique()
            .collect()
    }

    /// Year span of the investment table; `None` when it has no rows.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        match self.investment_costs.iter().map(|r| r.year).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(y) => Some((y, y)),
            MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
        }
    }
}

/// `y2030` → 2030. A value without the label is parsed as it is.
pub fn parse_year(raw: &str, label: char) -> Option<i32> {
    let raw = raw.trim();
    raw.strip_prefix(label).unwrap_or(raw).parse().ok()
}

fn variable<'a>(vars: &'a VariableSet, name: &str) -> Result<&'a VariableTable, DataError> {
    vars.get(name)
        .ok_or_else(|| DataError::MissingVariable(name.to_string()))
}

fn years(table: &VariableTable, label: char) -> Result<Vec<i32>, DataError> {
    table
        .column(YEAR_COLUMN)?
        .into_iter()
        .enumerate()
        .map(|(row, raw)| {
            parse_year(raw, label).ok_or_else(|| DataError::InvalidYear {
                variable: table.name.clone(),
                row,
                value: raw.to_string(),
            })
        })
        .collect()
}

fn numbers(table: &VariableTable, column: &str) -> Result<Vec<f64>, DataError> {
    table
        .column(column)?
        .into_iter()
        .enumerate()
        .map(|(row, raw)| {
            raw.parse::<f64>().map_err(|_| DataError::InvalidNumber {
                variable: table.name.clone(),
                row,
                column: column.to_string(),
                value: raw.to_string(),
            })
        })
        .collect()
}
