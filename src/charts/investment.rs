use itertools::Itertools;

use super::{Axis, BarMode, Figure, Layout, TickMode, Trace};
use crate::data::InvestmentCost;

pub const YEAR_TICK_STEP: i32 = 5;

/// Stacked bars of investment cost per year, one trace per energy source.
pub fn plot_investment_costs(rows: &[InvestmentCost]) -> Figure {
    let data = rows
        .iter()
        .map(|r| r.energy_source.as_str())
        .unique()
        .map(|source| {
            let (x, y) = rows
                .iter()
                .filter(|r| r.energy_source == source)
                .map(|r| (f64::from(r.year), r.value))
                .unzip();
            Trace::bar(x, y).name(source)
        })
        .collect();

    let (tick_values, tick_text) = year_ticks(rows, YEAR_TICK_STEP);
    let x_axis = Axis {
        tick_mode: Some(TickMode::Array),
        tick_values: Some(tick_values),
        tick_text: Some(tick_text),
        ..Axis::titled("Year")
    };

    Figure {
        data,
        layout: Layout {
            title: Some("Investment Costs".into()),
            bar_mode: Some(BarMode::Stack),
            x_axis: Some(x_axis),
            y_axis: Some(Axis::titled("Investment Cost")),
            ..Layout::default()
        },
    }
}

/// Ticks every `step` years from the first year until one reaches past the last.
/// No rows means no ticks; ticks stop at `i32::MAX`.
pub fn year_ticks(rows: &[InvestmentCost], step: i32) -> (Vec<i32>, Vec<String>) {
    let Some((min, max)) = rows.iter().map(|r| r.year).minmax().into_option() else {
        return (Vec::new(), Vec::new());
    };
    let step = step.max(1);
    let values: Vec<i32> = (min..=max.saturating_add(step - 1))
        .step_by(step as usize)
        .collect();
    let text = values.iter().map(i32::to_string).collect();
    (values, text)
}
