use itertools::Itertools;

use super::{interpolate, Axis, Dash, Figure, Fill, Layout, Marker, Mode, Shape, Trace};
use crate::data::Emission;

/// Running total of `values`.
pub fn cumulative(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// Point where the cumulative series reaches `limit`, as (year, limit).
///
/// `None` unless `limit` lies within the series' own min/max. Points whose
/// cumulative value is NaN or infinite are left out.
pub fn intersection(years: &[f64], cumulative: &[f64], limit: f64) -> Option<(f64, f64)> {
    let (years, cumulative): (Vec<f64>, Vec<f64>) = years
        .iter()
        .zip(cumulative)
        .filter(|(_, c)| c.is_finite())
        .map(|(y, c)| (*y, *c))
        .unzip();
    let (lo, hi) = cumulative
        .iter()
        .copied()
        .minmax_by(|a, b| a.total_cmp(b))
        .into_option()?;
    if limit < lo || limit > hi {
        return None;
    }
    interpolate(&cumulative, &years, limit).map(|year| (year, limit))
}

/// Yearly and cumulative emissions against a limit line, with a marker where
/// the cumulative total crosses the limit.
pub fn plot_total_emissions(rows: &[Emission], limit: f64) -> Figure {
    let years: Vec<f64> = rows.iter().map(|r| f64::from(r.year)).collect();
    let yearly: Vec<f64> = rows.iter().map(|r| r.value).collect();
    let cum = cumulative(&yearly);

    let mut data = vec![
        Trace::scatter(years.clone(), yearly).name("Yearly Emissions"),
        Trace::scatter(years.clone(), cum.clone())
            .name("Cumulative Emissions")
            .fill(Fill::ToZeroY)
            .mode(Mode::None),
    ];

    if let Some((x, y)) = intersection(&years, &cum, limit) {
        data.push(
            Trace::scatter(vec![x], vec![y])
                .mode(Mode::Markers)
                .marker(Marker { size: 10, color: "red".into() })
                .text(vec![format!("Intersection ({x:.2}, {y:.2})")], "bottom center")
                .show_legend(false),
        );
    }

    Figure {
        data,
        layout: Layout {
            x_axis: Some(Axis::titled("Year")),
            y_axis: Some(Axis::titled("Emissions")),
            shapes: vec![Shape::hline(limit, Dash::Dash, "green")],
            ..Layout::default()
        },
    }
}
