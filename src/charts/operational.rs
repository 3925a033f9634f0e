use super::{Axis, Figure, Layout, Mode, Trace};
use crate::data::OperationalCost;

/// Time series of operational costs over the years.
pub fn plot_operational_costs(rows: &[OperationalCost]) -> Figure {
    let x = rows.iter().map(|r| f64::from(r.year)).collect();
    let y = rows.iter().map(|r| r.value).collect();

    Figure {
        data: vec![Trace::scatter(x, y).name("Operational Costs").mode(Mode::Lines)],
        layout: Layout {
            title: Some("Operational Costs".into()),
            x_axis: Some(Axis::titled("Year")),
            y_axis: Some(Axis::titled("Operational Cost")),
            ..Layout::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_trace_in_row_order() {
        let rows = vec![
            OperationalCost { year: 2020, value: 3.0 },
            OperationalCost { year: 2025, value: 4.5 },
        ];
        let fig = plot_operational_costs(&rows);
        assert_eq!(fig.data.len(), 1);
        assert_eq!(fig.data[0].x, vec![2020.0, 2025.0]);
        assert_eq!(fig.data[0].y, vec![3.0, 4.5]);
        assert_eq!(fig.data[0].mode, Some(Mode::Lines));
    }

    #[test]
    fn test_empty_rows_still_produce_a_figure() {
        let fig = plot_operational_costs(&[]);
        assert!(fig.data[0].x.is_empty());
        assert_eq!(fig.layout.title.unwrap().text, "Operational Costs");
    }
}
