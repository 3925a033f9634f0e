//! Chart construction.
//!
//! Figures are Plotly figure documents: the page hands them to `Plotly.react`
//! unchanged, so field names follow Plotly's JSON schema.

pub mod emissions;
pub mod interpolate;
pub mod investment;
pub mod operational;

pub use emissions::plot_total_emissions;
pub use interpolate::interpolate;
pub use investment::plot_investment_costs;
pub use operational::plot_operational_costs;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Bar,
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Lines,
    Markers,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    ToZeroY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dash {
    Solid,
    Dash,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(rename = "textposition", skip_serializing_if = "Option::is_none")]
    pub text_position: Option<String>,
    #[serde(rename = "showlegend", skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
}

impl Trace {
    fn new(kind: TraceKind, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            kind,
            name: None,
            x,
            y,
            mode: None,
            fill: None,
            marker: None,
            text: None,
            text_position: None,
            show_legend: None,
        }
    }

    pub fn bar(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self::new(TraceKind::Bar, x, y)
    }

    pub fn scatter(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self::new(TraceKind::Scatter, x, y)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn text(mut self, text: Vec<String>, position: &str) -> Self {
        self.text = Some(text);
        self.text_position = Some(position.to_string());
        self
    }

    pub fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = Some(show);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub size: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Stack,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickMode {
    Auto,
    Array,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(rename = "tickmode", skip_serializing_if = "Option::is_none")]
    pub tick_mode: Option<TickMode>,
    #[serde(rename = "tickvals", skip_serializing_if = "Option::is_none")]
    pub tick_values: Option<Vec<i32>>,
    #[serde(rename = "ticktext", skip_serializing_if = "Option::is_none")]
    pub tick_text: Option<Vec<String>>,
}

impl Axis {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Line running across the whole plot width at `y0 == y1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(rename = "xref")]
    pub x_ref: &'static str,
    #[serde(rename = "yref")]
    pub y_ref: &'static str,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub line: ShapeLine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeLine {
    pub dash: Dash,
    pub color: String,
}

impl Shape {
    pub fn hline(y: f64, dash: Dash, color: &str) -> Self {
        Self {
            kind: "line",
            x_ref: "paper",
            y_ref: "y",
            x0: 0.0,
            x1: 1.0,
            y0: y,
            y1: y,
            line: ShapeLine { dash, color: color.to_string() },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(rename = "barmode", skip_serializing_if = "Option::is_none")]
    pub bar_mode: Option<BarMode>,
    #[serde(rename = "xaxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(rename = "yaxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
}
