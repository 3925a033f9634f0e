use std::time::Instant;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::{Query, WithRejection};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;
use validator::Validate;

use crate::{
    api::{
        error::ApiError,
        response::{success, ApiResponse},
    },
    charts::Figure,
    dashboard::{build_figure, update_figures, AppState, DashboardOptions, FigureKind, Figures, Selection},
    data::toggle_all_sources,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/options", get(get_options))
        .route("/scenarios", get(get_scenarios))
        .route("/figures", get(get_figures))
        .route("/figures/:kind", get(get_figure))
        .route("/sources/toggle", post(toggle_sources))
        .with_state(state)
}

/// Control values as they arrive from the page.
///
/// `sources` repeats once per selected source (`sources=A&sources=B`).
/// Absent means every source; a lone empty value means none.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct FigureQuery {
    #[serde(default, deserialize_with = "present_list")]
    pub sources: Option<Vec<String>>,
    pub from: Option<i32>,
    pub to: Option<i32>,
    #[validate(range(min = 0.0))]
    pub limit: Option<f64>,
}

/// A key that is present always yields `Some`, even when its only value is empty.
fn present_list<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Vec<String>>, D::Error> {
    Vec::<String>::deserialize(de).map(Some)
}

impl FigureQuery {
    pub fn into_selection(self, options: &DashboardOptions) -> Result<Selection, ApiError> {
        self.validate()?;
        let sources = self
            .sources
            .map(|list| list.into_iter().filter(|s| !s.trim().is_empty()).collect());
        Ok(options.selection(sources, self.from, self.to, self.limit)?)
    }
}

pub async fn get_options(State(st): State<AppState>) -> ApiResponse<DashboardOptions> {
    success((*st.options).clone())
}

#[derive(Debug, Serialize)]
pub struct Scenarios {
    pub scenarios: Vec<String>,
    pub default: String,
}

pub async fn get_scenarios(State(st): State<AppState>) -> ApiResponse<Scenarios> {
    success(Scenarios {
        scenarios: st.options.scenarios.clone(),
        default: st.options.default_scenario.clone(),
    })
}

pub async fn get_figures(
    State(st): State<AppState>,
    WithRejection(Query(q), _): WithRejection<Query<FigureQuery>, ApiError>,
) -> Result<ApiResponse<Figures>, ApiError> {
    let start = Instant::now();
    let selection = q.into_selection(&st.options)?;
    let figures = update_figures(&st.dataset, &selection);

    let elapsed = start.elapsed().as_millis() as u64;
    debug!(
        sources = selection.sources.len(),
        from = selection.years.from,
        to = selection.years.to,
        limit = selection.emissions_limit,
        duration_ms = elapsed,
        "figures rebuilt"
    );
    Ok(success(figures).with_count(3).with_duration(elapsed))
}

pub async fn get_figure(
    State(st): State<AppState>,
    Path(kind): Path<String>,
    WithRejection(Query(q), _): WithRejection<Query<FigureQuery>, ApiError>,
) -> Result<ApiResponse<Figure>, ApiError> {
    let kind: FigureKind = kind
        .parse()
        .map_err(|_| ApiError::NotFound(format!("figure {kind}")))?;
    let start = Instant::now();
    let selection = q.into_selection(&st.options)?;
    let figure = build_figure(&st.dataset, &selection, kind);

    debug!(%kind, "figure rebuilt");
    Ok(success(figure).with_duration(start.elapsed().as_millis() as u64))
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub selected: Vec<String>,
    /// Times the button was pressed; `None` before the first press.
    pub n_clicks: Option<u32>,
}

pub async fn toggle_sources(
    State(st): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<ToggleRequest>, ApiError>,
) -> ApiResponse<Vec<String>> {
    if req.n_clicks.is_none() {
        return success(req.selected);
    }
    success(toggle_all_sources(&req.selected, &st.options.energy_sources))
}
