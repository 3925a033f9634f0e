//! HTTP-level tests: the router is driven in-process against CSV fixtures
//! written to a temporary output directory.

use std::fs;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use openmaster_dashboard::{api, config::Config, dashboard::AppState, data::Dataset};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

const INVESTMENT_COSTS: &str = "sCE,sYear,vInvCost\n\
     Solar,y2020,100\n\
     Wind,y2020,80\n\
     Solar,y2030,60\n\
     Wind,y2040,40\n";

fn write_fixture(investment_costs: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("vInvCost.csv"), investment_costs).unwrap();
    fs::write(
        dir.path().join("vOpCost.csv"),
        "sYear,vOpCost\ny2020,10\ny2030,12\ny2040,9\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("vEmiTot.csv"),
        "sYear,vEmiTot\ny2020,1000\ny2030,1000\ny2040,500\n",
    )
    .unwrap();
    fs::write(dir.path().join("README.txt"), "not a variable").unwrap();
    dir
}

fn app() -> Router {
    app_with_investment_costs(INVESTMENT_COSTS)
}

fn app_with_investment_costs(csv: &str) -> Router {
    let dir = write_fixture(csv);
    let mut cfg = Config::default();
    cfg.data.path = dir.path().to_path_buf();
    let state = AppState::load(cfg.clone()).unwrap();
    api::router(state, &cfg)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn trace_names(figure: &Value) -> Vec<String> {
    figure["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["name"].as_str().map(str::to_string))
        .collect()
}

#[tokio::test]
async fn test_options_describe_the_controls() {
    let (status, body) = get(app(), "/api/v1/options").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let opts = &body["data"];
    assert_eq!(opts["title"], json!("openMASTER"));
    assert_eq!(opts["energy_sources"], json!(["Solar", "Wind"]));
    assert_eq!(opts["years"]["min"], json!(2020));
    assert_eq!(opts["years"]["max"], json!(2040));
    assert_eq!(opts["years"]["marks"], json!([2020, 2025, 2030, 2035, 2040]));
    assert_eq!(opts["emissions_limit"]["default"], json!(2000.0));
}

#[tokio::test]
async fn test_figures_follow_the_selection() {
    let (status, body) = get(app(), "/api/v1/figures?sources=Wind&from=2020&to=2030&limit=1500").await;

    assert_eq!(status, StatusCode::OK);
    let figs = &body["data"];

    let inv = &figs["investment_costs"];
    assert_eq!(trace_names(inv), vec!["Wind"]);
    assert_eq!(inv["data"][0]["x"], json!([2020.0]));
    assert_eq!(inv["layout"]["barmode"], json!("stack"));
    assert_eq!(inv["layout"]["xaxis"]["tickvals"], json!([2020]));

    assert_eq!(figs["operational_costs"]["data"][0]["x"], json!([2020.0, 2030.0]));

    let emissions = &figs["total_emissions"];
    assert_eq!(emissions["data"][0]["x"], json!([2020.0, 2030.0, 2040.0]));
    assert_eq!(emissions["data"].as_array().unwrap().len(), 3);
    assert_eq!(emissions["data"][2]["x"], json!([2025.0]));
    assert_eq!(emissions["layout"]["shapes"][0]["y0"], json!(1500.0));

    assert_eq!(body["metadata"]["total_count"], json!(3));
}

#[tokio::test]
async fn test_limit_beyond_cumulative_total_has_no_marker() {
    let (_, body) = get(app(), "/api/v1/figures/emissions?limit=9000").await;
    assert_eq!(body["data"]["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_empty_source_list_gives_empty_investment_chart() {
    let (_, body) = get(app(), "/api/v1/figures/investment?sources=").await;
    let fig = &body["data"];
    assert!(fig["data"].as_array().unwrap().is_empty());
    assert_eq!(fig["layout"]["xaxis"]["tickvals"], json!([]));
}

#[tokio::test]
async fn test_absent_sources_select_every_source() {
    let (status, body) = get(app(), "/api/v1/figures/investment").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trace_names(&body["data"]), vec!["Solar", "Wind"]);
}

#[tokio::test]
async fn test_source_names_may_contain_commas() {
    let app = app_with_investment_costs(
        "sCE,sYear,vInvCost\n\
         \"Oil, heavy\",y2020,100\n\
         Wind,y2020,80\n\
         Gas,y2020,50\n",
    );

    let (_, body) = get(app.clone(), "/api/v1/options").await;
    assert_eq!(body["data"]["energy_sources"], json!(["Oil, heavy", "Wind", "Gas"]));

    let (status, body) = get(
        app,
        "/api/v1/figures/investment?sources=Oil%2C%20heavy&sources=Wind",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trace_names(&body["data"]), vec!["Oil, heavy", "Wind"]);
}

#[tokio::test]
async fn test_malformed_query_is_a_json_bad_request() {
    let (status, body) = get(app(), "/api/v1/figures?from=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("BadRequest"));
    assert!(body["message"].as_str().unwrap().starts_with("Bad request: "));

    let (status, body) = get(app(), "/api/v1/figures/emissions?limit=lots").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("BadRequest"));
}

#[tokio::test]
async fn test_malformed_toggle_body_is_a_json_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/sources/toggle")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"selected\": "))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], json!("BadRequest"));
}

#[tokio::test]
async fn test_reversed_year_range_is_rejected() {
    let (status, body) = get(app(), "/api/v1/figures?from=2040&to=2020").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("ValidationError"));
}

#[tokio::test]
async fn test_negative_limit_is_rejected() {
    let (status, _) = get(app(), "/api/v1/figures/emissions?limit=-5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_figure_is_not_found() {
    let (status, body) = get(app(), "/api/v1/figures/pie").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("NotFound"));
}

#[tokio::test]
async fn test_toggle_switches_between_all_and_none() {
    let post = |payload: Value| {
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/sources/toggle")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    };

    let app = app();
    for (payload, expected) in [
        (json!({ "selected": ["Solar", "Wind"], "n_clicks": 1 }), json!([])),
        (json!({ "selected": ["Wind"], "n_clicks": 2 }), json!(["Solar", "Wind"])),
        (json!({ "selected": ["Wind"], "n_clicks": null }), json!(["Wind"])),
    ] {
        let response = app.clone().oneshot(post(payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["data"], expected);
    }
}

#[tokio::test]
async fn test_scenarios_are_listed() {
    let (_, body) = get(app(), "/api/v1/scenarios").await;
    assert_eq!(body["data"]["scenarios"], json!(["SC01", "SC02"]));
    assert_eq!(body["data"]["default"], json!("SC01"));
}

#[tokio::test]
async fn test_index_page_carries_the_title() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<title>openMASTER</title>"));
    assert!(html.contains("total_emissions_fig"));
}

#[tokio::test]
async fn test_health_reports_loaded_tables() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["dataset"]["rows"], json!(10));

    let (status, _) = get(app(), "/health/live").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_empty_tables_are_not_ready() {
    let cfg = Config::default();
    let app = api::router(AppState::new(cfg.clone(), Dataset::default()), &cfg);
    let (status, _) = get(app.clone(), "/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (_, body) = get(app, "/api/v1/options").await;
    assert_eq!(body["data"]["years"]["min"], Value::Null);
}

#[test]
fn test_missing_output_directory_fails_startup() {
    let mut cfg = Config::default();
    cfg.data.path = "/nonexistent/openmaster/output".into();
    let err = AppState::load(cfg).err().unwrap();
    assert!(format!("{err:#}").contains("cannot read output directory"));
}
