use axum::{extract::State, response::Html};

use crate::dashboard::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET / - the dashboard itself. Controls and charts are driven from the
/// browser against `/api/v1`.
pub async fn index(State(st): State<AppState>) -> Html<String> {
    Html(render_index(&st.options.title))
}

fn render_index(title: &str) -> String {
    INDEX_HTML.replace("{{title}}", &escape(title))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
