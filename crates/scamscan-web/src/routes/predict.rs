//! URL classification handler.

use axum::{extract::State, Form};
use scamscan_core::classify::is_http_url;
use serde::Deserialize;
use tracing::info;

use super::{ClientIp, IndexTemplate};
use crate::state::AppState;

pub const INVALID_URL_MESSAGE: &str = "Invalid URL format.";

#[derive(Deserialize)]
pub struct PredictForm {
    #[serde(default)]
    pub url: String,
}

/// POST /predict - Classify a submitted URL.
pub async fn predict_url(
    State(state): State<AppState>,
    client_ip: ClientIp,
    Form(form): Form<PredictForm>,
) -> IndexTemplate {
    let url = form.url.trim();
    let page = IndexTemplate::new(client_ip).with_input_url(url);

    if !is_http_url(url) {
        info!(url, "Rejected URL without http(s) scheme");
        return page.with_message(INVALID_URL_MESSAGE);
    }

    let classification = state.classifier.classify_url(url).await;
    page.with_predicted_class(classification)
}
