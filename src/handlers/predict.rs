//! Prediction form handlers

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::{AppState, AppResult};
use crate::inference;
use crate::models::{assemble, PredictionRequest};
use crate::page::{self, PageView};

/// Raw form body. Number inputs arrive as text and may be blank.
#[derive(Debug, Default, Deserialize)]
pub struct PredictForm {
    pub year: Option<String>,
    pub mileage: Option<String>,
    pub max_power: Option<String>,
    pub n_clicks: Option<String>,
}

impl PredictForm {
    /// Blank or non-numeric text counts as absent
    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            year: parse_number(self.year.as_deref()),
            mileage: parse_number(self.mileage.as_deref()),
            max_power: parse_number(self.max_power.as_deref()),
        }
    }

    pub fn clicks(&self) -> u64 {
        self.n_clicks
            .as_deref()
            .and_then(|c| c.trim().parse().ok())
            .unwrap_or(0)
    }
}

fn parse_number(text: Option<&str>) -> Option<f64> {
    text.and_then(|t| t.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Initial form, nothing predicted yet
pub async fn show(State(state): State<AppState>) -> Html<String> {
    Html(page::render(&PageView {
        defaults: &state.artifact.defaults,
        request: &PredictionRequest::default(),
        next_click: 1,
        output: "",
    }))
}

/// Predict action
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> AppResult<Html<String>> {
    let clicks = form.clicks();
    let request = form.to_request();

    let output = if clicks == 0 {
        String::new()
    } else {
        match assemble(&request, &state.artifact.defaults) {
            Err(err) => {
                tracing::debug!("Rejected prediction request: {:?}", err);
                err.to_string()
            }
            Ok(vector) => {
                let price = inference::predict(&vector, &state.artifact)?;
                tracing::debug!(?vector, price, "Predicted selling price");
                page::format_price(price, &state.config.currency_label)
            }
        }
    };

    Ok(Html(page::render(&PageView {
        defaults: &state.artifact.defaults,
        request: &request,
        next_click: clicks.saturating_add(1),
        output: &output,
    })))
}
