use axum::{extract::State, http::StatusCode, Json};
use common::types::Message;
use serde::Deserialize;
use service::plot::domain::PlotView;
use tracing::info;

use super::extract::{AddPlotForm, Payload, RequestOrigin};
use crate::errors::ApiError;
use crate::state::ServerState;

/// Plot numbers are text, but JSON clients may send a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PlotNumber {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Debug, Deserialize)]
pub struct RemovePlotRequest {
    #[serde(default)]
    pub plot_number: Option<PlotNumber>,
}

impl RemovePlotRequest {
    /// Missing or null becomes empty and fails validation downstream.
    pub fn plot_number(&self) -> String {
        match &self.plot_number {
            Some(PlotNumber::Text(s)) => s.clone(),
            Some(PlotNumber::Number(n)) => n.to_string(),
            None => String::new(),
        }
    }
}

#[utoipa::path(
    get, path = "/get-plots/", tag = "plots",
    responses(
        (status = 200, description = "All plots, oldest first", body = [crate::openapi::PlotDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_plots(
    State(state): State<ServerState>,
    RequestOrigin(origin): RequestOrigin,
) -> Result<Json<Vec<PlotView>>, ApiError> {
    let plots = state.plots.list(&origin).await?;
    info!(count = plots.len(), "list plots");
    Ok(Json(plots))
}

#[utoipa::path(
    post, path = "/add-plot/", tag = "plots",
    request_body(content = crate::openapi::AddPlotFormDoc, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Created", body = crate::openapi::PlotDoc),
        (status = 400, description = "Validation error or malformed form", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Plot number already exists", body = crate::openapi::ErrorDoc),
        (status = 413, description = "Upload too large", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add_plot(
    State(state): State<ServerState>,
    RequestOrigin(origin): RequestOrigin,
    AddPlotForm(input): AddPlotForm,
) -> Result<(StatusCode, Json<PlotView>), ApiError> {
    let plot = state.plots.add(input, &origin).await?;
    Ok((StatusCode::CREATED, Json(plot)))
}

#[utoipa::path(
    post, path = "/remove-plot/", tag = "plots",
    request_body = crate::openapi::RemovePlotDoc,
    responses(
        (status = 200, description = "Removed", body = crate::openapi::MessageDoc),
        (status = 400, description = "Missing plot_number or malformed body", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No such plot", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn remove_plot(
    State(state): State<ServerState>,
    Payload(req): Payload<RemovePlotRequest>,
) -> Result<Json<Message>, ApiError> {
    state.plots.remove(&req.plot_number()).await?;
    Ok(Json(Message::new("Plot removed")))
}
