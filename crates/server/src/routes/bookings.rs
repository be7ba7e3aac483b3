use axum::{extract::State, Json};
use common::types::Message;
use models::booking::{self, NewBooking};
use serde::Deserialize;
use tracing::info;

use super::extract::Payload;
use crate::errors::ApiError;
use crate::state::ServerState;

/// Booking submission. Any `booking_date` or `id` sent by the client is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookPlotRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cnic: String,
    pub plot_number: String,
}

impl From<BookPlotRequest> for NewBooking {
    fn from(r: BookPlotRequest) -> Self {
        NewBooking { name: r.name, email: r.email, phone: r.phone, cnic: r.cnic, plot_number: r.plot_number }
    }
}

/// `id` arrives as a JSON number, or as a string from forms and loose clients.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BookingId {
    Number(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookingRequest {
    #[serde(default)]
    pub id: Option<BookingId>,
}

impl RemoveBookingRequest {
    /// `Ok(None)` for a well-formed id that cannot name any row.
    fn id(&self) -> Result<Option<i32>, ApiError> {
        let raw = match &self.id {
            None => return Err(ApiError::BadRequest("id is required".into())),
            Some(BookingId::Number(n)) => *n,
            Some(BookingId::Text(s)) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| ApiError::BadRequest("id must be an integer".into()))?,
        };
        Ok(i32::try_from(raw).ok())
    }
}

#[utoipa::path(
    post, path = "/book-plot/", tag = "bookings",
    request_body = crate::openapi::BookPlotDoc,
    responses(
        (status = 200, description = "Booking recorded", body = crate::openapi::BookingDoc),
        (status = 400, description = "Validation error or malformed body", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn book_plot(
    State(state): State<ServerState>,
    Payload(req): Payload<BookPlotRequest>,
) -> Result<Json<booking::Model>, ApiError> {
    let created = state.bookings.create(req.into()).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/get-bookings/", tag = "bookings",
    responses(
        (status = 200, description = "All bookings, oldest first", body = [crate::openapi::BookingDoc])
    )
)]
pub async fn get_bookings(State(state): State<ServerState>) -> Result<Json<Vec<booking::Model>>, ApiError> {
    let bookings = state.bookings.list().await?;
    info!(count = bookings.len(), "list bookings");
    Ok(Json(bookings))
}

#[utoipa::path(
    post, path = "/remove-booking/", tag = "bookings",
    request_body = crate::openapi::RemoveBookingDoc,
    responses(
        (status = 200, description = "Removed", body = crate::openapi::MessageDoc),
        (status = 400, description = "Missing or non-numeric id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No such booking", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn remove_booking(
    State(state): State<ServerState>,
    Payload(req): Payload<RemoveBookingRequest>,
) -> Result<Json<Message>, ApiError> {
    let id = req.id()?.ok_or_else(|| ApiError::NotFound("Booking not found".into()))?;
    state.bookings.remove(id).await?;
    Ok(Json(Message::new("Booking removed")))
}
