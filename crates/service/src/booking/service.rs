use std::sync::Arc;

use tracing::{info, instrument};

use models::booking::{self, NewBooking};

use super::repository::BookingRepository;
use crate::errors::ServiceError;

pub struct BookingLedger<R: BookingRepository> {
    repo: Arc<R>,
}

impl<R: BookingRepository> BookingLedger<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<booking::Model>, ServiceError> {
        self.repo.list().await
    }

    /// Record a booking request. Several bookings may name the same plot, and
    /// the plot does not have to exist.
    #[instrument(skip(self, input), fields(plot_number = %input.plot_number))]
    pub async fn create(&self, input: NewBooking) -> Result<booking::Model, ServiceError> {
        let v = input.validated()?;
        let model = self.repo.insert(&v).await?;
        info!(id = model.id, plot_number = %model.plot_number, "booking_created");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::not_found("Booking"));
        }
        info!(id, "booking_removed");
        Ok(())
    }
}
