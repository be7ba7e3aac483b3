use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::booking::{self, NewBooking};

use crate::errors::ServiceError;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<booking::Model>, ServiceError>;
    async fn insert(&self, input: &NewBooking) -> Result<booking::Model, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError>;
}

#[derive(Clone, Debug)]
pub struct SeaOrmBookingRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn list(&self) -> Result<Vec<booking::Model>, ServiceError> {
        Ok(booking::list(&self.db).await?)
    }

    async fn insert(&self, input: &NewBooking) -> Result<booking::Model, ServiceError> {
        Ok(booking::create(&self.db, input).await?)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(booking::delete_by_id(&self.db, id).await?)
    }
}
