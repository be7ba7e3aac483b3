use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::plot::{self, NewPlot};

use crate::errors::ServiceError;

/// Record-store abstraction for plots.
#[async_trait]
pub trait PlotRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<plot::Model>, ServiceError>;
    async fn find_by_number(&self, plot_number: &str) -> Result<Option<plot::Model>, ServiceError>;
    /// Must report a duplicate `plot_number` as `ServiceError::Conflict`.
    async fn insert(&self, input: &NewPlot) -> Result<plot::Model, ServiceError>;
    async fn delete_by_number(&self, plot_number: &str) -> Result<bool, ServiceError>;

    async fn exists_by_number(&self, plot_number: &str) -> Result<bool, ServiceError> {
        Ok(self.find_by_number(plot_number).await?.is_some())
    }
}

/// SeaORM-backed repository implementation.
#[derive(Clone, Debug)]
pub struct SeaOrmPlotRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl PlotRepository for SeaOrmPlotRepository {
    async fn list(&self) -> Result<Vec<plot::Model>, ServiceError> {
        Ok(plot::list(&self.db).await?)
    }

    async fn find_by_number(&self, plot_number: &str) -> Result<Option<plot::Model>, ServiceError> {
        Ok(plot::find_by_number(&self.db, plot_number).await?)
    }

    async fn insert(&self, input: &NewPlot) -> Result<plot::Model, ServiceError> {
        Ok(plot::create(&self.db, input).await?)
    }

    async fn delete_by_number(&self, plot_number: &str) -> Result<bool, ServiceError> {
        Ok(plot::delete_by_number(&self.db, plot_number).await? > 0)
    }
}
