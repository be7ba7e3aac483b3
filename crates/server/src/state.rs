use std::sync::Arc;

use configs::AppConfig;
use sea_orm::DatabaseConnection;
use service::assets::LocalAssetStore;
use service::booking::{repository::SeaOrmBookingRepository, BookingLedger};
use service::plot::{repository::SeaOrmPlotRepository, PlotCatalog};

pub type Plots = PlotCatalog<SeaOrmPlotRepository, LocalAssetStore>;
pub type Bookings = BookingLedger<SeaOrmBookingRepository>;

/// Per-request shared state; cloning only bumps reference counts.
#[derive(Clone)]
pub struct ServerState {
    pub plots: Arc<Plots>,
    pub bookings: Arc<Bookings>,
    pub config: Arc<AppConfig>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        let assets = Arc::new(LocalAssetStore::from_config(&config.media));
        let plots = PlotCatalog::new(Arc::new(SeaOrmPlotRepository { db: db.clone() }), assets);
        let bookings = BookingLedger::new(Arc::new(SeaOrmBookingRepository { db }));
        Self {
            plots: Arc::new(plots),
            bookings: Arc::new(bookings),
            config: Arc::new(config),
        }
    }
}
