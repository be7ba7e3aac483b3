use serde::{Deserialize, Serialize};

use crate::assets::{absolute_url, AssetStore, Upload};

/// Add-plot request after transport decoding. Missing text fields arrive as
/// empty strings and a missing file as `None`; the service rejects both.
#[derive(Debug, Clone, Default)]
pub struct AddPlotInput {
    pub title: String,
    pub location: String,
    pub price: String,
    pub plot_number: String,
    pub image: Option<Upload>,
}

/// Plot as returned to clients, with `image` resolved to an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotView {
    pub id: i32,
    pub plot_number: String,
    pub title: String,
    pub location: String,
    pub price: String,
    pub image: String,
}

impl PlotView {
    pub fn resolve(model: models::plot::Model, assets: &dyn AssetStore, origin: &str) -> Self {
        let image = absolute_url(origin, &assets.url(&model.image));
        Self {
            id: model.id,
            plot_number: model.plot_number,
            title: model.title,
            location: model.location,
            price: model.price,
            image,
        }
    }
}
