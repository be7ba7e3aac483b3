use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::plot::{plot_number_key, NewPlot};

use super::domain::{AddPlotInput, PlotView};
use super::repository::PlotRepository;
use crate::assets::AssetStore;
use crate::errors::ServiceError;

/// Application service owning plot listings and their images.
pub struct PlotCatalog<R: PlotRepository, A: AssetStore> {
    repo: Arc<R>,
    assets: Arc<A>,
}

impl<R: PlotRepository, A: AssetStore> PlotCatalog<R, A> {
    pub fn new(repo: Arc<R>, assets: Arc<A>) -> Self { Self { repo, assets } }

    /// All plots in storage order, images resolved against `origin`.
    pub async fn list(&self, origin: &str) -> Result<Vec<PlotView>, ServiceError> {
        let rows = self.repo.list().await?;
        Ok(rows
            .into_iter()
            .map(|m| PlotView::resolve(m, self.assets.as_ref(), origin))
            .collect())
    }

    /// Validate, store the image, then insert.
    ///
    /// The existence check only spares a pointless upload in the common case;
    /// the unique index decides. When the insert loses that race the freshly
    /// stored image is deleted again.
    #[instrument(skip(self, input, origin), fields(plot_number = %input.plot_number))]
    pub async fn add(&self, input: AddPlotInput, origin: &str) -> Result<PlotView, ServiceError> {
        let draft = NewPlot {
            plot_number: input.plot_number,
            title: input.title,
            location: input.location,
            price: input.price,
            image: String::new(),
        }
        .validated_details()?;
        // a part without a filename is a plain text field, not a file
        let upload = input
            .image
            .filter(|u| !u.is_empty() && u.filename.is_some())
            .ok_or_else(|| ServiceError::Validation("image is required".into()))?;
        upload.image_extension()?;

        if self.repo.exists_by_number(&draft.plot_number).await? {
            return Err(ServiceError::Conflict("Plot number already exists".into()));
        }

        let key = self.assets.put(&upload).await?;
        let record = NewPlot { image: key.clone(), ..draft };
        match self.repo.insert(&record).await {
            Ok(model) => {
                info!(id = model.id, plot_number = %model.plot_number, image = %model.image, "plot_created");
                Ok(PlotView::resolve(model, self.assets.as_ref(), origin))
            }
            Err(e) => {
                if let Err(cleanup) = self.assets.remove(&key).await {
                    warn!(%key, error = %cleanup, "orphaned asset after failed insert");
                }
                Err(e)
            }
        }
    }

    /// Delete by business key. Bookings naming the plot are left alone; the
    /// image is removed best-effort.
    #[instrument(skip(self))]
    pub async fn remove(&self, plot_number: &str) -> Result<(), ServiceError> {
        let plot_number = plot_number_key(plot_number)?;
        let existing = self
            .repo
            .find_by_number(plot_number)
            .await?
            .ok_or_else(|| ServiceError::not_found("Plot"))?;

        if !self.repo.delete_by_number(plot_number).await? {
            // removed concurrently between lookup and delete
            return Err(ServiceError::not_found("Plot"));
        }
        info!(id = existing.id, %plot_number, "plot_removed");

        if let Err(e) = self.assets.remove(&existing.image).await {
            warn!(key = %existing.image, error = %e, "plot image not removed");
        }
        Ok(())
    }
}
