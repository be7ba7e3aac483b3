use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, validation};

pub const PLOT_NUMBER_MAX: usize = 100;
pub const TITLE_MAX: usize = 255;
pub const LOCATION_MAX: usize = 255;
pub const PRICE_MAX: usize = 100;
pub const IMAGE_KEY_MAX: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub plot_number: String,
    pub title: String,
    pub location: String,
    /// Free text as entered ("50 Lac", "1.5 Crore"); never parsed.
    pub price: String,
    /// Asset-store key of the plot image, relative to the media root.
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Field values for a new plot; `image` is an already-stored asset key.
#[derive(Clone, Debug)]
pub struct NewPlot {
    pub plot_number: String,
    pub title: String,
    pub location: String,
    pub price: String,
    pub image: String,
}

impl NewPlot {
    /// Trim every field and enforce presence and column widths.
    pub fn validated(&self) -> Result<NewPlot, errors::ModelError> {
        let mut v = self.validated_details()?;
        v.image = validation::required("image", &self.image, IMAGE_KEY_MAX)?.to_string();
        Ok(v)
    }

    /// Same as [`NewPlot::validated`] minus the image key, which callers may
    /// only know after storing the upload.
    pub fn validated_details(&self) -> Result<NewPlot, errors::ModelError> {
        Ok(NewPlot {
            plot_number: validate_plot_number(&self.plot_number)?.to_string(),
            title: validation::required("title", &self.title, TITLE_MAX)?.to_string(),
            location: validation::required("location", &self.location, LOCATION_MAX)?.to_string(),
            price: validation::required("price", &self.price, PRICE_MAX)?.to_string(),
            image: self.image.clone(),
        })
    }
}

pub fn validate_plot_number(plot_number: &str) -> Result<&str, errors::ModelError> {
    validation::required("plot_number", plot_number, PLOT_NUMBER_MAX)
}

/// Trimmed, non-blank lookup key. No width check: a key longer than any
/// stored number simply matches nothing.
pub fn plot_number_key(plot_number: &str) -> Result<&str, errors::ModelError> {
    validation::required("plot_number", plot_number, usize::MAX)
}

/// Insert a plot. A duplicate `plot_number` surfaces as `ModelError::Conflict`
/// from the unique index, regardless of any earlier existence check.
pub async fn create(db: &DatabaseConnection, input: &NewPlot) -> Result<Model, errors::ModelError> {
    let v = input.validated()?;
    let am = ActiveModel {
        plot_number: Set(v.plot_number),
        title: Set(v.title),
        location: Set(v.location),
        price: Set(v.price),
        image: Set(v.image),
        ..Default::default()
    };
    am.insert(db)
        .await
        .map_err(|e| errors::ModelError::from_db(e, "Plot number already exists"))
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_number(db: &DatabaseConnection, plot_number: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::PlotNumber.eq(plot_number))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Delete by business key; returns the number of rows removed (0 or 1).
pub async fn delete_by_number(db: &DatabaseConnection, plot_number: &str) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::PlotNumber.eq(plot_number))
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}
