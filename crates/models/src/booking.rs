use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, validation};

pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 254;
pub const PHONE_MAX: usize = 15;
pub const CNIC_MAX: usize = 15;
pub const PLOT_NUMBER_MAX: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cnic: String,
    /// Refers to `plot.plot_number` by value only; not checked.
    pub plot_number: String,
    pub booking_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Requester-supplied booking fields. There is no `booking_date` here: the
/// timestamp is always assigned at insert.
#[derive(Clone, Debug, Default)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cnic: String,
    pub plot_number: String,
}

impl NewBooking {
    pub fn validated(&self) -> Result<NewBooking, errors::ModelError> {
        Ok(NewBooking {
            name: validation::required("name", &self.name, NAME_MAX)?.to_string(),
            email: validation::email("email", &self.email, EMAIL_MAX)?.to_string(),
            phone: validation::required("phone", &self.phone, PHONE_MAX)?.to_string(),
            cnic: validation::required("cnic", &self.cnic, CNIC_MAX)?.to_string(),
            plot_number: validation::required("plot_number", &self.plot_number, PLOT_NUMBER_MAX)?.to_string(),
        })
    }
}

pub async fn create(db: &DatabaseConnection, input: &NewBooking) -> Result<Model, errors::ModelError> {
    let v = input.validated()?;
    let am = ActiveModel {
        name: Set(v.name),
        email: Set(v.email),
        phone: Set(v.phone),
        cnic: Set(v.cnic),
        plot_number: Set(v.plot_number),
        booking_date: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Hard delete; `false` when no row had that id.
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
