use sea_orm::{
    entity::prelude::*, DatabaseConnection, NotSet, QueryFilter, QueryOrder, Set, TryIntoModel,
};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a new employee; the store assigns the id. Name and title are
/// free-form text, empty strings included.
pub async fn create(db: &DatabaseConnection, name: &str, title: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        title: Set(title.to_string()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Insert when the primary key is unset, update otherwise; returns the
/// stored record with its id populated.
pub async fn save(db: &DatabaseConnection, employee: ActiveModel) -> Result<Model, ModelError> {
    let saved = employee.save(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    saved.try_into_model().map_err(|e| ModelError::Db(e.to_string()))
}

/// All employees in insertion order. Ids are never reused, so `ORDER BY id`
/// recovers it.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Exact-match lookup on `name`; the argument travels as a bound parameter.
pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .filter(Column::Name.eq(name))
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
