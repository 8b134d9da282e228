use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// All rows, lowest id first.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Insert a new row; the database assigns `id`.
pub async fn insert(db: &DatabaseConnection, title: &str, author: &str, isbn: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        title: Set(title.to_string()),
        author: Set(author.to_string()),
        isbn: Set(isbn.to_string()),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite title, author and isbn of the row with `id`.
pub async fn update(db: &DatabaseConnection, id: i64, title: &str, author: &str, isbn: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Unchanged(id),
        title: Set(title.to_string()),
        author: Set(author.to_string()),
        isbn: Set(isbn.to_string()),
    };
    am.update(db).await.map_err(|e| match e {
        DbErr::RecordNotUpdated => ModelError::NotFound(format!("book {id}")),
        other => other.into(),
    })
}

/// Returns whether a row was removed.
pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
