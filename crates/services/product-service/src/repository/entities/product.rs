//! Product database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Product;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product {
            id: model.id,
            name: model.name,
            price: model.price,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<&Product> for ActiveModel {
    fn from(product: &Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            name: Set(product.name.clone()),
            price: Set(product.price),
            created_at: Set(product.created_at),
            updated_at: Set(product.updated_at),
        }
    }
}
