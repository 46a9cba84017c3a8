//! Login account database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::UserDetails;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    pub password_hash: String,
    /// Comma separated granted authorities
    pub authorities: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for UserDetails {
    fn from(model: Model) -> Self {
        UserDetails {
            username: model.username,
            password_hash: model.password_hash,
            authorities: UserDetails::split_authorities(&model.authorities),
            created_at: model.created_at,
        }
    }
}
