//! Technician profile records.
//!
//! A profile is optional: a user can hold the technician role before a
//! profile row exists for their email. The admin aggregation synthesizes
//! a stand-in in that case.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "technicians")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Matches `users.email` by convention only; no enforced constraint.
    pub email: String,
    pub name: String,
    pub designation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        email: &str,
        name: &str,
        designation: &str,
    ) -> Result<Self, DbErr> {
        let now = Utc::now();
        let technician = ActiveModel {
            email: Set(email.to_owned()),
            name: Set(name.to_owned()),
            designation: Set(designation.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        technician.insert(db).await
    }
}
