//! Principal entity model.

use sea_orm::entity::prelude::*;

/// A registered identity.
///
/// # Database Schema
///
/// | Column        | Type                 | Description                          |
/// |---------------|----------------------|--------------------------------------|
/// | id            | INTEGER (Primary Key)| Store-assigned identifier            |
/// | email         | TEXT (Unique)        | Trimmed, lower-cased email           |
/// | password_hash | TEXT                 | Argon2id PHC string                  |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Always stored normalized, see [`normalize_email`].
    #[sea_orm(unique, column_type = "Text")]
    pub email: String,

    #[sea_orm(column_type = "Text")]
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::session::Entity")]
    Session,
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Canonical form of an email for storage and lookup.
///
/// Emails compare case-insensitively, so they are lower-cased before they
/// ever reach the database. Surrounding whitespace from form input is
/// dropped as well.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
