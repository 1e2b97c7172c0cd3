//! Session entity model.

use sea_orm::entity::prelude::*;

/// One authenticated browser session.
///
/// Only the digest of the session token is stored; the raw token exists in
/// memory when the session is issued and in the client's cookie, nowhere
/// else.
///
/// # Database Schema
///
/// | Column      | Type                  | Description                               |
/// |-------------|-----------------------|-------------------------------------------|
/// | id          | INTEGER (Primary Key) | Store-assigned, kept across re-issue      |
/// | user_id     | INTEGER (Unique)      | References `users.id`                     |
/// | token_hash  | TEXT (Unique)         | SHA-256 of the raw token, base64url       |
/// | expires_at  | TIMESTAMPTZ NULL      | Absent when sessions never expire         |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Upserts are keyed on this column, which keeps one row per principal.
    #[sea_orm(unique)]
    pub user_id: i32,

    #[sea_orm(unique, column_type = "Text")]
    pub token_hash: String,

    pub expires_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::principal::Entity",
        from = "Column::UserId",
        to = "super::principal::Column::Id",
        on_delete = "Cascade"
    )]
    Principal,
}

impl Related<super::principal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Principal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether the session has passed its expiry at `now`.
    ///
    /// Sessions without an expiry never expire.
    pub fn is_expired_at(&self, now: DateTimeWithTimeZone) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}
