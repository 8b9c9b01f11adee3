//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{predictions, registry_meta};

/// Database row for the singleton registry header.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = registry_meta)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RegistryMetaRow {
    pub id: i32,
    pub owner: String,
    /// Stored as text; the threshold spans the full `u64` range.
    pub threshold: String,
    pub created_at: String,
}

/// Database row for a prediction (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = predictions)]
pub struct NewPredictionRow {
    pub submitter: String,
    pub value: i64,
    pub has_predicted: bool,
    pub submitted_at: String,
}

/// Database row for a prediction (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = predictions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PredictionRow {
    pub seq: i32,
    pub submitter: String,
    pub value: i64,
    pub has_predicted: bool,
    pub submitted_at: String,
}
