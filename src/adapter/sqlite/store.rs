//! SQLite registry store implementation.
//!
//! Provides persistent storage for registry state using SQLite and Diesel ORM.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::connection::{connect, create_pool, run_migrations, DbPool};
use super::model::{NewPredictionRow, PredictionRow, RegistryMetaRow};
use super::schema::{predictions, registry_meta};
use crate::domain::{Prediction, RegistrySnapshot, SubmitterId};
use crate::error::{Error, RegistryError, Result};
use crate::port::RegistryStore;

/// Primary key of the single `registry_meta` row.
const META_ID: i32 = 1;

/// SQLite-backed registry store.
///
/// Implements the [`RegistryStore`] trait for durable registry state.
pub struct SqliteRegistryStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteRegistryStore {
    /// Create a new SQLite registry store with the given connection pool.
    ///
    /// The pool must already have migrations applied.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open the database at `database_url`, applying pending migrations.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be created or migrations fail.
    pub fn open(database_url: &str) -> Result<Self> {
        let pool = create_pool(database_url)?;
        run_migrations(&pool)?;
        debug!(database_url, "Registry database opened");
        Ok(Self::new(pool))
    }

    fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| Error::Parse(e.to_string()))
    }

    fn to_row(prediction: &Prediction) -> NewPredictionRow {
        NewPredictionRow {
            submitter: prediction.submitter().as_str().to_string(),
            value: prediction.value(),
            has_predicted: prediction.is_submitted(),
            submitted_at: prediction.submitted_at().to_rfc3339(),
        }
    }

    fn from_row(row: PredictionRow) -> Result<Prediction> {
        Ok(Prediction::restore(
            SubmitterId::from(row.submitter),
            row.value,
            row.has_predicted,
            Self::parse_timestamp(&row.submitted_at)?,
        ))
    }
}

impl RegistryStore for SqliteRegistryStore {
    fn load(&self) -> Result<Option<RegistrySnapshot>> {
        let mut conn = connect(&self.pool)?;

        let meta: Option<RegistryMetaRow> = registry_meta::table
            .find(META_ID)
            .select(RegistryMetaRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(meta) = meta else {
            return Ok(None);
        };

        let threshold: u64 = meta.threshold.parse().map_err(|_| {
            Error::Parse(format!("invalid stored threshold '{}'", meta.threshold))
        })?;

        let rows: Vec<PredictionRow> = predictions::table
            .order(predictions::seq.asc())
            .select(PredictionRow::as_select())
            .load(&mut conn)?;

        let predictions = rows
            .into_iter()
            .map(Self::from_row)
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(RegistrySnapshot {
            owner: SubmitterId::from(meta.owner),
            threshold,
            predictions,
        }))
    }

    fn initialize(&self, owner: &SubmitterId, threshold: u64) -> Result<()> {
        let mut conn = connect(&self.pool)?;

        let row = RegistryMetaRow {
            id: META_ID,
            owner: owner.as_str().to_string(),
            threshold: threshold.to_string(),
            created_at: Utc::now().to_rfc3339(),
        };

        diesel::insert_or_ignore_into(registry_meta::table)
            .values(&row)
            .execute(&mut conn)?;

        Ok(())
    }

    fn record(&self, prediction: &Prediction) -> Result<()> {
        let mut conn = connect(&self.pool)?;

        // The UNIQUE constraint on `submitter` catches resubmissions made
        // through another connection to the same database.
        diesel::insert_into(predictions::table)
            .values(&Self::to_row(prediction))
            .execute(&mut conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    Error::from(RegistryError::AlreadyPredicted {
                        submitter: prediction.submitter().clone(),
                    })
                }
                other => Error::from(other),
            })?;

        Ok(())
    }
}
