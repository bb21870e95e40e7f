//! PostgreSQL implementation of HistoryRepository.
//!
//! Persists records in the `ahp_history` table using the text-column row
//! shape from `domain::history::HistoryRow`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, HistoryId};
use crate::domain::history::{HistoryDraft, HistoryRecord, HistoryRow};
use crate::ports::{HistoryRepository, ListOptions};

const SELECT_COLUMNS: &str = r#"
    SELECT id, criteria, criteria_comparison, alternatives, alternative_comparison,
           priority_global, reference_request, is_delete, created_at
    FROM ahp_history
"#;

/// PostgreSQL implementation of HistoryRepository.
#[derive(Clone)]
pub struct PostgresHistoryRepository {
    pool: PgPool,
}

impl PostgresHistoryRepository {
    /// Creates a new PostgresHistoryRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryRepository for PostgresHistoryRepository {
    async fn insert(&self, draft: HistoryDraft) -> Result<HistoryRecord, DomainError> {
        let row = HistoryRow::encode(&draft)?;

        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO ahp_history (
                criteria, criteria_comparison, alternatives, alternative_comparison,
                priority_global, reference_request, is_delete, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&row.criteria)
        .bind(&row.criteria_comparison)
        .bind(&row.alternatives)
        .bind(&row.alternative_comparison)
        .bind(&row.priority_global)
        .bind(row.reference_request)
        .bind(row.is_delete)
        .bind(row.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("insert AHP history", e))?;

        Ok(HistoryRecord::from_draft(HistoryId::new(id)?, draft))
    }

    async fn find_by_id(&self, id: HistoryId) -> Result<Option<HistoryRecord>, DomainError> {
        let query = format!("{} WHERE id = $1 AND is_delete = FALSE", SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch AHP history", e))?;

        row.map(|row| row_to_history(row)?.decode()).transpose()
    }

    async fn list(&self, options: &ListOptions) -> Result<Vec<HistoryRecord>, DomainError> {
        let query = format!(
            "{} WHERE is_delete = FALSE ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(options.limit.map(i64::from))
            .bind(options.offset_or_zero() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list AHP histories", e))?;

        rows.into_iter()
            .map(|row| row_to_history(row)?.decode())
            .collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM ahp_history WHERE is_delete = FALSE")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| db_error("count AHP histories", e))?;

        Ok(result.0.max(0) as u64)
    }

    async fn soft_delete(&self, id: HistoryId) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE ahp_history SET is_delete = TRUE WHERE id = $1 AND is_delete = FALSE",
        )
        .bind(id.value())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("delete AHP history", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::HistoryNotFound,
                format!("AHP history not found: {}", id),
            ));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn db_error(action: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", action, e))
}

fn row_to_history(row: sqlx::postgres::PgRow) -> Result<HistoryRow, DomainError> {
    let column = |name: &str, e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    };

    Ok(HistoryRow {
        id: row.try_get("id").map_err(|e| column("id", e))?,
        criteria: row.try_get("criteria").map_err(|e| column("criteria", e))?,
        criteria_comparison: row
            .try_get("criteria_comparison")
            .map_err(|e| column("criteria_comparison", e))?,
        alternatives: row
            .try_get("alternatives")
            .map_err(|e| column("alternatives", e))?,
        alternative_comparison: row
            .try_get("alternative_comparison")
            .map_err(|e| column("alternative_comparison", e))?,
        priority_global: row
            .try_get("priority_global")
            .map_err(|e| column("priority_global", e))?,
        reference_request: row
            .try_get("reference_request")
            .map_err(|e| column("reference_request", e))?,
        is_delete: row.try_get("is_delete").map_err(|e| column("is_delete", e))?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(|e| column("created_at", e))?,
    })
}
