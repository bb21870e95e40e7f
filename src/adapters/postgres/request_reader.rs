//! PostgreSQL implementation of RequestReader.
//!
//! Reads the request-tracking tables (`request`, `users`, `event_type`,
//! `status`). The ranker never writes to them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, RequestId, Timestamp};
use crate::domain::request::{EventType, RequestDetail, RequestStatus, Requester};
use crate::ports::RequestReader;

const SELECT_REQUESTS: &str = r#"
    SELECT r.id, r.event_name, r.event_location, r.event_date_start, r.event_date_end,
           r.description, r.count_participant, r.created_at,
           u.id AS user_id, u.name AS user_name,
           et.id AS event_type_id, et.name AS event_type_name, et.priority AS event_type_priority,
           s.id AS status_id, s.name AS status_name
    FROM request r
    JOIN users u ON u.id = r.user_id
    JOIN event_type et ON et.id = r.event_type_id
    JOIN status s ON s.id = r.status_id
    WHERE r.is_delete = FALSE
"#;

/// PostgreSQL implementation of RequestReader.
#[derive(Clone)]
pub struct PostgresRequestReader {
    pool: PgPool,
}

impl PostgresRequestReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestReader for PostgresRequestReader {
    async fn find_by_id(&self, id: RequestId) -> Result<Option<RequestDetail>, DomainError> {
        let query = format!("{} AND r.id = $1", SELECT_REQUESTS);
        let row = sqlx::query(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch request", e))?;

        row.map(row_to_request).transpose()
    }

    async fn list_active(&self) -> Result<Vec<RequestDetail>, DomainError> {
        let query = format!("{} ORDER BY r.id", SELECT_REQUESTS);
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list requests", e))?;

        rows.into_iter().map(row_to_request).collect()
    }
}

fn db_error(action: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", action, e))
}

fn get<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

// Integer columns are BIGINT in the request-tracking schema.
fn row_to_request(row: sqlx::postgres::PgRow) -> Result<RequestDetail, DomainError> {
    let participants: i64 = get(&row, "count_participant")?;
    let priority: i64 = get(&row, "event_type_priority")?;

    Ok(RequestDetail {
        id: RequestId::new(get(&row, "id")?),
        requester: Requester {
            id: get(&row, "user_id")?,
            name: get(&row, "user_name")?,
        },
        event_name: get(&row, "event_name")?,
        event_location: get(&row, "event_location")?,
        event_start: Timestamp::from_datetime(get::<DateTime<Utc>>(&row, "event_date_start")?),
        event_end: Timestamp::from_datetime(get::<DateTime<Utc>>(&row, "event_date_end")?),
        description: get(&row, "description")?,
        event_type: EventType {
            id: get(&row, "event_type_id")?,
            name: get(&row, "event_type_name")?,
            priority: i32::try_from(priority).unwrap_or(i32::MAX),
        },
        status: RequestStatus {
            id: get(&row, "status_id")?,
            name: get(&row, "status_name")?,
        },
        participants: u32::try_from(participants.max(0)).unwrap_or(u32::MAX),
        created_at: Timestamp::from_datetime(get::<DateTime<Utc>>(&row, "created_at")?),
    })
}
