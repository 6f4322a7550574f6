//! Shared query-and-map routine.
//!
//! Every DAO method funnels through these helpers: execute a prepared
//! statement against a pooled connection, map rows via `FromRow`, log
//! elapsed time and row count, and wrap any driver failure as
//! [`FacetsError::Read`] carrying the SQL text. The connection is checked
//! back into the pool before the call returns on every path.

use facets_core::{FacetsError, FacetsResult};
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::{FromRow, MySql, MySqlPool};
use std::time::Instant;
use tracing::{debug, warn};

/// Executes a query and maps every result row.
///
/// An empty result set is an empty `Vec`, never an error.
pub async fn fetch_rows<'q, T>(
    query: QueryAs<'q, MySql, T, MySqlArguments>,
    pool: &MySqlPool,
    sql: &str,
) -> FacetsResult<Vec<T>>
where
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let started = Instant::now();
    let rows = query
        .fetch_all(pool)
        .await
        .map_err(|e| FacetsError::read(sql, e))?;

    debug!(
        rows = rows.len(),
        elapsed_ms = elapsed_ms(started),
        sql,
        "query complete"
    );
    Ok(rows)
}

/// Executes a single-result query.
///
/// The statement is executed unaltered; if it happens to match more than
/// one row, the surplus is logged and the first row wins.
pub async fn fetch_first<'q, T>(
    query: QueryAs<'q, MySql, T, MySqlArguments>,
    pool: &MySqlPool,
    sql: &str,
) -> FacetsResult<Option<T>>
where
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let rows = fetch_rows(query, pool, sql).await?;
    Ok(first_row(rows, sql))
}

/// Executes a scalar probe (COUNT, EXISTS).
pub async fn fetch_scalar<'q, T>(
    query: QueryScalar<'q, MySql, T, MySqlArguments>,
    pool: &MySqlPool,
    sql: &str,
) -> FacetsResult<T>
where
    T: Send + Unpin,
    (T,): for<'r> FromRow<'r, MySqlRow>,
{
    let started = Instant::now();
    let value = query
        .fetch_one(pool)
        .await
        .map_err(|e| FacetsError::read(sql, e))?;

    debug!(elapsed_ms = elapsed_ms(started), sql, "scalar query complete");
    Ok(value)
}

/// Reduces a result set to at most one row.
///
/// Multiple rows on a single-result accessor are tolerated with a warning
/// so a bad join in a query definition surfaces in logs instead of
/// failing the caller.
pub fn first_row<T>(mut rows: Vec<T>, sql: &str) -> Option<T> {
    if rows.len() > 1 {
        warn!(
            rows = rows.len(),
            sql, "single-row query matched multiple rows; returning the first"
        );
    }
    if rows.is_empty() {
        None
    } else {
        Some(rows.swap_remove(0))
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
