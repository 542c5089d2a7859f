//! PostgreSQL implementation of tunnel repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::TunnelRecord;
use crate::domain::repositories::TunnelRepository;
use crate::error::AppError;

/// PostgreSQL repository matching tunnel names by substring.
///
/// Reads `name` and `proxy` from a single table. The table name comes from
/// configuration and is validated as a plain identifier before it reaches SQL.
pub struct PgTunnelRepository {
    pool: Arc<PgPool>,
    select_sql: String,
}

impl PgTunnelRepository {
    /// Creates a new repository over `table` with a database connection pool.
    pub fn new(pool: Arc<PgPool>, table: &str) -> Self {
        let select_sql = format!(
            "SELECT name, proxy FROM {} WHERE name LIKE $1 ESCAPE '\\' LIMIT 1",
            table
        );

        Self { pool, select_sql }
    }
}

#[async_trait]
impl TunnelRepository for PgTunnelRepository {
    async fn find_by_query(&self, query: &str) -> Result<Option<TunnelRecord>, AppError> {
        let pattern = format!("%{}%", escape_like(query));

        let row = sqlx::query_as::<_, (String, Option<String>)>(&self.select_sql)
            .bind(pattern.as_str())
            .fetch_optional(self.pool.as_ref())
            .await?;

        debug!("LIKE {} -> {}", pattern, row.is_some());

        Ok(row.map(|(name, proxy)| TunnelRecord::new(name, proxy)))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

/// Escapes `LIKE` wildcards so the query matches literally.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_plain() {
        assert_eq!(escape_like("demo-app"), "demo-app");
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%_off"), "100\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
