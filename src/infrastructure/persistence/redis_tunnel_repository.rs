//! Redis implementation of tunnel repository.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::entities::TunnelRecord;
use crate::domain::repositories::TunnelRepository;
use crate::error::AppError;

/// Hint passed to `SSCAN ... COUNT`.
const SCAN_COUNT: usize = 100;

/// Hash field holding the public URL of a tunnel.
const PUBLIC_URL_FIELD: &str = "public_url";

/// Redis repository matching tunnel names by prefix.
///
/// # Key Layout
///
/// ```text
/// <namespace>:tunnels      SET   of tunnel ids
/// <namespace>:<id>         HASH  { public_url => "https://..." }
/// ```
///
/// Uses `ConnectionManager` so the connection is shared and re-established
/// transparently after drops.
pub struct RedisTunnelRepository {
    conn: ConnectionManager,
    namespace: String,
}

impl RedisTunnelRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection cannot be
    /// established, or the PING fails.
    pub async fn connect(redis_url: &str, namespace: &str) -> redis::RedisResult<Self> {
        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("✓ Connected to Redis (namespace: {})", namespace);

        Ok(Self::new(manager, namespace))
    }

    /// Wraps an existing connection manager.
    pub fn new(conn: ConnectionManager, namespace: &str) -> Self {
        Self {
            conn,
            namespace: namespace.to_string(),
        }
    }

    fn set_key(&self) -> String {
        format!("{}:tunnels", self.namespace)
    }

    fn record_key(&self, id: &str) -> String {
        format!("{}:{}", self.namespace, id)
    }

    /// Returns the first set member starting with `query`, scanning until the
    /// cursor wraps around.
    async fn first_matching_id(&self, query: &str) -> Result<Option<String>, AppError> {
        let set_key = self.set_key();
        let pattern = format!("{}*", escape_glob(query));
        let mut conn = self.conn.clone();
        let mut cursor: u64 = 0;

        loop {
            let (next, members): (u64, Vec<String>) = redis::cmd("SSCAN")
                .arg(&set_key)
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_COUNT)
                .query_async(&mut conn)
                .await?;

            if let Some(id) = members.into_iter().next() {
                return Ok(Some(id));
            }

            if next == 0 {
                return Ok(None);
            }
            cursor = next;
        }
    }
}

#[async_trait]
impl TunnelRepository for RedisTunnelRepository {
    async fn find_by_query(&self, query: &str) -> Result<Option<TunnelRecord>, AppError> {
        let Some(id) = self.first_matching_id(query).await? else {
            debug!("SSCAN {} -> no match for {}", self.set_key(), query);
            return Ok(None);
        };

        let mut conn = self.conn.clone();
        let public_url: Option<String> = conn.hget(self.record_key(&id), PUBLIC_URL_FIELD).await?;

        debug!("SSCAN {} -> {}", self.set_key(), id);

        Ok(Some(TunnelRecord::new(id, public_url)))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

/// Escapes Redis glob metacharacters so the query matches literally.
fn escape_glob(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
