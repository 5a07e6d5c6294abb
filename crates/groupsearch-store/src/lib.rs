//! groupsearch-store — SQLite-backed [`GroupStore`].
//!
//! Connections come from an r2d2 pool so concurrent searches do not serialise
//! on a single handle. Every query runs on tokio's blocking pool; if the
//! awaiting request is dropped the running statement is interrupted rather
//! than left to finish for nobody.

pub mod error;
pub mod rows;

pub use error::{StoreError, StoreResult};
pub use r2d2_sqlite::rusqlite;

use async_trait::async_trait;
use groupsearch_core::{Group, GroupStore, NewGroup, QueryParam, RankedQuery, SearchError};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, params_from_iter, types::Value, Connection, InterruptHandle};
use std::path::Path;
use std::sync::{Arc, Mutex};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS groups (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        name        TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        created_at  TEXT NOT NULL
    );
"#;

/// Thread-safe group store over a pooled SQLite database.
#[derive(Clone)]
pub struct SqliteGroupStore {
    pool: Pool<SqliteConnectionManager>,
}

impl SqliteGroupStore {
    /// Open or create a database at `path` with up to `pool_size` connections.
    pub fn open<P: AsRef<Path>>(path: P, pool_size: u32) -> StoreResult<Self> {
        let manager = SqliteConnectionManager::file(path).with_init(|conn| {
            conn.execute_batch(
                "
                PRAGMA journal_mode=WAL;
                PRAGMA synchronous=NORMAL;
                PRAGMA busy_timeout=5000;
                ",
            )
        });

        let pool = Pool::builder().max_size(pool_size.max(1)).build(manager)?;

        let store = Self { pool };
        store.setup_schema()?;
        Ok(store)
    }

    /// Open a private in-memory database.
    ///
    /// Limited to one connection that is never recycled, since every new
    /// in-memory connection would be a fresh, empty database.
    pub fn open_in_memory() -> StoreResult<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .build(manager)?;

        let store = Self { pool };
        store.setup_schema()?;
        Ok(store)
    }

    fn get_conn(&self) -> StoreResult<PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }

    fn setup_schema(&self) -> StoreResult<()> {
        self.get_conn()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Insert one group and return it with its assigned id.
    pub fn insert(&self, group: &NewGroup) -> StoreResult<Group> {
        let conn = self.get_conn()?;
        insert_group(&conn, group)
    }

    /// Insert `groups` in a single transaction.
    pub fn insert_many(&self, groups: &[NewGroup]) -> StoreResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn.transaction()?;
        for group in groups {
            insert_group(&tx, group)?;
        }
        tx.commit()?;
        tracing::info!(count = groups.len(), "store: groups inserted");
        Ok(groups.len())
    }

    pub fn count(&self) -> StoreResult<usize> {
        let conn = self.get_conn()?;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM groups", [], |row| row.get(0))?;
        Ok(usize::try_from(n).unwrap_or(0))
    }
}

fn insert_group(conn: &Connection, group: &NewGroup) -> StoreResult<Group> {
    conn.execute(
        "INSERT INTO groups (name, description, created_at) VALUES (?1, ?2, ?3)",
        params![
            group.name,
            group.description,
            rows::encode_timestamp(&group.created_at)
        ],
    )?;
    Ok(Group {
        id: conn.last_insert_rowid(),
        name: group.name.clone(),
        description: group.description.clone(),
        created_at: group.created_at,
    })
}

fn to_value(param: &QueryParam) -> Value {
    match param {
        QueryParam::Integer(n) => Value::Integer(*n),
        QueryParam::Text(s) => Value::Text(s.clone()),
    }
}

fn run_ranked(conn: &Connection, sql: &str, params: &[Value]) -> StoreResult<Vec<Group>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let mut cursor = stmt.query(params_from_iter(params.iter()))?;
    let mut groups = Vec::new();
    while let Some(row) = cursor.next()? {
        groups.push(rows::decode_group(row)?);
    }
    Ok(groups)
}

/// Interrupts the connection's running statement if dropped before the
/// blocking task clears the slot.
///
/// The slot is cleared under the lock before the connection returns to the
/// pool, so a late drop can never interrupt a query from another request.
struct InterruptOnDrop {
    slot: Arc<Mutex<Option<InterruptHandle>>>,
}

impl Drop for InterruptOnDrop {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.slot.lock() {
            if let Some(handle) = slot.take() {
                tracing::debug!("store: search abandoned, interrupting query");
                handle.interrupt();
            }
        }
    }
}

#[async_trait]
impl GroupStore for SqliteGroupStore {
    async fn fetch_ranked(&self, query: &RankedQuery) -> Result<Vec<Group>, SearchError> {
        let pool = self.pool.clone();
        let conn = tokio::task::spawn_blocking(move || pool.get())
            .await
            .map_err(StoreError::from)?
            .map_err(StoreError::from)?;

        let slot = Arc::new(Mutex::new(Some(conn.get_interrupt_handle())));
        let _guard = InterruptOnDrop { slot: slot.clone() };

        let sql = query.sql.clone();
        let params: Vec<Value> = query.params.iter().map(to_value).collect();
        let result = tokio::task::spawn_blocking(move || {
            let result = run_ranked(&conn, &sql, &params);
            if let Ok(mut slot) = slot.lock() {
                slot.take();
            }
            result
        })
        .await
        .map_err(StoreError::from)?;

        result.map_err(|err| {
            tracing::warn!(error = %err, "store: ranked query failed");
            SearchError::from(err)
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
