//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, OptionalExtension, Transaction, params};
use crate::{Error, Result};
use crate::snippet::Snippet;
use super::schema;

/// SQLite-backed storage for snippets.
///
/// Owns the single connection used by one CLI invocation. Every operation
/// runs inside its own transaction; a transaction dropped on an error path
/// rolls back.
pub struct SnippetStore {
    conn: Connection,
}

impl SnippetStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!("Connecting to {}", path.display());
        let conn = Connection::open(path).map_err(|source| Error::Connection {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        // SQLite connects lazily; a locked or non-database file fails here.
        store.initialize_schema().map_err(|source| Error::Connection {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Database connection established.");
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Apply connection settings and create the schema
    fn initialize_schema(&self) -> rusqlite::Result<()> {
        for pragma in schema::PRAGMAS {
            self.conn.execute_batch(pragma)?;
        }
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Release the connection, surfacing any error from closing it.
    ///
    /// Dropping the store also closes the connection, but swallows the error.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Storage(e))?;
        tracing::debug!("Database connection closed.");
        Ok(())
    }

    // ========== Write Operations ==========

    /// Store a snippet under `name`, overwriting the content of an existing name.
    ///
    /// The insert runs inside a savepoint. A uniqueness violation rolls the
    /// savepoint back and the content is updated instead; any other failure
    /// propagates and the surrounding transaction is rolled back on drop.
    pub fn put(&mut self, name: &str, content: &str) -> Result<Snippet> {
        tracing::info!("Storing snippet {:?}: {:?}", name, content);
        let mut tx = self.conn.transaction()?;

        let inserted = {
            let mut sp = tx.savepoint()?;
            match sp.execute(
                "INSERT INTO snippets (keyword, message) VALUES (?1, ?2)",
                params![name, content],
            ) {
                Ok(_) => {
                    sp.commit()?;
                    true
                }
                Err(err) if is_unique_violation(&err) => {
                    tracing::debug!("Snippet {:?} exists, updating instead", name);
                    sp.rollback()?;
                    false
                }
                Err(err) => return Err(err.into()),
            }
        };

        if !inserted {
            tx.execute(
                "UPDATE snippets SET message = ?1 WHERE keyword = ?2",
                params![content, name],
            )?;
        }
        tx.commit()?;

        tracing::debug!("Snippet stored successfully.");
        Ok(Snippet::new(name, content))
    }

    // ========== Read Operations ==========

    /// Retrieve the content stored under `name`
    pub fn get(&mut self, name: &str) -> Result<Option<String>> {
        tracing::info!("Retrieving snippet {:?}", name);
        let tx = self.conn.transaction()?;
        let content = tx
            .query_row(
                "SELECT message FROM snippets WHERE keyword = ?1",
                [name],
                |row| row.get(0),
            )
            .optional()?;
        tx.commit()?;
        tracing::debug!("Snippet retrieved successfully.");
        Ok(content)
    }

    /// Retrieve the name of a snippet whose content is exactly `content`.
    ///
    /// When several snippets share the content, the first row SQLite
    /// returns wins.
    pub fn get_name(&mut self, content: &str) -> Result<Option<String>> {
        tracing::info!("Retrieving name {:?}", content);
        let tx = self.conn.transaction()?;
        let name = tx
            .query_row(
                "SELECT keyword FROM snippets WHERE message = ?1 LIMIT 1",
                [content],
                |row| row.get(0),
            )
            .optional()?;
        tx.commit()?;
        tracing::debug!("Name retrieved successfully.");
        Ok(name)
    }

    /// Find names whose content matches a `LIKE` pattern.
    ///
    /// The caller supplies the wildcards (`%foo%` for a substring match).
    pub fn search(&mut self, pattern: &str) -> Result<Vec<String>> {
        tracing::info!("Searching snippets with {:?}", pattern);
        let tx = self.conn.transaction()?;
        let names = collect_keywords(
            &tx,
            "SELECT keyword FROM snippets WHERE message LIKE ?1",
            [pattern],
        )?;
        tx.commit()?;
        tracing::debug!("Search returned {} names.", names.len());
        Ok(names)
    }

    /// All names, ordered ascending
    pub fn catalog(&mut self) -> Result<Vec<String>> {
        tracing::info!("Querying the keywords");
        let tx = self.conn.transaction()?;
        let names = collect_keywords(&tx, "SELECT keyword FROM snippets ORDER BY keyword", [])?;
        tx.commit()?;
        tracing::debug!("Catalog returned {} names.", names.len());
        Ok(names)
    }

    /// Count all snippets
    pub fn count(&mut self) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let count: i64 = tx.query_row("SELECT COUNT(*) FROM snippets", [], |row| row.get(0))?;
        tx.commit()?;
        Ok(count as usize)
    }
}

/// Run a single-column keyword query and collect every row.
///
/// Row errors propagate instead of being skipped.
fn collect_keywords<P: rusqlite::Params>(
    tx: &Transaction<'_>,
    sql: &str,
    params: P,
) -> Result<Vec<String>> {
    let mut stmt = tx.prepare(sql)?;
    let names = stmt
        .query_map(params, |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(names)
}

/// Whether an error is a UNIQUE / PRIMARY KEY constraint violation
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _) => matches!(
            sqlite_err.extended_code,
            rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
        ),
        _ => false,
    }
}
