//! Entry storage with SQLite
//!
//! Entries are inserted once, read back newest first, and removed by id.
//! There is no update path.

mod schema;

use anyhow::{Context, Result};
use chrono::Local;
use rusqlite::{params, params_from_iter, Connection};
use std::path::Path;

pub use schema::SCHEMA;

/// Date format used for the `date` column and for date filters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const SELECT_ENTRIES: &str = "SELECT id, date, journal, intention, dream, priorities, reflection, strategy
     FROM entries WHERE 1=1";

pub struct EntryStore {
    conn: Connection,
}

impl EntryStore {
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create database directory {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database {}", path.display()))?;
        tracing::debug!(path = %path.display(), "opened entry store");
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    // ============================================
    // WRITES
    // ============================================

    /// Append a new entry and return its assigned id
    pub fn insert(&self, entry: &NewEntry) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO entries (date, journal, intention, dream, priorities, reflection, strategy)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                entry.date,
                entry.journal,
                entry.intention,
                entry.dream,
                entry.priorities,
                entry.reflection,
                entry.strategy,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        tracing::info!(id, date = %entry.date, "saved entry");
        Ok(id)
    }

    /// Delete an entry by id. Returns false when no such entry existed.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?", params![id])?;

        if removed == 0 {
            tracing::debug!(id, "delete was a no-op");
        } else {
            tracing::info!(id, "deleted entry");
        }
        Ok(removed > 0)
    }

    // ============================================
    // QUERIES
    // ============================================

    /// Entries matching every filter that is set, newest id first
    pub fn query(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        let mut query = SELECT_ENTRIES.to_string();
        let mut values: Vec<String> = Vec::new();

        if let Some(date) = filter.date() {
            query.push_str(" AND date = ?");
            values.push(date.to_string());
        }

        if let Some(text) = filter.text() {
            query.push_str(" AND (journal LIKE ? ESCAPE '\\' OR intention LIKE ? ESCAPE '\\')");
            let pattern = format!("%{}%", escape_like(text));
            values.push(pattern.clone());
            values.push(pattern);
        }

        query.push_str(" ORDER BY id DESC");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), map_entry)?;
        let entries = rows.collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = entries.len(), "queried entries");
        Ok(entries)
    }

    pub fn get(&self, id: i64) -> Result<Option<Entry>> {
        let row = self.conn.query_row(
            &format!("{} AND id = ?", SELECT_ENTRIES),
            params![id],
            map_entry,
        );

        match row {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// The most recently inserted entry
    pub fn latest(&self) -> Result<Option<Entry>> {
        let row = self.conn.query_row(
            &format!("{} ORDER BY id DESC LIMIT 1", SELECT_ENTRIES),
            [],
            map_entry,
        );

        match row {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn map_entry(row: &rusqlite::Row) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        date: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        journal: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        intention: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        dream: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        priorities: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        reflection: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        strategy: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
    })
}

/// Escape LIKE wildcards so user text matches literally
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// ============================================
// ROW TYPES
// ============================================

/// A stored journaling session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub date: String,
    pub journal: String,
    pub intention: String,
    pub dream: String,
    pub priorities: String,
    pub reflection: String,
    pub strategy: String,
}

/// An entry that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub date: String,
    pub journal: String,
    pub intention: String,
    pub dream: String,
    pub priorities: String,
    pub reflection: String,
    pub strategy: String,
}

impl NewEntry {
    /// Build an entry stamped with today's local date
    pub fn today(
        journal: impl Into<String>,
        intention: impl Into<String>,
        dream: impl Into<String>,
        priorities: impl Into<String>,
        reflection: impl Into<String>,
        strategy: impl Into<String>,
    ) -> Self {
        Self {
            date: Local::now().format(DATE_FORMAT).to_string(),
            journal: journal.into(),
            intention: intention.into(),
            dream: dream.into(),
            priorities: priorities.into(),
            reflection: reflection.into(),
            strategy: strategy.into(),
        }
    }
}

/// Optional filters for [`EntryStore::query`]. Empty strings count as unset.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub date: Option<String>,
    pub text: Option<String>,
}

impl EntryFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn on_date(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            text: None,
        }
    }

    pub fn containing(text: impl Into<String>) -> Self {
        Self {
            date: None,
            text: Some(text.into()),
        }
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref().filter(|d| !d.is_empty())
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}
