//! SQLite schema definition
//!
//! A single flat table. Rows are written once and only ever deleted.

pub const SCHEMA: &str = r#"
-- One row per journaling session
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT,                             -- 'YYYY-MM-DD', local creation date
    journal TEXT,
    intention TEXT,
    dream TEXT,
    priorities TEXT,                       -- free-form comma list
    reflection TEXT,                       -- may be empty
    strategy TEXT                          -- may be empty
);

CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
"#;
