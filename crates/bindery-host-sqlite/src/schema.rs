//! SQL schema for the SQLite host.
//!
//! Executed once at connection startup. `AUTOINCREMENT` keeps item and user
//! ids strictly increasing and nonzero, which the REST contract relies on
//! (id 0 means "no item").

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS content_types (
    name          TEXT PRIMARY KEY,
    singular_name TEXT NOT NULL,
    taxonomies    TEXT NOT NULL    -- comma-separated taxonomy names
);

CREATE TABLE IF NOT EXISTS items (
    item_id      INTEGER PRIMARY KEY AUTOINCREMENT,
    content_type TEXT NOT NULL,
    title        TEXT NOT NULL DEFAULT '',
    excerpt      TEXT NOT NULL DEFAULT '',
    author_id    INTEGER NOT NULL DEFAULT 0,
    status       TEXT NOT NULL,   -- 'published' | 'draft'
    created_at   TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

CREATE TABLE IF NOT EXISTS terms (
    term_id  INTEGER PRIMARY KEY AUTOINCREMENT,
    taxonomy TEXT NOT NULL,
    name     TEXT NOT NULL,
    UNIQUE (taxonomy, name)
);

-- Many-to-many attachment of terms to items.
CREATE TABLE IF NOT EXISTS item_terms (
    item_id INTEGER NOT NULL,
    term_id INTEGER NOT NULL REFERENCES terms(term_id),
    UNIQUE (item_id, term_id)
);

CREATE TABLE IF NOT EXISTS users (
    user_id       INTEGER PRIMARY KEY AUTOINCREMENT,
    login         TEXT NOT NULL,
    password_hash TEXT NOT NULL,   -- argon2 PHC string, never clear text
    first_name    TEXT NOT NULL DEFAULT '',
    last_name     TEXT NOT NULL DEFAULT '',
    display_name  TEXT NOT NULL DEFAULT '',
    role          TEXT NOT NULL,
    created_at    TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS items_type_status_idx ON items(content_type, status);
CREATE INDEX IF NOT EXISTS item_terms_item_idx   ON item_terms(item_id);
CREATE INDEX IF NOT EXISTS users_display_idx     ON users(display_name);

PRAGMA user_version = 1;
";
