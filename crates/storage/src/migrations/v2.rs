//! Migration v2: content items and their metadata

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL DEFAULT '',
    status TEXT NOT NULL DEFAULT 'publish',
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS item_meta (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    item_id INTEGER NOT NULL REFERENCES items(id) ON DELETE CASCADE,
    meta_key TEXT NOT NULL,
    meta_value TEXT
);

CREATE INDEX IF NOT EXISTS idx_items_status ON items(status);
CREATE INDEX IF NOT EXISTS idx_item_meta_item ON item_meta(item_id);
";
