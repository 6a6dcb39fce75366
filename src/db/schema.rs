pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS sessions (
    shop TEXT PRIMARY KEY,
    token TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";
