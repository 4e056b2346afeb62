use rusqlite::{Connection, Result as SqlResult};
use std::path::{Path, PathBuf};

use super::data::RatingRecord;
use crate::rater::Verdict;

/// The History manages the SQLite rating catalog.
/// It stores one row per applied verdict; discarded stale verdicts are
/// never recorded.
pub struct History {
    conn: Connection,
    db_path: PathBuf,
}

impl History {
    /// Create a new History instance and initialize the database.
    ///
    /// The database file is created in the user's data directory:
    /// - Linux: ~/.local/share/safeview/safeview.db
    /// - macOS: ~/Library/Application Support/safeview/safeview.db
    /// - Windows: %APPDATA%\safeview\safeview.db
    pub fn new() -> SqlResult<Self> {
        Self::open_at(Self::get_db_path())
    }

    /// Open (or create) a history database at an explicit path
    pub fn open_at(db_path: PathBuf) -> SqlResult<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .expect("Failed to create application data directory");
        }

        let conn = Connection::open(&db_path)?;

        println!("📁 Rating history at: {}", db_path.display());

        let mut history = History { conn, db_path };
        history.init_schema()?;

        Ok(history)
    }

    /// Get the path where the database should be stored
    fn get_db_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(|| dirs::home_dir())
            .expect("Could not determine user data directory");

        path.push("safeview");
        path.push("safeview.db");
        path
    }

    pub fn path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Initialize the database schema.
    /// Creates the ratings table and its index if they don't exist.
    fn init_schema(&mut self) -> SqlResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS ratings (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                path            TEXT NOT NULL,
                verdict         TEXT NOT NULL,
                detail          TEXT,
                rated_at        INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_ratings_rated_at
             ON ratings(rated_at DESC)",
            [],
        )?;

        Ok(())
    }

    /// Record an applied verdict for an image path
    pub fn record(&self, path: &Path, verdict: &Verdict) -> SqlResult<i64> {
        let path_str = path.to_string_lossy().to_string();

        self.conn.execute(
            "INSERT INTO ratings (path, verdict, detail, rated_at) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                &path_str,
                verdict.label(),
                verdict.detail(),
                chrono::Utc::now().timestamp(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Total number of ratings recorded
    pub fn rating_count(&self) -> SqlResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM ratings", [], |row| row.get(0))
    }

    /// The most recent ratings, newest first
    pub fn recent(&self, limit: i64) -> SqlResult<Vec<RatingRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, path, verdict, detail, rated_at
             FROM ratings
             ORDER BY rated_at DESC, id DESC
             LIMIT ?1",
        )?;

        let rows = stmt.query_map([limit], |row| {
            Ok(RatingRecord {
                id: row.get(0)?,
                path: row.get(1)?,
                verdict: row.get(2)?,
                detail: row.get(3)?,
                rated_at: row.get(4)?,
            })
        })?;

        rows.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_history(dir: &Path) -> History {
        History::open_at(dir.join("test.db")).expect("failed to open test database")
    }

    #[test]
    fn records_are_counted_and_recalled() {
        let dir = tempfile::tempdir().unwrap();
        let history = scratch_history(dir.path());

        assert_eq!(history.rating_count().unwrap(), 0);

        history
            .record(Path::new("/tmp/a.jpg"), &Verdict::Safe)
            .unwrap();
        history
            .record(
                Path::new("/tmp/b.jpg"),
                &Verdict::Error("disk read error".to_string()),
            )
            .unwrap();

        assert_eq!(history.rating_count().unwrap(), 2);

        let recent = history.recent(10).unwrap();
        assert_eq!(recent.len(), 2);

        // Newest first; same-second inserts fall back to insertion order
        assert!(recent[0].id > recent[1].id);
        assert!(recent[0].rated_at >= recent[1].rated_at);

        let error_row = recent
            .iter()
            .find(|r| r.path == "/tmp/b.jpg")
            .expect("error row missing");
        assert_eq!(error_row.verdict, "error");
        assert_eq!(error_row.detail.as_deref(), Some("disk read error"));

        let safe_row = recent
            .iter()
            .find(|r| r.path == "/tmp/a.jpg")
            .expect("safe row missing");
        assert_eq!(safe_row.verdict, "safe");
        assert_eq!(safe_row.detail, None);
    }

    #[test]
    fn recent_respects_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        let history = scratch_history(dir.path());

        for i in 0..5 {
            let path = format!("/tmp/{}.jpg", i);
            history.record(Path::new(&path), &Verdict::Suspicious).unwrap();
        }

        assert_eq!(history.recent(3).unwrap().len(), 3);
    }
}
