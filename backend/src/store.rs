//! Upload Store
//!
//! SQLite-backed record of every uploaded resume and the outcome of parsing
//! it. Parse outcomes are stored as JSON so decode errors are kept alongside
//! successful records.

use chrono::{DateTime, Utc};
use resume_core::ParseOutcome;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid stored timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================
// STORED RESUME
// ============================================================

/// One uploaded document and what the parser made of it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredResume {
    pub id: String,
    pub file_name: String,
    pub file_path: String,
    pub uploaded_at: DateTime<Utc>,
    pub parsed_data: ParseOutcome,
}

impl StoredResume {
    pub fn new(file_name: &str, file_path: &str, parsed_data: ParseOutcome) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            file_name: file_name.to_string(),
            file_path: file_path.to_string(),
            uploaded_at: Utc::now(),
            parsed_data,
        }
    }
}

// ============================================================
// RESUME STORE
// ============================================================

pub struct ResumeStore {
    conn: Arc<Mutex<Connection>>,
}

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS resume_uploads (
        id TEXT PRIMARY KEY,
        file_name TEXT NOT NULL,
        file_path TEXT NOT NULL,
        uploaded_at TEXT NOT NULL,
        parsed_data TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_resume_uploaded_at ON resume_uploads(uploaded_at);";

impl ResumeStore {
    /// Open (or create) the database at `db_path`
    pub fn new(db_path: &Path) -> StoreResult<Self> {
        Self::with_connection(Connection::open(db_path)?)
    }

    /// In-memory store for tests
    pub fn in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    pub fn insert(&self, resume: &StoredResume) -> StoreResult<()> {
        let parsed_json = serde_json::to_string(&resume.parsed_data)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO resume_uploads (id, file_name, file_path, uploaded_at, parsed_data)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                resume.id,
                resume.file_name,
                resume.file_path,
                resume.uploaded_at.to_rfc3339(),
                parsed_json,
            ],
        )?;
        Ok(())
    }

    pub fn get(&self, id: &str) -> StoreResult<Option<StoredResume>> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT id, file_name, file_path, uploaded_at, parsed_data
                 FROM resume_uploads WHERE id = ?1",
                [id],
                read_row,
            )
            .optional()?;

        row.map(decode_row).transpose()
    }

    /// All uploads, newest first
    pub fn list(&self) -> StoreResult<Vec<StoredResume>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, file_name, file_path, uploaded_at, parsed_data
             FROM resume_uploads
             ORDER BY uploaded_at DESC",
        )?;

        let rows = stmt.query_map([], read_row)?;
        let mut resumes = Vec::new();
        for row in rows {
            resumes.push(decode_row(row?)?);
        }
        Ok(resumes)
    }

    pub fn count(&self) -> StoreResult<usize> {
        let conn = self.lock()?;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM resume_uploads", [], |row| row.get(0))?;
        Ok(n as usize)
    }
}

type RawRow = (String, String, String, String, String);

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
}

fn decode_row((id, file_name, file_path, uploaded_at, parsed_data): RawRow) -> StoreResult<StoredResume> {
    Ok(StoredResume {
        id,
        file_name,
        file_path,
        uploaded_at: DateTime::parse_from_rfc3339(&uploaded_at)?.with_timezone(&Utc),
        parsed_data: serde_json::from_str(&parsed_data)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_core::{parse_text, ErrorResult};

    #[test]
    fn test_insert_and_get() {
        let store = ResumeStore::in_memory().unwrap();
        let record = parse_text("Nisha Kulkarni\nnisha@example.com\nSQL");
        let upload = StoredResume::new("cv.txt", "uploads/resume-1.txt", record.clone().into());
        store.insert(&upload).unwrap();

        let loaded = store.get(&upload.id).unwrap().expect("stored resume");
        assert_eq!(loaded.file_name, "cv.txt");
        assert_eq!(loaded.parsed_data.record(), Some(&record));
    }

    #[test]
    fn test_error_outcome_round_trips() {
        let store = ResumeStore::in_memory().unwrap();
        let upload = StoredResume::new(
            "broken.pdf",
            "uploads/resume-2.pdf",
            ErrorResult::new("Error extracting text: bad xref").into(),
        );
        store.insert(&upload).unwrap();

        let loaded = store.get(&upload.id).unwrap().unwrap();
        assert_eq!(loaded.parsed_data.error(), Some("Error extracting text: bad xref"));
    }

    #[test]
    fn test_get_unknown_id() {
        let store = ResumeStore::in_memory().unwrap();
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_list_newest_first() {
        let store = ResumeStore::in_memory().unwrap();

        let mut older = StoredResume::new("a.txt", "uploads/a.txt", parse_text("").into());
        older.uploaded_at = Utc::now() - chrono::Duration::minutes(5);
        let newer = StoredResume::new("b.txt", "uploads/b.txt", parse_text("").into());
        store.insert(&older).unwrap();
        store.insert(&newer).unwrap();

        let all = store.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].file_name, "b.txt");
        assert_eq!(all[1].file_name, "a.txt");
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_file_backed_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("resumes.db");

        let upload = StoredResume::new("c.txt", "uploads/c.txt", parse_text("Python").into());
        ResumeStore::new(&db).unwrap().insert(&upload).unwrap();

        let reopened = ResumeStore::new(&db).unwrap();
        assert_eq!(reopened.count().unwrap(), 1);
    }
}
