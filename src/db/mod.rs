mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;
use uuid::Uuid;

use crate::models::*;

/// The persistence collaborator for session notes.
///
/// Notes are never updated in place: the only writes are `create_note` and
/// `delete_note`. Listing is always ordered by `created_at` descending.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "session-notes")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("session_notes.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&conn)
    }

    /// All notes, newest first.
    pub fn get_all_notes(&self) -> Result<Vec<SessionNote>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, client_name, session_date, quick_notes, session_duration, created_at
             FROM session_notes ORDER BY created_at DESC",
        )?;

        let notes = stmt
            .query_map([], |row| {
                Ok(SessionNote {
                    id: parse_uuid(row.get::<_, String>(0)?),
                    client_name: row.get(1)?,
                    session_date: row.get(2)?,
                    quick_notes: row.get(3)?,
                    session_duration: row.get(4)?,
                    created_at: parse_datetime(row.get::<_, String>(5)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(notes)
    }

    /// Insert a note, assigning its id and creation timestamp.
    pub fn create_note(&self, input: CreateSessionNoteInput) -> Result<SessionNote> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let id = Uuid::new_v4();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO session_notes (id, client_name, session_date, quick_notes, session_duration, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            (
                id.to_string(),
                &input.client_name,
                &input.session_date,
                &input.quick_notes,
                input.session_duration,
                now.to_rfc3339(),
            ),
        )?;

        Ok(SessionNote {
            id,
            client_name: input.client_name,
            session_date: input.session_date,
            quick_notes: input.quick_notes,
            session_duration: input.session_duration,
            created_at: now,
        })
    }

    /// Delete a note by id. Returns true iff a row was removed.
    pub fn delete_note(&self, id: Uuid) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute("DELETE FROM session_notes WHERE id = ?", [id.to_string()])?;
        Ok(rows > 0)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

fn parse_uuid(s: String) -> Uuid {
    Uuid::parse_str(&s).unwrap_or_else(|_| Uuid::nil())
}

fn parse_datetime(s: String) -> chrono::DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
