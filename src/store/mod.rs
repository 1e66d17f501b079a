//! The note store client.
//!
//! [`NoteStore`] mediates every read and write a presentation layer performs,
//! and owns the state that layer renders: the last-fetched note collection, a
//! loading flag, and the most recent error. The two write paths reconcile
//! differently on purpose: a create is followed by a full refetch (the server
//! assigns `id` and `created_at`, which must be reflected exactly), while a
//! delete removes the note from the in-memory collection optimistically,
//! since there is nothing server-generated to reconcile.

mod remote;

pub use remote::RemoteValidator;

use std::sync::Mutex as StdMutex;

use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::db::Database;
use crate::models::{CreateSessionNoteInput, SessionNote};
use crate::validation;

/// Failures surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The payload was rejected by a validation rule. The message is the
    /// rule's text; the caller recovers by correcting the input.
    #[error("{0}")]
    Validation(String),

    /// The persistence collaborator failed or the target row did not exist.
    #[error("{0}")]
    Persistence(String),
}

/// The observable state of a [`NoteStore`], cloned out for rendering.
#[derive(Debug, Clone, Default)]
pub struct NoteSnapshot {
    /// The collection as of the last successful fetch, with deletions applied
    /// optimistically ahead of the next fetch.
    pub notes: Vec<SessionNote>,
    pub loading: bool,
    /// The latest operation failure, if any. A single value, not a queue; a
    /// new operation clears it before proceeding.
    pub error: Option<String>,
}

pub struct NoteStore {
    db: Database,
    validator: RemoteValidator,
    state: StdMutex<NoteSnapshot>,
    // Serializes create/delete/fetch per store instance so they never race
    // to mutate the collection.
    op_lock: Mutex<()>,
}

impl NoteStore {
    pub fn new(db: Database, validator: RemoteValidator) -> Self {
        Self {
            db,
            validator,
            state: StdMutex::new(NoteSnapshot::default()),
            op_lock: Mutex::new(()),
        }
    }

    /// The current collection, loading flag, and last error.
    pub fn snapshot(&self) -> NoteSnapshot {
        self.state.lock().expect("store state lock poisoned").clone()
    }

    /// Re-read all notes, newest first.
    ///
    /// On success the in-memory collection is replaced and the error cleared;
    /// on failure the previous collection is kept and the error recorded.
    /// Safe to call repeatedly — it only re-reads.
    pub async fn fetch_all(&self) -> Result<Vec<SessionNote>, StoreError> {
        let _op = self.op_lock.lock().await;
        self.refetch()
    }

    /// Validate-then-insert.
    ///
    /// The remote validator is authoritative; when it cannot be reached the
    /// local fallback rules run instead, logged as a degraded path. A
    /// rejection or insert failure leaves the in-memory state untouched. On
    /// success the whole collection is refetched.
    pub async fn create(&self, input: CreateSessionNoteInput) -> Result<(), StoreError> {
        let _op = self.op_lock.lock().await;
        self.clear_error();

        let verdict = match self.validator.validate(&input).await {
            Ok(verdict) => verdict,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "remote validator unreachable, falling back to local duration rules"
                );
                validation::validate_fallback(&input)
            }
        };

        if !verdict.valid {
            let message = verdict
                .error
                .unwrap_or_else(|| "Validation failed".to_string());
            self.record_error(&message);
            return Err(StoreError::Validation(message));
        }

        if let Err(e) = self.db.create_note(input) {
            let message = format!("Failed to create note: {}", e);
            self.record_error(&message);
            return Err(StoreError::Persistence(message));
        }

        self.refetch().map(|_| ())
    }

    /// Delete by id.
    ///
    /// On success the note is removed from the in-memory collection
    /// immediately, without a refetch. A failure — including an id that does
    /// not exist — leaves the collection unchanged.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let _op = self.op_lock.lock().await;
        self.clear_error();

        match self.db.delete_note(id) {
            Ok(true) => {
                let mut state = self.state.lock().expect("store state lock poisoned");
                state.notes.retain(|note| note.id != id);
                Ok(())
            }
            Ok(false) => {
                let message = format!("Note {} not found", id);
                self.record_error(&message);
                Err(StoreError::Persistence(message))
            }
            Err(e) => {
                let message = format!("Failed to delete note: {}", e);
                self.record_error(&message);
                Err(StoreError::Persistence(message))
            }
        }
    }

    fn refetch(&self) -> Result<Vec<SessionNote>, StoreError> {
        {
            let mut state = self.state.lock().expect("store state lock poisoned");
            state.loading = true;
            state.error = None;
        }

        let result = self.db.get_all_notes();
        let mut state = self.state.lock().expect("store state lock poisoned");
        state.loading = false;

        match result {
            Ok(notes) => {
                state.notes = notes.clone();
                Ok(notes)
            }
            Err(e) => {
                // Keep the previous collection; only the error changes.
                let message = format!("Failed to fetch notes: {}", e);
                state.error = Some(message.clone());
                Err(StoreError::Persistence(message))
            }
        }
    }

    fn clear_error(&self) {
        self.state
            .lock()
            .expect("store state lock poisoned")
            .error = None;
    }

    fn record_error(&self, message: &str) {
        self.state
            .lock()
            .expect("store state lock poisoned")
            .error = Some(message.to_string());
    }
}
