use session_notes::db::Database;
use session_notes::models::*;
use speculate2::speculate;
use uuid::Uuid;

fn sample_input(client_name: &str) -> CreateSessionNoteInput {
    CreateSessionNoteInput {
        client_name: client_name.to_string(),
        session_date: "2024-01-15".to_string(),
        quick_notes: "Discussed coping strategies.".to_string(),
        session_duration: 50,
    }
}

speculate! {
    before {
        let db = Database::open_memory().expect("Failed to create in-memory database");
        db.migrate().expect("Failed to run migrations");
    }

    describe "create_note" {
        it "assigns an id and creation timestamp" {
            let note = db.create_note(sample_input("Jane Doe")).expect("Failed to create note");

            assert!(!note.id.is_nil());
            assert_eq!(note.client_name, "Jane Doe");
            assert_eq!(note.session_duration, 50);
        }

        it "round-trips all fields through the table" {
            let created = db.create_note(sample_input("Jane Doe")).expect("Failed to create note");

            let notes = db.get_all_notes().expect("Query failed");
            assert_eq!(notes.len(), 1);
            assert_eq!(notes[0].id, created.id);
            assert_eq!(notes[0].client_name, "Jane Doe");
            assert_eq!(notes[0].session_date, "2024-01-15");
            assert_eq!(notes[0].quick_notes, "Discussed coping strategies.");
            assert_eq!(notes[0].session_duration, 50);
            assert_eq!(notes[0].created_at, created.created_at);
        }

        it "assigns distinct ids to successive notes" {
            let a = db.create_note(sample_input("A")).expect("Failed to create note");
            let b = db.create_note(sample_input("B")).expect("Failed to create note");

            assert_ne!(a.id, b.id);
        }
    }

    describe "get_all_notes" {
        it "returns an empty list when no notes exist" {
            let notes = db.get_all_notes().expect("Query failed");
            assert!(notes.is_empty());
        }

        it "returns notes ordered by created_at descending" {
            db.create_note(sample_input("First")).expect("Failed to create note");
            std::thread::sleep(std::time::Duration::from_millis(5));
            db.create_note(sample_input("Second")).expect("Failed to create note");

            let notes = db.get_all_notes().expect("Query failed");
            assert_eq!(notes.len(), 2);
            assert_eq!(notes[0].client_name, "Second");
            assert_eq!(notes[1].client_name, "First");
            assert!(notes[0].created_at >= notes[1].created_at);
        }
    }

    describe "delete_note" {
        it "returns true and removes the row" {
            let note = db.create_note(sample_input("Jane Doe")).expect("Failed to create note");

            let deleted = db.delete_note(note.id).expect("Delete failed");
            assert!(deleted);

            let notes = db.get_all_notes().expect("Query failed");
            assert!(notes.is_empty());
        }

        it "returns false for a non-existent id" {
            let deleted = db.delete_note(Uuid::new_v4()).expect("Delete failed");
            assert!(!deleted);
        }

        it "leaves other notes untouched" {
            let keep = db.create_note(sample_input("Keep")).expect("Failed to create note");
            let drop = db.create_note(sample_input("Drop")).expect("Failed to create note");

            db.delete_note(drop.id).expect("Delete failed");

            let notes = db.get_all_notes().expect("Query failed");
            assert_eq!(notes.len(), 1);
            assert_eq!(notes[0].id, keep.id);
        }
    }

    describe "open" {
        it "persists notes across reopens of the same path" {
            let _ = &db;
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("notes.db");

            let disk_db = Database::open(path.clone()).expect("Failed to open database");
            disk_db.migrate().expect("Failed to migrate");
            disk_db.create_note(sample_input("Jane Doe")).expect("Failed to create note");
            drop(disk_db);

            let disk_db = Database::open(path).expect("Failed to reopen database");
            disk_db.migrate().expect("Failed to migrate");
            let notes = disk_db.get_all_notes().expect("Query failed");
            assert_eq!(notes.len(), 1);
        }
    }
}
