//! Session note record-keeping service.
//!
//! The crate has two halves:
//!
//! - A server side: the remote validation function and the note CRUD API
//!   ([`api`]) over a rusqlite store ([`db`]).
//! - A client side: the [`store::NoteStore`], which mediates all reads and
//!   writes for a presentation layer — validate-then-insert with a local
//!   fallback when the remote validator is unreachable, full refetch after
//!   create, optimistic removal after delete.
//!
//! The validation rules themselves live once, in [`validation`], as a rule
//! table shared by the authoritative and fallback evaluators.

pub mod api;
pub mod db;
pub mod models;
pub mod store;
pub mod validation;
