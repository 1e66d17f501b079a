//! Domain models for the session notes service.
//!
//! A [`SessionNote`] is immutable once created: it comes into existence only
//! through the validate-then-insert path and leaves only through an explicit
//! delete. There is no update operation.

mod note;
mod validation;

pub use note::*;
pub use validation::*;
