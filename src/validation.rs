//! Session note validation rules.
//!
//! The rule set exists in two deployments: the authoritative remote function
//! (all rules) and the local fallback used when that function is unreachable
//! (duration bounds only). To keep the two from drifting they share a single
//! rule table; each entry carries its message and whether the fallback
//! evaluator enforces it. Rules run in a fixed order and the first failure
//! wins, so error messages are deterministic.

use crate::models::{CreateSessionNoteInput, RawNoteInput, ValidationResult};

/// Maximum length of `quick_notes`, measured in characters before trimming.
pub const MAX_QUICK_NOTES_CHARS: usize = 500;

/// Minimum session duration in minutes.
pub const MIN_DURATION_MINUTES: f64 = 15.0;

/// Maximum session duration in minutes.
pub const MAX_DURATION_MINUTES: f64 = 120.0;

/// A candidate note, normalized from either the raw request shape or the
/// typed input. `duration` is `None` when the raw value was not a number.
struct Candidate<'a> {
    duration: Option<f64>,
    client_name: &'a str,
    session_date: &'a str,
    quick_notes: &'a str,
}

impl<'a> Candidate<'a> {
    fn from_raw(input: &'a RawNoteInput) -> Self {
        Self {
            duration: input.session_duration.as_f64(),
            client_name: input.client_name.as_deref().unwrap_or(""),
            session_date: input.session_date.as_deref().unwrap_or(""),
            quick_notes: input.quick_notes.as_deref().unwrap_or(""),
        }
    }

    fn from_input(input: &'a CreateSessionNoteInput) -> Self {
        Self {
            duration: Some(input.session_duration as f64),
            client_name: &input.client_name,
            session_date: &input.session_date,
            quick_notes: &input.quick_notes,
        }
    }
}

struct Rule {
    /// Enforced by the local fallback evaluator as well as the full one.
    fallback: bool,
    check: fn(&Candidate) -> Result<(), &'static str>,
}

/// The rule table, in evaluation order.
const RULES: &[Rule] = &[
    Rule {
        fallback: false,
        check: |c| match c.duration {
            Some(_) => Ok(()),
            None => Err("Session duration must be a number"),
        },
    },
    Rule {
        fallback: true,
        check: |c| {
            if c.duration.is_some_and(|d| d < MIN_DURATION_MINUTES) {
                Err("Session duration must be at least 15 minutes")
            } else {
                Ok(())
            }
        },
    },
    Rule {
        fallback: true,
        check: |c| {
            if c.duration.is_some_and(|d| d > MAX_DURATION_MINUTES) {
                Err("Session duration cannot exceed 120 minutes (2 hours)")
            } else {
                Ok(())
            }
        },
    },
    Rule {
        fallback: false,
        check: |c| {
            if c.client_name.trim().is_empty() {
                Err("Client name is required")
            } else {
                Ok(())
            }
        },
    },
    Rule {
        fallback: false,
        check: |c| {
            if c.session_date.is_empty() {
                Err("Session date is required")
            } else {
                Ok(())
            }
        },
    },
    Rule {
        fallback: false,
        check: |c| {
            if c.quick_notes.trim().is_empty() {
                Err("Quick notes are required")
            } else {
                Ok(())
            }
        },
    },
    Rule {
        fallback: false,
        check: |c| {
            // Length is measured before trimming.
            if c.quick_notes.chars().count() > MAX_QUICK_NOTES_CHARS {
                Err("Quick notes cannot exceed 500 characters")
            } else {
                Ok(())
            }
        },
    },
];

fn run(candidate: &Candidate, fallback_only: bool) -> ValidationResult {
    for rule in RULES {
        if fallback_only && !rule.fallback {
            continue;
        }
        if let Err(message) = (rule.check)(candidate) {
            return ValidationResult::fail(message);
        }
    }
    ValidationResult::ok()
}

/// Run the full rule set against the raw request shape. This is what the
/// remote validation function evaluates.
pub fn validate(input: &RawNoteInput) -> ValidationResult {
    run(&Candidate::from_raw(input), false)
}

/// Run the full rule set against an already-typed input. Used where
/// validation sits next to the insert, so the numeric-type rule passes
/// trivially.
pub fn validate_input(input: &CreateSessionNoteInput) -> ValidationResult {
    run(&Candidate::from_input(input), false)
}

/// Run only the fallback subset of the rules (duration bounds). Used when the
/// remote validation function cannot be reached; callers must flag this as a
/// degraded path since it intentionally enforces fewer rules.
pub fn validate_fallback(input: &CreateSessionNoteInput) -> ValidationResult {
    run(&Candidate::from_input(input), true)
}
