//! Form validation schemas for the web layer.
//!
//! # Responsibility
//! - Check submitted field maps before they reach services.
//! - Report failures per field so templates can render them inline.
//!
//! # Invariants
//! - A schema fails as a whole when any field carries a message.
//! - Messages are attached to the field that caused them.

use std::collections::BTreeMap;

pub mod login;
pub mod post;

/// Message shown for a missing required field.
pub const REQUIRED_MESSAGE: &str = "This field is required.";
/// Message shown for a value outside an enumerated choice set.
pub const INVALID_CHOICE_MESSAGE: &str = "Not a valid choice.";

/// Field-scoped validation messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches one message to a field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    /// Messages attached to one field, empty when the field passed.
    pub fn field(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether every field passed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates fields with their messages, ordered by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> + '_ {
        self.errors
            .iter()
            .map(|(field, messages)| (*field, messages.as_slice()))
    }
}

pub(crate) fn require(errors: &mut FormErrors, field: &'static str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED_MESSAGE);
        false
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{require, FormErrors, REQUIRED_MESSAGE};

    #[test]
    fn messages_accumulate_per_field() {
        let mut errors = FormErrors::new();
        errors.add("title", "first");
        errors.add("title", "second");
        errors.add("body", "third");

        assert_eq!(errors.field("title"), ["first", "second"]);
        assert_eq!(errors.field("body"), ["third"]);
        assert!(errors.field("status").is_empty());
        assert!(!errors.is_empty());
    }

    #[test]
    fn require_flags_blank_values_only() {
        let mut errors = FormErrors::new();
        assert!(require(&mut errors, "title", "Hello"));
        assert!(!require(&mut errors, "body", "   "));
        assert_eq!(errors.field("body"), [REQUIRED_MESSAGE]);
        assert!(errors.field("title").is_empty());
    }
}
