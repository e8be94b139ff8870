use crate::{CoreError, Result as CoreErrorResult};

use std::collections::BTreeMap;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// Validation messages grouped by request field.
///
/// Serializes as `{"field": ["message", ...]}` so clients can redisplay a
/// form with every problem at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-field shortcut
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// First failing field in name order
    pub fn first_field(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// `Ok(())` when nothing was recorded, otherwise a `CoreError::Validation`
    #[track_caller]
    pub fn into_result(self) -> CoreErrorResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation {
                errors: self,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}
