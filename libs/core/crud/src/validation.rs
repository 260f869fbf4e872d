//! Per-field rule tables for creation requests.
//!
//! Every rule of a [`RuleSet`] is evaluated; violations are collected into a
//! field -> message map, so a single response reports all of them. When two
//! rules fail on the same field the later one wins.

use axum_helpers::ErrorCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::ops::Deref;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidateLength;

pub const NOT_BLANK: &str = "must not be blank";
pub const NOT_NULL: &str = "must not be null";
pub const INVALID_REQUEST_DATA: &str =
    "Invalid Request Data, Your request is either missing required data or contains invalid values";

/// Field-level validation error body.
///
/// # JSON Example
///
/// ```json
/// {
///   "statusCode": "INVALID_REQUEST",
///   "path": "uri=/api/v1/categories",
///   "message": "Invalid Request Data, Your request is either missing required data or contains invalid values",
///   "errors": { "name": "must not be blank" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ValidationFailure {
    pub status_code: ErrorCode,
    pub path: String,
    pub message: String,
    /// Violated rule message per field, never empty
    pub errors: BTreeMap<String, String>,
}

impl ValidationFailure {
    pub(crate) fn new(path: impl Into<String>, errors: BTreeMap<String, String>) -> Self {
        Self {
            status_code: ErrorCode::InvalidRequest,
            path: path.into(),
            message: INVALID_REQUEST_DATA.to_string(),
            errors,
        }
    }
}

type Predicate<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// One `(field, predicate, message)` entry; the predicate returns `true` when the field is valid.
pub struct Rule<R> {
    field: &'static str,
    message: String,
    is_valid: Predicate<R>,
}

impl<R> Rule<R> {
    pub fn new<F>(field: &'static str, message: impl Into<String>, is_valid: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Self {
            field,
            message: message.into(),
            is_valid: Box::new(is_valid),
        }
    }

    /// Fails on absent, empty or whitespace-only strings.
    pub fn not_blank<F>(field: &'static str, get: F) -> Self
    where
        F: Fn(&R) -> Option<&str> + Send + Sync + 'static,
    {
        Self::new(field, NOT_BLANK, move |request| {
            get(request).is_some_and(|value| value.trim().validate_length(Some(1), None, None))
        })
    }

    /// Fails when the value is absent.
    pub fn not_null<V, F>(field: &'static str, get: F) -> Self
    where
        F: Fn(&R) -> Option<&V> + Send + Sync + 'static,
        V: ?Sized,
    {
        Self::new(field, NOT_NULL, move |request| get(request).is_some())
    }

    /// Fails when the value is present and below `bound`; absent values pass.
    pub fn minimum<V, F>(field: &'static str, bound: V, get: F) -> Self
    where
        V: PartialOrd + Display + Send + Sync + 'static,
        F: Fn(&R) -> Option<V> + Send + Sync + 'static,
    {
        let message = format!("must be greater than or equal to {}", bound);
        Self::new(field, message, move |request| {
            get(request).is_none_or(|value| value >= bound)
        })
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<R> fmt::Debug for Rule<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Ordered rule table for one request type.
#[derive(Debug)]
pub struct RuleSet<R> {
    rules: Vec<Rule<R>>,
}

impl<R> Default for RuleSet<R> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<R> RuleSet<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: Rule<R>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule<R>] {
        &self.rules
    }

    /// Evaluates every rule and returns the violated ones by field.
    pub fn violations(&self, request: &R) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        for rule in &self.rules {
            if !(rule.is_valid)(request) {
                errors.insert(rule.field.to_string(), rule.message.clone());
            }
        }
        errors
    }

    /// Checks `request`; `path` is the request context reported on failure.
    pub fn validate(
        &self,
        request: R,
        path: impl Into<String>,
    ) -> Result<Validated<R>, ValidationFailure> {
        let errors = self.violations(&request);
        if errors.is_empty() {
            Ok(Validated(request))
        } else {
            Err(ValidationFailure::new(path, errors))
        }
    }
}

/// A request that passed its rule table. Only [`RuleSet::validate`] creates one.
#[derive(Debug)]
pub struct Validated<R>(R);

impl<R> Validated<R> {
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R> Deref for Validated<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.0
    }
}
