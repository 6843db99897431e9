//! Document to view-model transformation.
//!
//! Every clause body and risk answer runs through the numbered-list
//! segmenter. Fields missing from the document are missing from the view
//! model. Fields present with the wrong shape are skipped by [`transform`]
//! and rejected by [`try_transform`].

use serde_json::Value;

use crate::config::{CLAUSE_BODY_KEY, CLAUSE_TITLE_KEY};
use crate::document::Document;
use crate::error::{ReviewError, Result};
use crate::segment::segment_value;
use crate::types::{ViewEntry, ViewModel};

/// How to treat `clauses`/`risks` fields of the wrong JSON type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapePolicy {
    /// Drop the field from the view model and log a warning.
    #[default]
    Skip,

    /// Fail with [`ReviewError::InvalidShape`].
    Reject,
}

/// Transform a document into a view model, skipping malformed fields.
#[must_use]
pub fn transform(document: &Document) -> ViewModel {
    let clauses = document
        .clauses()
        .and_then(|value| field_or_skip("clauses", value, clauses_view));
    let risks = document
        .risks()
        .and_then(|value| field_or_skip("risks", value, risks_view));

    ViewModel { clauses, risks }
}

/// Transform a document into a view model, rejecting malformed fields.
pub fn try_transform(document: &Document) -> Result<ViewModel> {
    let clauses = document.clauses().map(clauses_view).transpose()?;
    let risks = document.risks().map(risks_view).transpose()?;

    Ok(ViewModel { clauses, risks })
}

/// Transform with an explicit shape policy.
pub fn transform_with(document: &Document, policy: ShapePolicy) -> Result<ViewModel> {
    match policy {
        ShapePolicy::Skip => Ok(transform(document)),
        ShapePolicy::Reject => try_transform(document),
    }
}

/// Load a JSON file and transform it in one step.
pub fn parse_risks(path: &std::path::Path) -> Result<ViewModel> {
    let document = Document::load(path)?;
    let view = transform(&document);
    tracing::debug!(entries = view.entry_count(), "Built view model");
    Ok(view)
}

fn field_or_skip(
    field: &str,
    value: &Value,
    build: fn(&Value) -> Result<Vec<ViewEntry>>,
) -> Option<Vec<ViewEntry>> {
    match build(value) {
        Ok(entries) => Some(entries),
        Err(e) => {
            tracing::warn!(field, error = %e, "Skipping malformed document field");
            None
        }
    }
}

fn clauses_view(value: &Value) -> Result<Vec<ViewEntry>> {
    let Value::Array(records) = value else {
        return Err(shape_error("clauses", "an array", value));
    };

    Ok(records.iter().map(clause_entry).collect())
}

/// Build one clause entry.
///
/// Records that are not objects, or lack a field, produce entries without
/// that field.
fn clause_entry(record: &Value) -> ViewEntry {
    ViewEntry {
        title: record.get(CLAUSE_TITLE_KEY).and_then(title_text),
        content: record.get(CLAUSE_BODY_KEY).map(segment_value),
    }
}

fn risks_view(value: &Value) -> Result<Vec<ViewEntry>> {
    let Value::Object(answers) = value else {
        return Err(shape_error("risks", "an object", value));
    };

    Ok(answers
        .iter()
        .map(|(question, answer)| ViewEntry {
            title: Some(question.clone()),
            content: Some(segment_value(answer)),
        })
        .collect())
}

/// Titles are displayed as text; scalars are stringified, null is no title.
fn title_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn shape_error(field: &str, expected: &'static str, found: &Value) -> ReviewError {
    ReviewError::InvalidShape {
        field: field.to_string(),
        expected,
        found: json_kind(found),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
