//! Analysis documents as produced by the contract analysis backend.
//!
//! A document is JSON of the form:
//!
//! ```json
//! {
//!   "clauses": [{ "Klausa": "Pembayaran", "Isi": "..." }],
//!   "risks": { "Identifikasi risiko finansial dalam kontrak ini": "..." }
//! }
//! ```
//!
//! The document is kept as a `serde_json::Value` so that shape problems can
//! be handled by the transformer instead of failing deserialization.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::config::{CLAUSE_BODY_KEY, CLAUSE_TITLE_KEY, RISK_QUESTIONS, STANDARD_CLAUSES};
use crate::error::Result;

/// Raw analysis document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Parse a document from JSON text.
    pub fn parse(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)?;
        Ok(Self { root })
    }

    /// Read and parse a document from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading analysis document");
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    /// Wrap an already-parsed JSON value.
    #[must_use]
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Start building a document in code.
    #[must_use]
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// The `clauses` field, if present.
    #[must_use]
    pub fn clauses(&self) -> Option<&Value> {
        self.root.get("clauses")
    }

    /// The `risks` field, if present.
    #[must_use]
    pub fn risks(&self) -> Option<&Value> {
        self.root.get("risks")
    }

    /// Standard clause categories that have no record in this document.
    #[must_use]
    pub fn missing_standard_clauses(&self) -> Vec<&'static str> {
        let titles: Vec<&str> = self
            .clauses()
            .and_then(Value::as_array)
            .map(|records| {
                records
                    .iter()
                    .filter_map(|r| r.get(CLAUSE_TITLE_KEY).and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default();

        STANDARD_CLAUSES
            .into_iter()
            .filter(|clause| !titles.contains(clause))
            .collect()
    }

    /// Standard risk questions that have no answer in this document.
    #[must_use]
    pub fn missing_risk_questions(&self) -> Vec<&'static str> {
        let answers = self.risks().and_then(Value::as_object);

        RISK_QUESTIONS
            .into_iter()
            .filter(|question| answers.is_none_or(|a| !a.contains_key(*question)))
            .collect()
    }

    /// The underlying JSON value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Serialize back to JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }
}

/// Builder producing documents in the backend's output shape.
///
/// Risks keep insertion order; adding the same question twice replaces the
/// answer but keeps its original position.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    clauses: Vec<Value>,
    risks: Map<String, Value>,
}

impl DocumentBuilder {
    /// Add a clause with its extracted text.
    #[must_use]
    pub fn clause(mut self, title: impl Into<String>, text: impl Into<String>) -> Self {
        let mut record = Map::new();
        record.insert(CLAUSE_TITLE_KEY.to_string(), Value::String(title.into()));
        record.insert(CLAUSE_BODY_KEY.to_string(), Value::String(text.into()));
        self.clauses.push(Value::Object(record));
        self
    }

    /// Add a risk question with its answer.
    #[must_use]
    pub fn risk(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.risks
            .insert(question.into(), Value::String(answer.into()));
        self
    }

    /// Finish the document. Both fields are always present.
    #[must_use]
    pub fn build(self) -> Document {
        let mut root = Map::new();
        root.insert("clauses".to_string(), Value::Array(self.clauses));
        root.insert("risks".to_string(), Value::Object(self.risks));
        Document::from_value(Value::Object(root))
    }
}
