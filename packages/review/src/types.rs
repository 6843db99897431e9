//! View-model types handed to the rendering layer.
//!
//! These mirror the JSON the result page consumes: a list of clauses and a
//! list of risks, each with a title and either plain text or list items.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Displayable content of a clause or risk.
///
/// Serialized untagged, so `Text` is a JSON string, `Items` a JSON array of
/// strings, and `Raw` whatever the source held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Numbered-list text split into formatted items.
    Items(Vec<String>),

    /// Text that is not a numbered list, verbatim.
    Text(String),

    /// Non-string source value, passed through unchanged.
    Raw(Value),
}

impl Content {
    /// Whether the content was split into list items.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::Items(_))
    }

    /// List items, if the content was segmented.
    #[must_use]
    pub fn items(&self) -> Option<&[String]> {
        match self {
            Self::Items(items) => Some(items),
            _ => None,
        }
    }

    /// Plain text, if the content was left unsegmented.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<String>> for Content {
    fn from(items: Vec<String>) -> Self {
        Self::Items(items)
    }
}

/// One clause or risk in the view model.
///
/// Both fields are optional so that entries missing a title or body in the
/// source stay missing in the output instead of being defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

impl ViewEntry {
    /// Create an entry with both title and content.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<Content>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

/// Render-ready structure derived from an analysis document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clauses: Option<Vec<ViewEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risks: Option<Vec<ViewEntry>>,
}

impl ViewModel {
    /// Total number of clause and risk entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.clauses.as_ref().map_or(0, Vec::len) + self.risks.as_ref().map_or(0, Vec::len)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> crate::Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
