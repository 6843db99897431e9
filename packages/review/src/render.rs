//! Output formats for view models.

use std::fs;
use std::path::Path;

use console::style;
use textwrap::{fill, Options};

use crate::error::Result;
use crate::types::{Content, ViewEntry, ViewModel};

/// Indent for wrapped lines of a list item, aligned after "1.   ".
const ITEM_CONTINUATION_INDENT: &str = "      ";

/// Serialization format for a rendered view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
    /// Human-readable text.
    Text,
}

/// Render a view model in the given format.
pub fn render(view: &ViewModel, format: OutputFormat, width: usize, styled: bool) -> Result<String> {
    match format {
        OutputFormat::Json => view.to_json(),
        OutputFormat::Yaml => view.to_yaml(),
        OutputFormat::Text => Ok(render_text(view, width, styled)),
    }
}

/// Write rendered output to a file, creating parent directories as needed.
pub fn save_output(rendered: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut content = rendered.to_string();
    if !content.ends_with('\n') {
        content.push('\n');
    }
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "Wrote view model");
    Ok(())
}

/// Render a view model as wrapped, optionally colored, text.
///
/// Sections are separated by blank lines; list items wrap with a hanging
/// indent so continuation lines align with the item text.
pub fn render_text(view: &ViewModel, width: usize, styled: bool) -> String {
    let mut sections = Vec::new();

    if let Some(clauses) = &view.clauses {
        sections.push(render_section("Klausa", clauses, width, styled));
    }
    if let Some(risks) = &view.risks {
        sections.push(render_section("Risiko", risks, width, styled));
    }

    sections.join("\n\n")
}

fn render_section(heading: &str, entries: &[ViewEntry], width: usize, styled: bool) -> String {
    let mut lines = vec![style(heading).bold().underlined().force_styling(styled).to_string()];

    for entry in entries {
        lines.push(String::new());
        if let Some(title) = &entry.title {
            lines.push(style(title).cyan().bold().force_styling(styled).to_string());
        }
        if let Some(content) = &entry.content {
            lines.push(render_content(content, width));
        }
    }

    lines.join("\n")
}

fn render_content(content: &Content, width: usize) -> String {
    match content {
        Content::Items(items) => {
            let options = Options::new(width).subsequent_indent(ITEM_CONTINUATION_INDENT);
            items
                .iter()
                .map(|item| fill(item, &options))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Content::Text(text) => fill(text, width),
        Content::Raw(value) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ViewModel {
        ViewModel {
            clauses: Some(vec![ViewEntry::new("Pembayaran", "Dibayar 30 hari.")]),
            risks: Some(vec![ViewEntry::new(
                "Risiko finansial",
                vec!["1.   Denda".to_string(), "2.   Bunga".to_string()],
            )]),
        }
    }

    #[test]
    fn test_render_text_plain() {
        let text = render_text(&sample(), 80, false);
        assert_eq!(
            text,
            "Klausa\n\nPembayaran\nDibayar 30 hari.\n\nRisiko\n\nRisiko finansial\n1.   Denda\n2.   Bunga"
        );
    }

    #[test]
    fn test_render_text_styled_has_ansi() {
        let text = render_text(&sample(), 80, true);
        assert!(text.contains("\u{1b}["));
    }

    #[test]
    fn test_long_items_hang_indent() {
        let view = ViewModel {
            clauses: None,
            risks: Some(vec![ViewEntry::new(
                "R",
                vec!["1.   satu dua tiga empat lima enam".to_string()],
            )]),
        };
        let text = render_text(&view, 20, false);
        let item_lines: Vec<&str> = text.lines().skip(3).collect();
        assert!(item_lines.len() > 1);
        assert!(item_lines[1].starts_with(ITEM_CONTINUATION_INDENT));
    }

    #[test]
    fn test_render_raw_content() {
        let view = ViewModel {
            clauses: Some(vec![ViewEntry {
                title: None,
                content: Some(Content::Raw(serde_json::json!(3))),
            }]),
            risks: None,
        };
        assert_eq!(render_text(&view, 80, false), "Klausa\n\n3");
    }

    #[test]
    fn test_render_json_format() {
        let json = render(&sample(), OutputFormat::Json, 80, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["risks"][0]["content"][1], "2.   Bunga");
    }

    #[test]
    fn test_save_output_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("view.yaml");
        save_output("clauses: []", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "clauses: []\n");
    }
}
