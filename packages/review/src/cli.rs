//! Command-line interface.

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{DEFAULT_DOCUMENT_PATH, TEXT_WRAP_WIDTH};
use crate::document::Document;
use crate::error::Result;
use crate::og::{OgImageParams, OgTags};
use crate::render::{render, save_output, OutputFormat};
use crate::segment::segment;
use crate::transform::{transform_with, ShapePolicy};
use crate::types::Content;

/// Contract Review - Turn clause and risk analyses into render-ready lists.
#[derive(Parser)]
#[command(name = "contract-review")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transform an analysis document into a view model.
    Render {
        /// Analysis JSON file (default: static/clauses_risks.json)
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Fail on malformed clauses/risks fields instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap width for text output
        #[arg(short, long, default_value_t = TEXT_WRAP_WIDTH)]
        width: usize,
    },

    /// Split numbered-list text into items, one per line.
    Segment {
        /// Text to segment (default: read stdin)
        text: Option<String>,
    },

    /// Print Open Graph tags for a page, and the image parameters they carry, as JSON.
    OgTags {
        /// Site origin, e.g. https://review.example
        #[arg(long)]
        origin: String,

        /// Page path
        #[arg(long, default_value = "/")]
        path: String,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            path,
            format,
            strict,
            output,
            width,
        } => render_command(
            path.as_deref(),
            format,
            strict,
            output.as_deref(),
            width,
        ),
        Commands::Segment { text } => segment_command(text),
        Commands::OgTags { origin, path } => og_tags_command(&origin, &path),
    }
}

/// Execute the render command.
fn render_command(
    path: Option<&Path>,
    format: OutputFormat,
    strict: bool,
    output: Option<&Path>,
    width: usize,
) -> Result<()> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_DOCUMENT_PATH));
    let document = Document::load(path)?;

    let missing_clauses = document.missing_standard_clauses();
    if !missing_clauses.is_empty() {
        tracing::info!(missing = ?missing_clauses, "Document lacks standard clauses");
    }

    let missing_questions = document.missing_risk_questions();
    if !missing_questions.is_empty() {
        tracing::info!(missing = ?missing_questions, "Document lacks standard risk questions");
    }

    let policy = if strict {
        ShapePolicy::Reject
    } else {
        ShapePolicy::Skip
    };
    let view = transform_with(&document, policy)?;

    match output {
        Some(out) => {
            let rendered = render(&view, format, width, false)?;
            save_output(&rendered, out)?;
            eprintln!(
                "{} {} entries to {}",
                style("Saved").green().bold(),
                view.entry_count(),
                out.display()
            );
        }
        None => {
            let styled = io::stdout().is_terminal();
            println!("{}", render(&view, format, width, styled)?);
        }
    }

    Ok(())
}

/// Execute the segment command.
fn segment_command(text: Option<String>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    match segment(&text) {
        Content::Items(items) => {
            for item in items {
                println!("{item}");
            }
        }
        Content::Text(text) => println!("{text}"),
        Content::Raw(value) => println!("{value}"),
    }

    Ok(())
}

/// Execute the og-tags command.
fn og_tags_command(origin: &str, path: &str) -> Result<()> {
    let tags = OgTags::for_page(origin, path)?;
    let image_params = OgImageParams::from_url(&tags.image)?;
    let json = serde_json::to_string_pretty(&serde_json::json!({
        "tags": tags,
        "image_params": image_params,
    }))?;
    println!("{json}");
    Ok(())
}
