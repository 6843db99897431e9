//! Contract Review - Turn contract analyses into render-ready view models.
//!
//! The analysis backend answers clause and risk questions in free text,
//! often with inline numbered lists. This crate splits those lists into
//! items and shapes the whole analysis into a view model for display.
//!
//! # Example
//!
//! ```
//! use contract_review::{transform, Content, Document};
//!
//! let document = Document::builder()
//!     .clause("Pembayaran", "Termin:\n1. DP 30%\n2. Pelunasan 70%")
//!     .risk("Identifikasi risiko finansial dalam kontrak ini", "Tidak ada.")
//!     .build();
//!
//! let view = transform(&document);
//! let clauses = view.clauses.unwrap();
//! assert_eq!(
//!     clauses[0].content,
//!     Some(Content::Items(vec![
//!         "Termin:".to_string(),
//!         "1.   DP 30%".to_string(),
//!         "2.   Pelunasan 70%".to_string(),
//!     ]))
//! );
//! ```
//!
//! # Architecture
//!
//! - [`segment`](mod@segment): Numbered-list segmentation
//! - [`transform`](mod@transform): Document to view-model transformation
//! - [`document`]: Analysis document loading and building
//! - [`types`]: View-model types
//! - [`render`]: JSON, YAML and text output
//! - [`og`]: Open Graph page metadata
//! - [`credit`]: Per-user analysis credits
//! - [`config`]: Constants and validation
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod credit;
pub mod document;
pub mod error;
pub mod og;
pub mod render;
pub mod segment;
pub mod transform;
pub mod types;

// Re-export main functions
pub use segment::{segment, segment_value};
pub use transform::{parse_risks, transform, try_transform};

// Re-export commonly used items
pub use document::{Document, DocumentBuilder};
pub use error::{Result, ReviewError};
pub use types::{Content, ViewEntry, ViewModel};
