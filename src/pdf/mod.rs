//! PDF rendering pipeline.
//!
//! One generic dispatch turns `(document type, record id)` into a printed
//! PDF: the dispatch resolves the type's descriptor, the context builders
//! turn the stored parent and its reconstructed child grids into a Typst
//! data dictionary, and the engine compiles the type's template with that
//! data.

pub mod common;
pub mod context;
pub mod engine;
pub mod handlers;

pub use engine::TypstRenderEngine;

use thiserror::Error;

/// Errors that can occur while rendering a document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to load Typst template: {0}")]
    TemplateIo(#[source] std::io::Error),
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write Typst source: {0}")]
    WriteSource(#[source] std::io::Error),
    #[error("Typst CLI execution failed: {0}")]
    TypstIo(#[source] std::io::Error),
    #[error("Typst CLI exited with status {0}")]
    TypstExit(i32),
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
}
