//! Typst rendering engine.
//!
//! Handles the low-level details of writing Typst source to temporary files,
//! invoking the compiler, and reading back the output PDF.

use std::fs;
use std::process::Command;
use tempfile::tempdir;
use tempfile::TempDir;

use super::RenderError;

const ARCHIVO_PRINCIPAL: &str = "principal.typ";
const ARCHIVO_SALIDA: &str = "salida.pdf";

/// Stateless engine for rendering Typst templates to PDF.
pub struct TypstRenderEngine;

impl TypstRenderEngine {
    /// Render a template plus its entry source to a PDF byte stream.
    ///
    /// # Arguments
    /// * `template_filename` - Name the template gets inside the compilation
    ///   directory; the entry source imports it by this name.
    /// * `template_source` - The template's Typst source.
    /// * `main_source` - Entry file: imports the template and calls it with
    ///   the document data.
    pub fn render(
        template_filename: &str,
        template_source: &str,
        main_source: &str,
    ) -> Result<Vec<u8>, RenderError> {
        // Compilation happens in an isolated temp directory so concurrent
        // renders never share files.
        let temp_dir = tempdir().map_err(RenderError::TempDir)?;

        let template_path = temp_dir.path().join(template_filename);
        fs::write(&template_path, template_source).map_err(RenderError::WriteSource)?;

        let main_path = temp_dir.path().join(ARCHIVO_PRINCIPAL);
        fs::write(&main_path, main_source).map_err(RenderError::WriteSource)?;

        compile_typst_to_pdf(&temp_dir)
    }
}

/// Compile the entry file in `temp_dir` to PDF.
fn compile_typst_to_pdf(temp_dir: &TempDir) -> Result<Vec<u8>, RenderError> {
    let main_path = temp_dir.path().join(ARCHIVO_PRINCIPAL);
    let output_path = temp_dir.path().join(ARCHIVO_SALIDA);

    let status = Command::new("typst")
        .arg("compile")
        .arg(&main_path)
        .arg(&output_path)
        .current_dir(temp_dir.path())
        .status()
        .map_err(RenderError::TypstIo)?;

    if !status.success() {
        let code = status.code().unwrap_or(-1);
        return Err(RenderError::TypstExit(code));
    }

    fs::read(&output_path).map_err(RenderError::ReadPdf)
}
