//! PDF text extraction through a scoped temp-file spool.
//!
//! pdf-extract reads from a path, so the uploaded bytes are spooled to a
//! `NamedTempFile` first. The RAII guard removes the file on every exit path
//! (success, extraction error, panic) and swallows deletion errors, so a
//! permission failure on cleanup can never fail the request.

use std::io::Write;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Extracts the text of a PDF given its raw bytes.
///
/// Returns the page texts joined in page order and trimmed; an empty string
/// means the PDF had no extractable text (likely scanned/image-based).
/// Blocking — call via `spawn_blocking` from async handlers.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let mut tmp = NamedTempFile::new().context("Failed to create temp file")?;
    tmp.write_all(bytes)
        .context("Failed to spool upload to temp file")?;
    tmp.flush().context("Failed to flush temp file")?;

    let text =
        pdf_extract::extract_text(tmp.path()).context("Failed to extract text from PDF")?;

    Ok(text.trim().to_string())
}
