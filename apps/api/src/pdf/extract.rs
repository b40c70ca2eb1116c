//! PDF text extraction, rendered as per-page markdown.
//!
//! Output shape: a `## Page N` heading per page, pages separated by blank
//! lines. Text only — embedded images are not extracted.

use crate::errors::AppError;

/// Extracted document: page count plus the assembled markdown.
#[derive(Debug)]
pub struct ExtractedPdf {
    pub pages: usize,
    pub markdown: String,
}

/// Parses a PDF from memory and renders its text as markdown. Malformed
/// input is an unprocessable-entity error, never a panic.
pub fn extract_markdown(bytes: &[u8]) -> Result<ExtractedPdf, AppError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not parse PDF: {e}")))?;

    Ok(ExtractedPdf {
        pages: pages.len(),
        markdown: pages_to_markdown(&pages),
    })
}

/// Assembles per-page text into the markdown document shape.
pub fn pages_to_markdown(pages: &[String]) -> String {
    let mut markdown = String::new();
    for (i, text) in pages.iter().enumerate() {
        markdown.push_str(&format!("## Page {}\n\n{}\n\n", i + 1, text.trim()));
    }
    markdown
}
