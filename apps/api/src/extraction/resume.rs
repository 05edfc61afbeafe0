use crate::errors::AppError;

/// Extracts plain text from uploaded PDF bytes.
/// Extraction failures and text-free PDFs (e.g. scanned images) surface as
/// typed errors rather than being swallowed.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("could not read PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "PDF contains no extractable text".to_string(),
        ));
    }

    Ok(text)
}
