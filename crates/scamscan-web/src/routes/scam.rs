//! Message upload handler.

use axum::extract::{Multipart, State};
use scamscan_core::{extract_blocking, ExtractionError, UploadedDocument};
use tracing::{info, warn};

use super::{ClientIp, IndexTemplate};
use crate::state::AppState;

pub const NO_FILE_MESSAGE: &str = "No file uploaded.";
pub const INVALID_TYPE_MESSAGE: &str = "Invalid file type. Upload PDF or TXT.";
pub const EMPTY_FILE_MESSAGE: &str = "Empty file or unable to extract text.";
pub const UNREADABLE_PDF_MESSAGE: &str = "Unable to read the PDF file.";
pub const UNDECODABLE_TEXT_MESSAGE: &str = "Unable to decode the text file as UTF-8.";
pub const BAD_UPLOAD_MESSAGE: &str = "The upload could not be read. Please try again.";

/// Multipart field carrying the document.
const FILE_FIELD: &str = "file";

/// POST /scam/ - Classify the text of an uploaded PDF or TXT file.
pub async fn detect_scam(
    State(state): State<AppState>,
    client_ip: ClientIp,
    multipart: Multipart,
) -> IndexTemplate {
    let page = IndexTemplate::new(client_ip);

    let document = match read_upload(multipart).await {
        Ok(Some(document)) => document,
        Ok(None) => return page.with_message(NO_FILE_MESSAGE),
        Err(e) => {
            warn!(error = %e, "Failed to read multipart upload");
            return page.with_message(BAD_UPLOAD_MESSAGE);
        }
    };

    info!(
        filename = %document.filename,
        bytes = document.raw_bytes.len(),
        "Received upload"
    );

    let text = match extract_blocking(document).await {
        Ok(text) => text,
        Err(e) => {
            info!(error = %e, "Rejected upload");
            return page.with_message(extraction_message(&e));
        }
    };

    let message = state.classifier.classify_content(&text).await;
    page.with_message(message)
}

/// Pull the `file` field out of the form, ignoring any other fields.
async fn read_upload(
    mut multipart: Multipart,
) -> Result<Option<UploadedDocument>, axum::extract::multipart::MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        return Ok(Some(UploadedDocument::new(filename, bytes.to_vec())));
    }
    Ok(None)
}

/// User-facing text for a failed extraction.
fn extraction_message(error: &ExtractionError) -> &'static str {
    match error {
        ExtractionError::UnsupportedFileType(_) => INVALID_TYPE_MESSAGE,
        ExtractionError::EmptyContent => EMPTY_FILE_MESSAGE,
        ExtractionError::ParseError(_) => UNREADABLE_PDF_MESSAGE,
        ExtractionError::Decode(_) => UNDECODABLE_TEXT_MESSAGE,
    }
}
