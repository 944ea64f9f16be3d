//! CSV upload endpoint.
//!
//! The multipart `file` field is stored under the upload directory first,
//! then routed to a dataset by filename substring and streamed through the
//! ingestion pipeline. A filename matching no dataset keeps the stored file
//! and skips ingestion; the response says so rather than claiming rows were
//! inserted.

use std::path::Path;

use actix_multipart::Multipart;
use actix_web::{HttpResponse, post, web};
use futures_util::StreamExt as _;
use tracing::{Instrument as _, info, info_span, warn};
use uuid::Uuid;

use crate::domain::{DatasetKind, Error};

use super::envelope;
use super::state::HttpState;

/// Store the uploaded CSV and ingest it into its dataset's table.
#[post("/upload_data")]
pub async fn upload_data(state: web::Data<HttpState>, payload: Multipart) -> HttpResponse {
    let run_id = Uuid::new_v4();
    let span = info_span!("upload_data", run = %run_id);
    match handle_upload(&state, payload).instrument(span).await {
        Ok(outcome) => envelope::success(outcome),
        Err(error) => envelope::failure(&error),
    }
}

async fn handle_upload(state: &HttpState, mut payload: Multipart) -> Result<String, Error> {
    let (raw_name, contents) = read_file_field(&mut payload).await?;
    let file_name = sanitize_file_name(&raw_name)?;
    let stored_path = state.upload_dir.join(&file_name);

    let write_path = stored_path.clone();
    web::block(move || {
        if let Some(parent) = write_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&write_path, &contents)
    })
    .await
    .map_err(|error| Error::internal(format!("blocking file write failed: {error}")))?
    .map_err(|error| Error::internal(format!("failed to store upload: {error}")))?;

    let Some(kind) = DatasetKind::from_filename(&file_name) else {
        warn!(file = %file_name, "upload matched no dataset; stored without ingestion");
        return Ok(format!(
            "File {file_name} stored; filename matched no dataset so nothing was ingested"
        ));
    };

    let report = state.ingestion.ingest_file(kind, &stored_path).await?;
    info!(
        file = %file_name,
        dataset = %report.dataset,
        rows = report.rows_inserted,
        batches = report.batches_committed,
        "upload ingested"
    );
    Ok("Data uploaded and inserted successfully".to_owned())
}

/// Pull the `file` field's filename and contents out of the multipart form.
async fn read_file_field(payload: &mut Multipart) -> Result<(String, Vec<u8>), Error> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|error| {
            Error::invalid_request(format!("malformed multipart payload: {error}"))
        })?;

        let (field_name, file_name) = {
            let Some(disposition) = field.content_disposition() else {
                continue;
            };
            (
                disposition.get_name().map(str::to_owned),
                disposition.get_filename().map(str::to_owned),
            )
        };
        if field_name.as_deref() != Some("file") {
            continue;
        }

        let file_name = file_name.unwrap_or_default();
        if file_name.is_empty() {
            return Err(Error::invalid_request("No selected file"));
        }

        let mut contents = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|error| {
                Error::invalid_request(format!("failed to read uploaded file: {error}"))
            })?;
            contents.extend_from_slice(&chunk);
        }
        return Ok((file_name, contents));
    }
    Err(Error::invalid_request("File not found"))
}

/// Keep only the final path component of a client-supplied filename.
fn sanitize_file_name(raw: &str) -> Result<String, Error> {
    let name = Path::new(raw)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    if name.is_empty() {
        return Err(Error::invalid_request("No selected file"));
    }
    Ok(name.to_owned())
}
