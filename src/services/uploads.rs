use std::io;
use std::path::Path;

use actix_multipart::form::tempfile::TempFile;

/// Moves an uploaded temp file into the uploads directory and returns the
/// public serving path recorded on the item.
pub fn store_upload(file: TempFile, uploads_dir: &str) -> io::Result<String> {
    let filename = unique_filename(file.file_name.as_deref());
    let dest = Path::new(uploads_dir).join(&filename);

    // Copy instead of rename: the temp file may live on another filesystem.
    std::fs::copy(file.file.path(), &dest)?;

    Ok(format!("/uploads/{filename}"))
}

fn unique_filename(original: Option<&str>) -> String {
    let base = original
        .map(sanitize_filename)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "upload".to_string());
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), base)
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
