//! Bulk spreadsheet import: validate locally, upload as multipart `file`.

use contracts::shared::api::ApiError;
use contracts::shared::import::{ImportResult, ImportValidationError};
use web_sys::{File, FormData};

use crate::shared::api_utils::{decode_payload, post_form};
use crate::shared::config::config;

/// Checks a picked file against the configured extension and size limits.
pub fn validate_file(file: Option<&File>) -> Result<(), ImportValidationError> {
    let Some(file) = file else {
        return Err(ImportValidationError::NoFile);
    };
    config()
        .import_constraints()
        .validate(&file.name(), file.size() as u64)
}

/// Uploads an already validated file and returns the server's summary.
pub async fn upload(path: &str, file: &File) -> Result<ImportResult, ApiError> {
    validate_file(Some(file)).map_err(|e| ApiError::Validation(e.to_string()))?;

    let form = FormData::new().map_err(|e| ApiError::Validation(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Validation(format!("{:?}", e)))?;

    let value = post_form(path, form).await?;
    let result: ImportResult = decode_payload(value)?;
    log::info!(
        "import {}: {} imported, {} failed",
        path,
        result.imported_count,
        result.failed_count
    );
    Ok(result)
}

/// One-line summary for the success notification.
pub fn summary(result: &ImportResult) -> String {
    if result.is_clean() {
        format!("{} data berhasil diimpor", result.imported_count)
    } else {
        format!(
            "{} data diimpor, {} gagal",
            result.imported_count, result.failed_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_reports_failures() {
        let result: ImportResult = serde_json::from_value(json!({
            "success": true,
            "imported_items": 12,
            "failed_imports": 2,
            "errors": ["Baris 3: kode barang kosong", "Baris 9: kategori tidak ditemukan"]
        }))
        .unwrap();
        assert_eq!(summary(&result), "12 data diimpor, 2 gagal");
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_summary_for_clean_import() {
        let result = ImportResult {
            imported_count: 5,
            ..Default::default()
        };
        assert_eq!(summary(&result), "5 data berhasil diimpor");
    }
}
