use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a bulk import, as rendered to the user.
///
/// The server answers `{success, imported_items, failed_imports, errors}`;
/// both spellings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    #[serde(alias = "imported_items", default)]
    pub imported_count: u64,
    #[serde(alias = "failed_imports", default)]
    pub failed_count: u64,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ImportResult {
    pub fn is_clean(&self) -> bool {
        self.failed_count == 0 && self.errors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportValidationError {
    #[error("Pilih file terlebih dahulu")]
    NoFile,
    #[error("Format file .{found} tidak didukung (gunakan: {allowed})")]
    UnsupportedExtension { found: String, allowed: String },
    #[error("Ukuran file {size} byte melebihi batas {max} byte")]
    TooLarge { size: u64, max: u64 },
    #[error("File kosong")]
    Empty,
}

/// Client-side checks applied before any upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportConstraints {
    pub allowed_extensions: Vec<String>,
    pub max_file_size_bytes: u64,
}

impl Default for ImportConstraints {
    fn default() -> Self {
        Self {
            allowed_extensions: vec!["xlsx".into(), "xls".into(), "csv".into()],
            max_file_size_bytes: 5 * 1024 * 1024,
        }
    }
}

impl ImportConstraints {
    pub fn validate(&self, file_name: &str, size: u64) -> Result<(), ImportValidationError> {
        if file_name.trim().is_empty() {
            return Err(ImportValidationError::NoFile);
        }
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        if !self
            .allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&extension))
        {
            return Err(ImportValidationError::UnsupportedExtension {
                found: extension,
                allowed: self.allowed_extensions.join(", "),
            });
        }
        if size == 0 {
            return Err(ImportValidationError::Empty);
        }
        if size > self.max_file_size_bytes {
            return Err(ImportValidationError::TooLarge {
                size,
                max: self.max_file_size_bytes,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_spreadsheets_case_insensitive() {
        let c = ImportConstraints::default();
        assert!(c.validate("stok_barang.XLSX", 1024).is_ok());
        assert!(c.validate("katalog.csv", 10).is_ok());
    }

    #[test]
    fn test_rejects_bad_extension_and_size() {
        let c = ImportConstraints::default();
        assert!(matches!(
            c.validate("foto.png", 10),
            Err(ImportValidationError::UnsupportedExtension { .. })
        ));
        assert!(matches!(
            c.validate("tanpa_ekstensi", 10),
            Err(ImportValidationError::UnsupportedExtension { .. })
        ));
        assert_eq!(
            c.validate("besar.xlsx", 6 * 1024 * 1024),
            Err(ImportValidationError::TooLarge {
                size: 6 * 1024 * 1024,
                max: 5 * 1024 * 1024
            })
        );
        assert_eq!(c.validate("kosong.csv", 0), Err(ImportValidationError::Empty));
        assert_eq!(c.validate("", 10), Err(ImportValidationError::NoFile));
    }

    #[test]
    fn test_import_result_reads_server_spelling() {
        let result: ImportResult = serde_json::from_value(json!({
            "success": true,
            "imported_items": 8,
            "failed_imports": 2,
            "errors": ["Baris 3: kode_barang kosong", "Baris 7: kategori tidak ditemukan"]
        }))
        .unwrap();
        assert_eq!(result.imported_count, 8);
        assert_eq!(result.failed_count, 2);
        assert_eq!(result.errors.len(), 2);
        assert!(!result.is_clean());
    }
}
