//! Spreadsheet export: the server renders the file, the browser saves it.

use chrono::NaiveDate;
use contracts::shared::api::ApiError;
use contracts::shared::list_query::{export_query, FilterParams};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::api_utils::get_blob;

pub const EXPORT_FORMAT: &str = "excel";

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Downloads `path` with the current filters and saves it. Returns the file
/// name used.
pub async fn export_list(
    path: &str,
    filters: &FilterParams,
    file_stem: &str,
) -> Result<String, ApiError> {
    let url = format!("{}{}", path, export_query(filters, EXPORT_FORMAT));
    let download = get_blob(&url).await?;
    let filename = filename_from_disposition(download.content_disposition.as_deref())
        .unwrap_or_else(|| default_filename(file_stem, chrono::Local::now().date_naive()));
    let content_type = download.content_type.as_deref().unwrap_or(XLSX_MIME);
    save_bytes(&download.bytes, content_type, &filename).map_err(ApiError::Validation)?;
    log::info!("exported {} ({} bytes)", filename, download.bytes.len());
    Ok(filename)
}

/// File name from a `Content-Disposition` header. `filename*=` wins over
/// `filename=`.
pub fn filename_from_disposition(header: Option<&str>) -> Option<String> {
    let header = header?;
    let mut plain = None;
    for part in header.split(';').map(str::trim) {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                let encoded = value
                    .split_once("''")
                    .map(|(_, v)| v)
                    .unwrap_or(value)
                    .trim_matches('"');
                if let Ok(decoded) = urlencoding::decode(encoded) {
                    if !decoded.is_empty() {
                        return Some(decoded.into_owned());
                    }
                }
            }
            "filename" => {
                let name = value.trim().trim_matches('"');
                if !name.is_empty() {
                    plain = Some(name.to_string());
                }
            }
            _ => {}
        }
    }
    plain
}

pub fn default_filename(stem: &str, date: NaiveDate) -> String {
    format!("{}_{}.xlsx", stem, date.format("%Y-%m-%d"))
}

/// Saves bytes through a transient anchor and revokes the object URL.
fn save_bytes(bytes: &[u8], content_type: &str, filename: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(content_type);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.style().set_property("display", "none");

    let clicked = body.append_child(&anchor).map(|_| {
        anchor.click();
        let _ = body.remove_child(&anchor);
    });

    let _ = Url::revoke_object_url(&url);
    clicked.map_err(|e| format!("Failed to append anchor: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_quoted_header() {
        assert_eq!(
            filename_from_disposition(Some(r#"attachment; filename="stok_barang.xlsx""#)),
            Some("stok_barang.xlsx".to_string())
        );
    }

    #[test]
    fn test_encoded_filename_takes_precedence() {
        let header = r#"attachment; filename="fallback.xlsx"; filename*=UTF-8''Stok%20Barang.xlsx"#;
        assert_eq!(
            filename_from_disposition(Some(header)),
            Some("Stok Barang.xlsx".to_string())
        );
    }

    #[test]
    fn test_missing_header_has_no_filename() {
        assert_eq!(filename_from_disposition(None), None);
        assert_eq!(filename_from_disposition(Some("inline")), None);
    }

    #[test]
    fn test_default_filename_is_dated() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(default_filename("stok-barang", date), "stok-barang_2026-10-18.xlsx");
    }
}
