// ============================================================================
// CSV EXPORT - Current report -> downloadable CSV
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::dom::{create_element, document};
use crate::error::{AppError, AppResult};
use crate::models::query::cell_text;
use crate::models::ReportRow;

/// Header = keys of the first row; one record per row, quoted where needed.
/// Returns `None` when there is nothing to export.
pub fn build_csv(rows: &[ReportRow]) -> AppResult<Option<String>> {
    let first = match rows.first() {
        Some(first) => first,
        None => return Ok(None),
    };
    let columns: Vec<&String> = first.keys().collect();

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(columns.iter().map(|c| c.as_str()))
        .map_err(|e| AppError::Parse(e.to_string()))?;

    for row in rows {
        let record: Vec<String> = columns
            .iter()
            .map(|column| row.get(column.as_str()).map(cell_text).unwrap_or_default())
            .collect();
        writer
            .write_record(&record)
            .map_err(|e| AppError::Parse(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Parse(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| AppError::Parse(e.to_string()))?;
    Ok(Some(text.trim_end_matches('\n').to_string()))
}

pub fn csv_file_name(epoch_millis: i64) -> String {
    format!("report_{}.csv", epoch_millis)
}

/// Build the CSV and hand it to the browser as a download
pub fn download_csv(rows: &[ReportRow]) -> AppResult<()> {
    let content = match build_csv(rows)? {
        Some(content) => content,
        None => {
            log::info!("📭 [CSV] Nothing to export");
            return Ok(());
        }
    };

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&content));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor = create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| AppError::Dom("anchor cast failed".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(&csv_file_name(chrono::Utc::now().timestamp_millis()));

    if let Some(body) = document().and_then(|d| d.body()) {
        body.append_child(&anchor)?;
        anchor.click();
        body.remove_child(&anchor)?;
    } else {
        anchor.click();
    }
    Url::revoke_object_url(&url)?;

    log::info!("📥 [CSV] Exported {} rows", rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(json: &str) -> Vec<ReportRow> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_report_exports_nothing() {
        assert_eq!(build_csv(&[]).unwrap(), None);
    }

    #[test]
    fn test_header_and_rows() {
        let data = rows(r#"[{"name":"Ram","visits":3},{"name":"Sita","visits":null}]"#);
        let csv = build_csv(&data).unwrap().unwrap();

        assert_eq!(csv, "name,visits\nRam,3\nSita,");
    }

    #[test]
    fn test_fields_are_quoted() {
        let data = rows(r#"[{"address":"Ward 4, Pokhara","note":"said \"ok\"\nthen left"}]"#);
        let csv = build_csv(&data).unwrap().unwrap();

        assert_eq!(
            csv,
            "address,note\n\"Ward 4, Pokhara\",\"said \"\"ok\"\"\nthen left\""
        );
    }

    #[test]
    fn test_missing_keys_are_blank() {
        let data = rows(r#"[{"a":1,"b":2},{"a":3}]"#);
        assert_eq!(build_csv(&data).unwrap().unwrap(), "a,b\n1,2\n3,");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(csv_file_name(1767225600000), "report_1767225600000.csv");
    }
}
