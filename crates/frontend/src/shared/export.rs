/// CSV export for the report tables
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trait for row types that can be exported to CSV
pub trait CsvReport {
    /// Column headers, in output order
    fn headers() -> Vec<&'static str>;

    /// One encoded CSV row for this record
    fn to_csv_row(&self) -> Vec<String>;
}

/// Wrap a text cell in double quotes.
///
/// Embedded quotes are NOT doubled (not RFC 4180); existing downstream
/// sheets expect the raw form. Numeric cells skip this wrapper entirely.
pub fn quoted(text: &str) -> String {
    format!("\"{}\"", text)
}

/// Render the full export document: UTF-8 BOM, header line, one line per
/// record, then exactly one summary line. The summary carries its label in
/// its first cell.
pub fn build_csv<T: CsvReport>(data: &[T], summary_row: &[String]) -> String {
    let mut csv_content = String::new();

    // UTF-8 BOM so Excel renders Thai text correctly
    csv_content.push('\u{FEFF}');

    csv_content.push_str(&T::headers().join(","));
    csv_content.push('\n');

    for item in data {
        csv_content.push_str(&item.to_csv_row().join(","));
        csv_content.push('\n');
    }

    csv_content.push_str(&summary_row.join(","));
    csv_content.push('\n');

    csv_content
}

/// Export filename: `{prefix}-{YYYY-MM-DD}-{HH-MM-SS}.csv`. Time separators
/// are dashes, never colons.
pub fn csv_filename(prefix: &str, now: chrono::DateTime<chrono::Utc>) -> String {
    format!("{}-{}.csv", prefix, now.format("%Y-%m-%d-%H-%M-%S"))
}

/// Hand the document to the browser as a file download.
pub fn download_csv(content: &str, filename: &str) -> Result<(), String> {
    let blob = create_csv_blob(content)?;
    download_blob(&blob, filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Row {
        name: String,
        amount: f64,
    }

    impl CsvReport for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Amount"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![quoted(&self.name), format!("{}", self.amount.round() as i64)]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "สมชาย".to_string(),
                amount: 100.4,
            },
            Row {
                name: "B".to_string(),
                amount: 200.0,
            },
        ]
    }

    #[test]
    fn test_build_csv_starts_with_bom() {
        let csv = build_csv(&rows(), &[quoted("รวม"), "300".to_string()]);
        assert!(csv.starts_with('\u{FEFF}'));
        let bytes = csv.as_bytes();
        assert_eq!(&bytes[0..3], &[0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn test_build_csv_line_count_is_rows_plus_two() {
        let data = rows();
        let csv = build_csv(&data, &[quoted("รวม"), "300".to_string()]);
        let lines: Vec<&str> = csv.lines().collect();
        // header + N rows + 1 summary row
        assert_eq!(lines.len(), data.len() + 2);
        assert_eq!(lines[0].trim_start_matches('\u{FEFF}'), "Name,Amount");
        assert_eq!(lines[1], "\"สมชาย\",100");
        assert_eq!(lines[3], "\"รวม\",300");
    }

    #[test]
    fn test_build_csv_empty_data_still_has_summary() {
        let csv = build_csv::<Row>(&[], &[quoted("รวม"), "0".to_string()]);
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_quoted_wraps_without_escaping() {
        assert_eq!(quoted("plain"), "\"plain\"");
        assert_eq!(quoted("a \"quoted\" name"), "\"a \"quoted\" name\"");
    }

    #[test]
    fn test_csv_filename() {
        let now = chrono::Utc
            .with_ymd_and_hms(2024, 5, 15, 9, 30, 5)
            .unwrap();
        assert_eq!(
            csv_filename("supplier-commission", now),
            "supplier-commission-2024-05-15-09-30-05.csv"
        );
    }
}
