use serde::Serialize;
use spinview_api::types::{Frame, Spin, SpinDetail};
use spinview_api::Error;
use tabled::{Table, Tabled};

use crate::progress::UNAVAILABLE_MESSAGE;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct SpinRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    spin_id: i64,
    #[tabled(rename = "Product")]
    #[serde(rename = "Product")]
    product: String,
    #[tabled(rename = "SKU")]
    #[serde(rename = "SKU")]
    sku: String,
    #[tabled(rename = "Frames")]
    #[serde(rename = "Frames")]
    frames: i64,
    #[tabled(rename = "Captured")]
    #[serde(rename = "Captured")]
    captured: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
struct FrameRow {
    #[tabled(rename = "Frame")]
    #[serde(rename = "Frame")]
    index: i64,
    #[tabled(rename = "Size")]
    #[serde(rename = "Size")]
    size: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

fn build_spin_rows(spins: &[Spin]) -> Vec<SpinRow> {
    spins
        .iter()
        .map(|spin| SpinRow {
            spin_id: spin.spin_id,
            product: spin.product_name.clone(),
            sku: spin.product_id.clone(),
            frames: spin.frame_count,
            captured: spin.captured_at.format("%Y-%m-%d").to_string(),
            status: spin.status.to_string(),
        })
        .collect()
}

fn build_frame_rows(frames: &[Frame]) -> Vec<FrameRow> {
    frames
        .iter()
        .map(|frame| FrameRow {
            index: frame.index,
            size: format_dimensions(frame),
            url: frame.url.clone(),
        })
        .collect()
}

fn format_dimensions(frame: &Frame) -> String {
    match (frame.width, frame.height) {
        (Some(width), Some(height)) => format!("{}x{}", width, height),
        _ => "-".to_string(),
    }
}

pub fn print_spins_table(spins: &[Spin]) {
    println!("{}", Table::new(build_spin_rows(spins)));
}

pub fn print_spin_detail(detail: &SpinDetail) {
    println!("{} ({})", detail.product_name, detail.product_id);
    println!(
        "captured {} | {} frames | {}",
        detail.captured_at.format("%Y-%m-%d"),
        detail.frame_count,
        detail.status
    );
    println!("{}", Table::new(build_frame_rows(&detail.frames)));
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// User-facing text for a failed API call: the server's own message when one
/// can be extracted, otherwise the fixed unavailable text. The extractor
/// itself never picks a default; that choice belongs here, in the front end.
pub fn failure_message(err: &Error) -> String {
    err.api_message()
        .unwrap_or_else(|| UNAVAILABLE_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_spins_fixture() -> Vec<Spin> {
        let json_str = include_str!("../../spinview_api/tests/fixtures/spins.json");
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        serde_json::from_value(resp["data"].clone()).unwrap()
    }

    #[test]
    fn spin_rows_format_capture_date_and_status() {
        let spins = load_spins_fixture();
        let rows = build_spin_rows(&spins);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].spin_id, 9001);
        assert_eq!(rows[0].captured, "2024-11-02");
        assert_eq!(rows[0].status, "ready");
        assert_eq!(rows[1].status, "processing");
    }

    #[test]
    fn frame_dimensions_fall_back_to_dash() {
        let frame: Frame = serde_json::from_value(serde_json::json!({
            "index": 3,
            "url": "https://cdn.spinview.io/spins/9001/003.jpg"
        }))
        .unwrap();
        assert_eq!(format_dimensions(&frame), "-");

        let frame: Frame = serde_json::from_value(serde_json::json!({
            "index": 0,
            "url": "https://cdn.spinview.io/spins/9001/000.jpg",
            "width": 1600,
            "height": 1600
        }))
        .unwrap();
        assert_eq!(format_dimensions(&frame), "1600x1600");
    }

    #[test]
    fn failure_message_prefers_server_message() {
        let err = Error::HttpStatus {
            status: 401,
            body: r#"{"error": {"message": "Invalid token"}}"#.to_string(),
        };
        assert_eq!(failure_message(&err), "Invalid token");
    }

    #[test]
    fn failure_message_falls_back_when_nothing_extractable() {
        assert_eq!(failure_message(&Error::RequestFailed), UNAVAILABLE_MESSAGE);

        let err = Error::HttpStatus {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(failure_message(&err), UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn failure_message_falls_back_on_empty_server_message() {
        let err = Error::HttpStatus {
            status: 500,
            body: r#"{"error": {"message": ""}}"#.to_string(),
        };
        assert_eq!(failure_message(&err), UNAVAILABLE_MESSAGE);
    }
}
