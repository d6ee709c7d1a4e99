use spinview_api::types::{PaginatedResponse, Response, Spin, SpinDetail, SpinStatus};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_spins_full() {
    let json = load_fixture("spins.json");
    let resp: PaginatedResponse<Spin> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.meta.paging.page, 1);
    assert_eq!(resp.meta.paging.total_items, 42);
    assert_eq!(resp.meta.paging.total_pages, 5);

    let spin = &resp.data[0];
    assert_eq!(spin.spin_id, 9001);
    assert_eq!(spin.product_id, "SKU-12345");
    assert_eq!(spin.product_name, "Trail Runner GTX");
    assert_eq!(spin.frame_count, 36);
    assert_eq!(spin.status, SpinStatus::Ready);
    assert_eq!(spin.captured_at.to_rfc3339(), "2024-11-02T09:30:00+00:00");

    // Second entry omits the optional rig/operator fields entirely.
    let spin = &resp.data[1];
    assert_eq!(spin.spin_id, 9002);
    assert_eq!(spin.status, SpinStatus::Processing);
}

#[test]
fn deserialize_spins_empty() {
    let json = load_fixture("spins_empty.json");
    let resp: PaginatedResponse<Spin> = serde_json::from_str(&json).unwrap();
    assert!(resp.data.is_empty());
    assert_eq!(resp.meta.paging.total_items, 0);
    assert_eq!(resp.meta.paging.total_pages, 0);
}

#[test]
fn deserialize_spin_detail() {
    let json = load_fixture("spin_detail.json");
    let resp: Response<SpinDetail> = serde_json::from_str(&json).unwrap();

    let detail = resp.data;
    assert_eq!(detail.spin_id, 9001);
    assert_eq!(detail.product_name, "Trail Runner GTX");
    assert_eq!(detail.frame_count, 4);
    assert_eq!(detail.frames.len(), 4);

    let first = &detail.frames[0];
    assert_eq!(first.index, 0);
    assert_eq!(first.url, "https://cdn.spinview.io/spins/9001/000.jpg");
    assert_eq!(first.width, Some(1600));

    // Last frame has no dimensions yet.
    let last = &detail.frames[3];
    assert_eq!(last.index, 3);
    assert_eq!(last.width, None);
    assert_eq!(last.height, None);
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"data": not valid json}"#;
    let result = serde_json::from_str::<PaginatedResponse<Spin>>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"meta": {"paging": {"page": 1}}}"#;
    let result = serde_json::from_str::<PaginatedResponse<Spin>>(json);
    assert!(result.is_err());
}

#[test]
fn deserialize_unknown_status_returns_error() {
    let json = r#"{
        "_spinId": 1,
        "_productId": "SKU-1",
        "productName": "x",
        "frameCount": 1,
        "capturedAt": "2024-11-02T09:30:00+00:00",
        "status": "archived"
    }"#;
    let result = serde_json::from_str::<Spin>(json);
    assert!(result.is_err());
}
