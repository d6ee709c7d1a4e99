use serde::{Deserialize, Serialize};

/// Envelope metadata returned alongside paginated payloads.
#[derive(Serialize, Deserialize, Debug)]
pub struct Meta {
    pub paging: Paging,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub page: i64,
    pub size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

/// A page of results plus its paging metadata.
#[derive(Serialize, Deserialize, Debug)]
pub struct PaginatedResponse<T> {
    pub meta: Meta,
    pub data: Vec<T>,
}

/// A single-resource response.
#[derive(Serialize, Deserialize, Debug)]
pub struct Response<T> {
    pub data: T,
}
