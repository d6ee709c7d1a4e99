use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type SpinID = i64;
pub type ProductID = String;

/// A 360° capture of a single product: one revolution photographed as a
/// fixed number of frames.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Spin {
    #[serde(rename = "_spinId")]
    pub spin_id: SpinID,

    #[serde(rename = "_productId")]
    pub product_id: ProductID,

    pub product_name: String,

    pub frame_count: i64,

    pub captured_at: DateTime<Utc>,

    pub status: SpinStatus,

    camera_rig: Option<String>,

    operator: Option<String>,
}

/// A spin with its full frame set, as returned by the single-spin endpoint.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SpinDetail {
    #[serde(rename = "_spinId")]
    pub spin_id: SpinID,

    #[serde(rename = "_productId")]
    pub product_id: ProductID,

    pub product_name: String,

    pub frame_count: i64,

    pub captured_at: DateTime<Utc>,

    pub status: SpinStatus,

    camera_rig: Option<String>,

    operator: Option<String>,

    pub frames: Vec<Frame>,
}

/// One frame of a spin. Width and height are omitted by the API while a
/// spin is still processing.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub index: i64,

    pub url: String,

    pub width: Option<i64>,

    pub height: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SpinStatus {
    Ready,
    Processing,
    Failed,
}
impl std::fmt::Display for SpinStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SpinStatus::Ready => "ready",
                SpinStatus::Processing => "processing",
                SpinStatus::Failed => "failed",
            }
        )
    }
}
