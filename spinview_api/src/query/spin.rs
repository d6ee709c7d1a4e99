use url::Url;

use super::common::{Query, QueryCommon, SortDirection};

/// Query builder for the spin listing endpoint.
#[derive(Default)]
pub struct SpinQuery {
    pub common: QueryCommon,
    pub product: Option<String>,
    pub min_frames: Option<i64>,
    pub sort_by: SpinSortBy,
}

impl Query for SpinQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(product) = &self.product {
            url.query_pairs_mut().append_pair("q", product.as_str());
        }
        if let Some(min_frames) = self.min_frames {
            url.query_pairs_mut()
                .append_pair("minFrames", &min_frames.to_string());
        }

        url.query_pairs_mut().append_pair(
            "sortBy",
            format!(
                "{}{}",
                match self.common.sort_direction {
                    SortDirection::Asc => "",
                    SortDirection::Desc => "-",
                },
                &self.sort_by.to_string().as_str()
            )
            .as_str(),
        );

        url
    }
}

impl SpinQuery {
    /// Searches spins by product name or SKU.
    pub fn with_product(mut self, product: &str) -> Self {
        self.product = Some(product.to_string());
        self
    }

    /// Keeps only spins with at least this many frames.
    pub fn with_min_frames(mut self, min_frames: i64) -> Self {
        self.min_frames = Some(min_frames);
        self
    }

    pub fn with_sort_by(mut self, sort_by: SpinSortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

#[derive(Clone, Copy)]
pub enum SpinSortBy {
    CapturedAt = 0,
    FrameCount = 1,
}
impl Default for SpinSortBy {
    fn default() -> Self {
        SpinSortBy::CapturedAt
    }
}
impl std::fmt::Display for SpinSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SpinSortBy::CapturedAt => "capturedAt",
                SpinSortBy::FrameCount => "frameCount",
            }
        )?;
        Ok(())
    }
}
