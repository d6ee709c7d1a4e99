//! The `spins` subcommand: lists 360° spins with search and filters.

use anyhow::{bail, Result};
use clap::Args;
use spinview_api::{Client, Query, SortDirection, SpinQuery, SpinSortBy};

use crate::output::{self, OutputFormat};
use crate::progress;

/// Arguments for the `spins` subcommand.
#[derive(Args)]
pub struct SpinsArgs {
    /// Search spins by product name or SKU
    #[arg(long)]
    pub product: Option<String>,

    /// Only include spins with at least this many frames
    #[arg(long)]
    pub min_frames: Option<i64>,

    /// Page number (1-indexed)
    #[arg(long, default_value_t = 1)]
    pub page: i64,

    /// Results per page
    #[arg(long)]
    pub page_size: Option<i64>,

    /// Sort key: captured or frames
    #[arg(long, default_value = "captured")]
    pub sort: String,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,
}

pub async fn run(args: &SpinsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let sort_by = match args.sort.as_str() {
        "captured" => SpinSortBy::CapturedAt,
        "frames" => SpinSortBy::FrameCount,
        other => bail!("Unknown sort key '{}' (expected captured or frames)", other),
    };

    let mut query = SpinQuery::default()
        .with_page(args.page)
        .with_sort_by(sort_by);
    if let Some(product) = &args.product {
        query = query.with_product(product);
    }
    if let Some(min_frames) = args.min_frames {
        query = query.with_min_frames(min_frames);
    }
    if let Some(page_size) = args.page_size {
        query = query.with_page_size(page_size);
    }
    if args.asc {
        query = query.with_sort_direction(SortDirection::Asc);
    }

    let pb = progress::loading_placeholder("loading spins...");
    let result = client.get_spins(&query).await;
    pb.finish_and_clear();

    let resp = match result {
        Ok(resp) => resp,
        Err(err) => bail!(output::failure_message(&err)),
    };

    match format {
        OutputFormat::Json => output::print_json(&resp.data),
        OutputFormat::Table => {
            output::print_spins_table(&resp.data);
            eprintln!(
                "page {} of {} ({} spins total)",
                resp.meta.paging.page, resp.meta.paging.total_pages, resp.meta.paging.total_items
            );
        }
    }

    Ok(())
}
