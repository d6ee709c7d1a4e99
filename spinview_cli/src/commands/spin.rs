//! The `spin` subcommand: shows a single spin and its frame set.

use anyhow::{bail, Result};
use clap::Args;
use spinview_api::types::SpinID;
use spinview_api::Client;

use crate::output::{self, OutputFormat};
use crate::progress;

/// Arguments for the `spin` subcommand.
#[derive(Args)]
pub struct SpinArgs {
    /// Numeric spin ID
    pub id: SpinID,
}

pub async fn run(args: &SpinArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let pb = progress::loading_placeholder("loading 360° view...");
    let result = client.get_spin(args.id).await;
    pb.finish_and_clear();

    let resp = match result {
        Ok(resp) => resp,
        Err(err) => bail!(output::failure_message(&err)),
    };

    match format {
        OutputFormat::Json => output::print_json(&resp.data),
        OutputFormat::Table => output::print_spin_detail(&resp.data),
    }

    Ok(())
}
