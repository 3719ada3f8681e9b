//! `ogharvest run` – process the URL list.

use anyhow::Result;
use ogharvest_core::config::HarvestConfig;
use ogharvest_core::harvest;

use crate::cli::RunArgs;

pub fn run_harvest(mut cfg: HarvestConfig, args: &RunArgs) -> Result<()> {
    args.apply(&mut cfg);
    tracing::info!("application starting");
    let summary = harvest::run(&cfg)?;
    if summary.processed() == 0 {
        println!("No URLs in {}.", cfg.input_path.display());
    } else {
        println!(
            "Processed {} URL(s): {} image(s) saved, {} metadata file(s) written in {}.",
            summary.processed(),
            summary.images_saved(),
            summary.metadata_written(),
            cfg.output_dir.display()
        );
    }
    Ok(())
}
