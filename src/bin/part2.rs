use anyhow::{Context, Result};
use clap::Parser;
use lagoon::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let plan = lagoon::read_dig_plan(&args.input_path).with_context(|| {
        format!(
            "Failed to read dig plan from given file({}).",
            args.input_path.display()
        )
    })?;

    let plan = plan
        .decode_colors()
        .context("Failed to decode instructions hidden in colors.")?;
    let volume = plan
        .lagoon_volume_by_vertices()
        .context("Failed to measure the dug trench.")?;
    println!(
        "The lagoon dug by decoded plan can hold {} cubic meters of lava.",
        volume
    );

    Ok(())
}
