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

    let volume = plan
        .lagoon_volume()
        .context("Failed to find the inside of the dug trench.")?;
    println!("The lagoon can hold {} cubic meters of lava.", volume);

    Ok(())
}
