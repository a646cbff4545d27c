use anyhow::{Context, Result};
use quillpost::Config;
use tracing::warn;

fn main() -> Result<()> {
    let config = Config::parse();
    quillpost::init_logging(config.verbose);
    config.validate().context("Invalid configuration")?;

    let index = quillpost::build(&config).context("Failed to build site")?;
    println!("Generated: {}", index.display());

    if config.open
        && let Err(e) = open::that(&index)
    {
        warn!(error = %e, "failed to open generated site");
    }

    Ok(())
}
