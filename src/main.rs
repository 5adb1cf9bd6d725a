use anyhow::Context;
use minivi::{error, logging, RunOptions, TuiApplication};

fn main() -> anyhow::Result<()> {
    let options = RunOptions::from_env();

    if let Some(path) = logging::init(&options).context("failed to open debug log")? {
        log::info!("minivi {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    }

    error::setup_panic_handler();

    let mut app = TuiApplication::new(&options).context("failed to start editor")?;
    app.run().context("terminal session failed")?;

    Ok(())
}
