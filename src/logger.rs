use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Warn by default so only the status lines reach the console, `RUST_LOG` raises it.
pub fn init() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    Ok(())
}
