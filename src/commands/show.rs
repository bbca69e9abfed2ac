//! Show command - print current status and projects

use momo_status::config::Config;
use momo_status::output::OutputMode;

/// Print the current status
pub fn show(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let overview = super::open_store(config).show()?;
    overview.render(mode);
    Ok(())
}
