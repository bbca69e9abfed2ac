//! Status command - update the status block

use momo_status::config::Config;
use momo_status::core::models::StatusUpdate;
use momo_status::output::OutputMode;

/// Overwrite the given status fields
pub fn status(config: &Config, update: StatusUpdate, mode: OutputMode) -> anyhow::Result<()> {
    let result = super::open_store(config).update_status(update)?;
    result.render(mode);
    Ok(())
}
