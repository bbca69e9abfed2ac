//! Project command - update one event's progress or status

use momo_status::config::Config;
use momo_status::core::models::ProjectUpdate;
use momo_status::output::OutputMode;

/// Update a project by ID
///
/// An unknown ID is reported but is not a failure.
pub fn project(
    config: &Config,
    id: &str,
    update: &ProjectUpdate,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let result = super::open_store(config).update_project(id, update)?;
    result.render(mode);
    Ok(())
}
