//! Push command - commit and push the website

use log::debug;

use momo_status::adapters::{GitVersionControl, SystemClock};
use momo_status::config::Config;
use momo_status::core::services::Publisher;
use momo_status::output::{OutputMode, PublishResult};

/// Stage, commit and push the website checkout
pub fn push(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let vcs = GitVersionControl::new(config.website_dir.clone())
        .stdout_to_stderr(mode == OutputMode::Json);
    debug!("Publishing from {}", vcs.workdir().display());

    let report = Publisher::new(vcs, SystemClock, config.publish_settings()).publish()?;

    PublishResult {
        success: true,
        steps: report.steps,
        commit_message: report.commit_message,
        dashboard_url: config.dashboard_url.clone(),
        deploy_wait_secs: config.deploy_wait_secs,
    }
    .render(mode);
    Ok(())
}
