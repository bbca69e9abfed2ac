//! Command implementations

mod project;
mod push;
mod show;
mod status;

pub use project::project;
pub use push::push;
pub use show::show;
pub use status::status;

use momo_status::adapters::{JsonTimelineFile, SystemClock};
use momo_status::config::Config;
use momo_status::core::services::StatusStore;

/// Status store over the configured timeline file
fn open_store(config: &Config) -> StatusStore<JsonTimelineFile, SystemClock> {
    StatusStore::new(JsonTimelineFile::new(config.timeline_path()), SystemClock)
}
