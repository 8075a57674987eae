//! Meeting descriptor schema and file store used by the `meetingfile` CLI.

mod meeting;
mod store;

pub use meeting::{Meeting, SEED_MEETING};
pub use store::{RecordFile, StoreError};

use tracing_subscriber::EnvFilter;

/// Log filter built from `RUST_LOG`-style directives, `meetingfile=info` when
/// none are given or they do not parse.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("meetingfile=info"))
}
