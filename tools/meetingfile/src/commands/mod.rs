pub mod schema;
pub mod show;
pub mod update;

use std::path::PathBuf;

use clap::Args;
use meetingfile::{RecordFile, SEED_MEETING};

/// Location of the meeting file, shared by the commands that read it.
#[derive(Args)]
pub struct FileArgs {
    /// Path to the meeting file (created with a default meeting if absent)
    #[arg(short, long, default_value = "data/test.meeting")]
    file: PathBuf,
}

impl FileArgs {
    pub fn record_file(&self) -> RecordFile {
        RecordFile::new(&self.file, SEED_MEETING)
    }
}
