use anyhow::{Context, Result};
use clap::Args;
use meetingfile::Meeting;
use tracing::info;

use super::FileArgs;

#[derive(Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    file: FileArgs,

    /// New meeting title
    #[arg(long, default_value = "Updated Meeting Title")]
    title: String,

    /// New maximum number of participants
    #[arg(long, default_value_t = 50)]
    users_limit: i32,

    /// Print the updated text instead of writing it
    #[arg(long)]
    dry_run: bool,
}

impl UpdateArgs {
    pub fn run(self) -> Result<()> {
        let store = self.file.record_file();
        let text = store.read_or_seed()?;

        let mut meeting: Meeting = recordtext::deserialize(&text)
            .with_context(|| format!("failed to decode {}", store.path().display()))?;
        meeting.title = self.title;
        meeting.users_limit = self.users_limit;

        let updated = recordtext::serialize(&meeting)?;
        if self.dry_run {
            print!("{updated}");
            return Ok(());
        }

        store.write(&updated)?;
        info!(path = %store.path().display(), "meeting updated");
        println!("Saved.");
        Ok(())
    }
}
