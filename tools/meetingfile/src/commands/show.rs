use anyhow::{Context, Result};
use clap::Args;
use meetingfile::Meeting;
use recordtext::{Record, RecordCodec};

use super::FileArgs;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    file: FileArgs,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let store = self.file.record_file();
        let text = store.read_or_seed()?;

        let codec = RecordCodec::default();
        let meeting: Meeting = codec
            .deserialize(&text)
            .with_context(|| format!("failed to decode {}", store.path().display()))?;

        let fields = Meeting::field_defs();
        let width = fields.names().map(str::len).max().unwrap_or(0);
        for (field, value) in fields.iter().zip(meeting.values()) {
            let formatted = codec.rules().format(&field.field_type, &value)?;
            println!("{:<width$}  {formatted}", field.name);
        }
        Ok(())
    }
}
