use anyhow::Result;
use clap::Args;
use meetingfile::Meeting;
use recordtext::{
    Record,
    core::{FormatRules, format_field_defs},
};

#[derive(Args)]
pub struct SchemaArgs {}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let text = format_field_defs(Meeting::field_defs(), &FormatRules::default())?;
        print!("{text}");
        Ok(())
    }
}
