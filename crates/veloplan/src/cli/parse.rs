use anyhow::Result;
use clap::Args;
use veloplan_path::parse_motion_path;

#[derive(Args)]
pub struct ParseArgs {
    /// Path description, e.g. "F10L45B5R90".
    pub path: String,
}

impl ParseArgs {
    pub fn run(&self) -> Result<()> {
        let commands = parse_motion_path(&self.path);
        tracing::info!("parsed {} motion commands", commands.len());
        println!("{}", serde_json::to_string_pretty(&commands)?);
        Ok(())
    }
}
