pub mod commands;

use anyhow::Result;
use clap::Subcommand;

use commands::{IsaCheck, IsaQuery, IsaRender};

// Enum defining the available subcommands of `isainfo`.
#[derive(Subcommand)]
pub enum IsaInfoCommands {
    Check(IsaCheck),
    Render(IsaRender),
    Query(IsaQuery),
}

impl IsaInfoCommands {
    pub fn run(&self) -> Result<()> {
        match self {
            IsaInfoCommands::Check(cmd) => cmd.run(),
            IsaInfoCommands::Render(cmd) => cmd.run(),
            IsaInfoCommands::Query(cmd) => cmd.run(),
        }
    }
}
