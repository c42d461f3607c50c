use std::path::PathBuf;

use anyhow::{Context, Result};
use isainfo::{DecodeTable, LoaderConfig, RecordLayout};
use tracing::debug;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LayoutArg {
    /// 4 or 5 columns per row
    Any,
    /// opcode,name,arity,sext
    Compact,
    /// opcode,name,arity,sext,note
    Annotated,
}

impl From<LayoutArg> for RecordLayout {
    fn from(layout: LayoutArg) -> Self {
        match layout {
            LayoutArg::Any => RecordLayout::Any,
            LayoutArg::Compact => RecordLayout::Compact,
            LayoutArg::Annotated => RecordLayout::Annotated,
        }
    }
}

// Arguments shared by every subcommand that reads a specification file.
#[derive(clap::Args, Debug)]
pub struct SpecArgs {
    /// ISA specification file
    #[clap(short = 's', long = "spec", env = "ISAINFO_SPEC")]
    pub path: PathBuf,

    #[clap(long, value_enum, default_value_t = LayoutArg::Any)]
    pub layout: LayoutArg,

    /// Lines starting with this character are ignored
    #[clap(long, default_value_t = '#')]
    pub comment: char,

    #[clap(long, default_value_t = ',')]
    pub delimiter: char,
}

impl SpecArgs {
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig::default()
            .with_layout(self.layout.into())
            .with_comment_marker(self.comment)
            .with_delimiter(self.delimiter)
    }

    /// Read the specification file and build its decode table
    pub fn load_table(&self) -> Result<DecodeTable> {
        let source = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read specification {}", self.path.display()))?;
        debug!("Read {} bytes from {}", source.len(), self.path.display());

        DecodeTable::from_source_with(&self.loader_config(), &source)
            .with_context(|| format!("Invalid specification {}", self.path.display()))
    }
}
