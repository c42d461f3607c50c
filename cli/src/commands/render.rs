use std::path::PathBuf;

use anyhow::{Context, Result};
use isainfo::render::{JsonRenderer, OnikiriRenderer, Renderer, RustRenderer};
use tracing::info;

use super::spec::SpecArgs;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Format {
    /// Rust opcode enum with its decode dispatch
    Rust,
    /// Two-letter code list for the Onikiri simulator
    Onikiri,
    Json,
}

// Structure representing the 'render' subcommand.
#[derive(clap::Args)]
#[command(author, about = "Write the decode table in one of the output formats", long_about = None)]
pub struct IsaRender {
    #[clap(flatten)]
    spec: SpecArgs,

    #[clap(short = 'f', long, value_enum, default_value_t = Format::Rust)]
    format: Format,

    /// Output file, stdout when omitted
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,

    /// Name of the generated opcode enum (rust format)
    #[clap(long, default_value = "OpCode")]
    enum_name: String,

    /// Prefix printed before opcode names by the generated Display impl (rust format)
    #[clap(long, default_value = "Op")]
    prefix: String,
}

impl IsaRender {
    pub fn run(&self) -> Result<()> {
        let table = self.spec.load_table()?;

        let renderer: Box<dyn Renderer> = match self.format {
            Format::Rust => Box::new(
                RustRenderer::default()
                    .with_enum_name(self.enum_name.as_str())
                    .with_display_prefix(self.prefix.as_str()),
            ),
            Format::Onikiri => Box::new(OnikiriRenderer::default()),
            Format::Json => Box::new(JsonRenderer),
        };
        let text = renderer
            .render_to_string(&table)
            .with_context(|| format!("Failed to render {:?} output", self.format))?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &text)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote {:?} output for {} opcodes to {}", self.format, table.len(), path.display());
            }
            None => print!("{}", text),
        }

        Ok(())
    }
}
