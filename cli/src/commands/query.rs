use anyhow::{anyhow, Result};
use isainfo::{parse_opcode_value, DecodeEntry};

use super::spec::SpecArgs;

// Structure representing the 'query' subcommand.
#[derive(clap::Args)]
#[command(author, about = "Print the decode attributes of one opcode", long_about = None)]
pub struct IsaQuery {
    #[clap(flatten)]
    spec: SpecArgs,

    /// Opcode name
    #[clap(required_unless_present = "opcode", conflicts_with = "opcode")]
    name: Option<String>,

    /// Raw opcode value (decimal, 0x-prefixed hexadecimal or 0b-prefixed binary)
    #[clap(long, value_parser = opcode_value)]
    opcode: Option<u64>,
}

impl IsaQuery {
    pub fn run(&self) -> Result<()> {
        let table = self.spec.load_table()?;

        let entry = match (&self.name, self.opcode) {
            (Some(name), _) => {
                table.entry(name).ok_or_else(|| anyhow!("Unknown opcode name {}", name))?
            }
            (None, Some(raw)) => table
                .entry_by_opcode_value(raw)
                .ok_or_else(|| anyhow!("Unknown opcode value {:#x}", raw))?,
            (None, None) => return Err(anyhow!("Either an opcode name or --opcode is required")),
        };

        println!("{}", describe(entry));
        Ok(())
    }
}

fn describe(entry: &DecodeEntry) -> String {
    let info = entry.info();
    format!(
        "{} (ordinal {}, opcode {:#x}): {}, {}, {}-bit immediate",
        entry.name(),
        entry.ordinal,
        entry.opcode(),
        info.register_arity,
        info.sign_extension,
        info.register_arity.immediate_width()
    )
}

/// Same literal syntax as the opcode column of a specification
fn opcode_value(value: &str) -> Result<u64, String> {
    parse_opcode_value(value).ok_or_else(|| format!("invalid opcode value `{}`", value))
}
