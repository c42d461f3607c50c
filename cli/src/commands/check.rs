use anyhow::Result;
use isainfo::RegisterArity;
use tracing::info;

use super::spec::SpecArgs;

// Structure representing the 'check' subcommand.
#[derive(clap::Args)]
#[command(author, about = "Validate a specification and summarize its opcodes", long_about = None)]
pub struct IsaCheck {
    #[clap(flatten)]
    spec: SpecArgs,
}

impl IsaCheck {
    pub fn run(&self) -> Result<()> {
        let table = self.spec.load_table()?;

        let count = |arity: RegisterArity| {
            table.iter().filter(|entry| entry.record.register_arity == arity).count()
        };
        let signed = table.iter().filter(|entry| entry.info().sign_extension.is_signed()).count();

        info!(
            "{}: {} opcodes ({} zero-reg, {} one-reg, {} two-reg, {} sign-extended)",
            self.spec.path.display(),
            table.len(),
            count(RegisterArity::ZeroOperandRegisters),
            count(RegisterArity::OneOperandRegister),
            count(RegisterArity::TwoOperandRegisters),
            signed
        );
        println!("{}", table.len());

        Ok(())
    }
}
