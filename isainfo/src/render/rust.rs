use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use super::Renderer;
use crate::{
    record::{RegisterArity, SignExtension},
    DecodeTable,
};

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "gen", "macro", "override",
    "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be written as raw identifiers
const RESERVED: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Rust source with an opcode enum and its decode dispatch.
///
/// The generated module is self-contained: it declares its own `RegisterArity` and
/// `SignExtension` enums so it can be dropped into a simulator without depending on
/// this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RustRenderer {
    /// Name of the generated opcode enum
    pub enum_name: String,
    /// Prepended to the opcode name by the generated `Display` impl
    pub display_prefix: String,
}

impl Default for RustRenderer {
    fn default() -> Self {
        Self { enum_name: "OpCode".to_string(), display_prefix: "Op".to_string() }
    }
}

impl RustRenderer {
    pub fn with_enum_name(mut self, name: impl Into<String>) -> Self {
        self.enum_name = name.into();
        self
    }

    pub fn with_display_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.display_prefix = prefix.into();
        self
    }
}

/// Identifier usable as an enum variant for the opcode `name`
pub fn variant_ident(name: &str) -> String {
    if RESERVED.contains(&name) {
        format!("{}_", name)
    } else if KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

fn arity_variant(arity: RegisterArity) -> &'static str {
    match arity {
        RegisterArity::ZeroOperandRegisters => "ZeroOperandRegisters",
        RegisterArity::OneOperandRegister => "OneOperandRegister",
        RegisterArity::TwoOperandRegisters => "TwoOperandRegisters",
    }
}

fn sext_variant(sext: SignExtension) -> &'static str {
    match sext {
        SignExtension::SignExtend => "SignExtend",
        SignExtension::ZeroExtend => "ZeroExtend",
    }
}

/// Variant identifiers for every entry, in specification order.
///
/// Fails if two opcode names end up as the same identifier, e.g. `self` and `self_`.
fn variant_idents(table: &DecodeTable) -> Result<Vec<String>, fmt::Error> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(table.len());
    let mut idents = Vec::with_capacity(table.len());
    for entry in table.iter() {
        let ident = variant_ident(entry.name());
        if let Some(first) = seen.insert(ident.clone(), entry.name()) {
            warn!("Opcodes {} and {} both render as variant {}", first, entry.name(), ident);
            return Err(fmt::Error);
        }
        idents.push(ident);
    }
    Ok(idents)
}

impl Renderer for RustRenderer {
    fn render(&self, table: &DecodeTable, out: &mut dyn fmt::Write) -> fmt::Result {
        let op = &self.enum_name;
        let idents = variant_idents(table)?;

        writeln!(out, "// Generated by isainfo from the ISA specification. Do not edit.")?;
        writeln!(out)?;
        writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
        writeln!(out, "pub enum RegisterArity {{")?;
        writeln!(out, "    ZeroOperandRegisters,")?;
        writeln!(out, "    OneOperandRegister,")?;
        writeln!(out, "    TwoOperandRegisters,")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
        writeln!(out, "pub enum SignExtension {{")?;
        writeln!(out, "    SignExtend,")?;
        writeln!(out, "    ZeroExtend,")?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "#[allow(non_camel_case_types)]")?;
        writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]")?;
        // A zero-variant enum cannot have a repr
        if !table.is_empty() {
            writeln!(out, "#[repr(u32)]")?;
        }
        writeln!(out, "pub enum {} {{", op)?;
        for (entry, ident) in table.iter().zip(&idents) {
            writeln!(out, "    {} = {},", ident, entry.ordinal)?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "impl {} {{", op)?;
        writeln!(out, "    pub const COUNT: usize = {};", table.len())?;
        writeln!(out)?;
        write!(out, "    pub const ALL: [{}; {}] = [", op, table.len())?;
        for (i, ident) in idents.iter().enumerate() {
            if i > 0 {
                write!(out, ", ")?;
            }
            write!(out, "{}::{}", op, ident)?;
        }
        writeln!(out, "];")?;
        writeln!(out)?;

        writeln!(out, "    pub const fn decode_info(self) -> (RegisterArity, SignExtension) {{")?;
        writeln!(out, "        match self {{")?;
        for (entry, ident) in table.iter().zip(&idents) {
            let info = entry.info();
            writeln!(
                out,
                "            {}::{} => (RegisterArity::{}, SignExtension::{}),",
                op,
                ident,
                arity_variant(info.register_arity),
                sext_variant(info.sign_extension)
            )?;
        }
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out)?;

        writeln!(out, "    pub const fn from_opcode_value(raw: u64) -> Option<Self> {{")?;
        writeln!(out, "        match raw {{")?;
        for (entry, ident) in table.iter().zip(&idents) {
            writeln!(out, "            {:#x} => Some({}::{}),", entry.opcode(), op, ident)?;
        }
        writeln!(out, "            _ => None,")?;
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "impl core::fmt::Display for {} {{", op)?;
        writeln!(out, "    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {{")?;
        writeln!(out, "        let name: &str = match *self {{")?;
        for (entry, ident) in table.iter().zip(&idents) {
            let display = format!("{}{}", self.display_prefix, entry.name());
            writeln!(out, "            {}::{} => {:?},", op, ident, display)?;
        }
        writeln!(out, "        }};")?;
        writeln!(out, "        f.write_str(name)")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")
    }
}
