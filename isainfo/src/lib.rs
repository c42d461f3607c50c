//! ISA specification to decode table
//!
//! An instruction set is described by a small delimited table, one row per opcode:
//!
//! ```text
//! # opcode,name,arity,sext,note
//! 0,NOP,Z,N,
//! 11,ADD,T,N,
//! 12,ADDi,O,Y,
//! ```
//!
//! [`load`] turns that text into [`OpcodeRecord`]s and [`build`] turns the records into an
//! immutable [`DecodeTable`], which a simulator or decoder queries by opcode name or by raw
//! opcode value to learn how many register fields an instruction has and how its
//! immediate is extended. The [`render`] module writes a table out in the formats consumed
//! by downstream tools.
//!
//! ```
//! use isainfo::{DecodeTable, RegisterArity, SignExtension};
//!
//! let table = DecodeTable::from_source("0,ADD,T,N,\n1,ADDI,O,Y,\n").unwrap();
//! let info = table.lookup("ADDI").unwrap();
//! assert_eq!(info.register_arity, RegisterArity::OneOperandRegister);
//! assert_eq!(info.sign_extension, SignExtension::SignExtend);
//! ```
pub mod loader;
pub mod record;
pub mod render;
pub mod table;

pub use loader::{load, parse_opcode_value, LoaderConfig, ParseError, RecordLayout};
pub use record::{DecodeInfo, OpcodeRecord, Ordinal, RegisterArity, SignExtension};
pub use table::{build, BuildError, DecodeEntry, DecodeTable};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Specification error: {0}")]
    Parse(#[from] ParseError),
    #[error("Decode table error: {0}")]
    Build(#[from] BuildError),
}
