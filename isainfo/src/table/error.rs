/// Decode table construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("duplicate opcode name `{name}` on lines {first_line} and {second_line}")]
    DuplicateOpcodeName { name: String, first_line: usize, second_line: usize },

    #[error("duplicate opcode value {value:#x} on lines {first_line} and {second_line}")]
    DuplicateOpcodeValue { value: u64, first_line: usize, second_line: usize },

    #[error("too many opcodes: {0} does not fit in an ordinal")]
    TooManyOpcodes(usize),
}
