/// Specification parse errors. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: malformed record, expected {expected} fields but found {found}")]
    MalformedRecord { line: usize, expected: &'static str, found: usize },

    #[error("line {line}: invalid opcode value `{token}`")]
    InvalidOpcodeValue { line: usize, token: String },

    #[error("line {line}: `{token}` is not a valid opcode name")]
    InvalidOpcodeName { line: usize, token: String },

    #[error("line {line}: unknown register arity `{token}` (expected Z, O or T)")]
    UnknownRegisterArity { line: usize, token: String },

    #[error("line {line}: unknown sign extension `{token}` (expected Y, N or x)")]
    UnknownSignExtension { line: usize, token: String },
}

impl ParseError {
    /// Line of the specification that caused the error
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedRecord { line, .. }
            | ParseError::InvalidOpcodeValue { line, .. }
            | ParseError::InvalidOpcodeName { line, .. }
            | ParseError::UnknownRegisterArity { line, .. }
            | ParseError::UnknownSignExtension { line, .. } => *line,
        }
    }
}
