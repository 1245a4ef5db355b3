use thiserror::Error;

pub type Result<T> = std::result::Result<T, CasError>;

#[derive(Debug, Error)]
pub enum CasError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unsupported operand type(s) for {op}: {operand}")]
    UnsupportedOperand { op: &'static str, operand: String },
    #[error("evaluation error: {0}")]
    Evaluation(String),
    #[error("invalid settings: {0}")]
    Config(#[from] serde_json::Error),
}

impl CasError {
    pub(crate) fn unsupported(op: &'static str, operand: impl Into<String>) -> Self {
        CasError::UnsupportedOperand {
            op,
            operand: operand.into(),
        }
    }
}
