use crate::domain::ModelKind;

/// Failure kinds raised by the model, selection and timing layers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComplexityError {
    /// `compute`/`coefficients` called before a successful `fit`.
    #[error("{model}: not yet fitted")]
    NotFitted { model: ModelKind },

    /// The data violates a transform precondition (e.g. `ln(n)` with `n <= 0`).
    #[error("{model}: invalid domain: {reason}")]
    InvalidDomain { model: ModelKind, reason: String },

    /// Too few independent measurements for the model's coefficients.
    #[error("{model}: degenerate fit (points={points}, rank={rank}, required={required})")]
    DegenerateFit {
        model: ModelKind,
        points: usize,
        required: usize,
        rank: usize,
    },

    /// Malformed series or configuration.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Every model in the registry failed to produce a finite residual.
    #[error("no model in the registry produced a finite residual")]
    NoViableModel,
}

impl ComplexityError {
    /// Exit code used by the `bigo` binary for this failure kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            ComplexityError::InvalidInput(_) => 2,
            ComplexityError::DegenerateFit { .. } | ComplexityError::NoViableModel => 3,
            ComplexityError::NotFitted { .. } | ComplexityError::InvalidDomain { .. } => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<ComplexityError> for AppError {
    fn from(err: ComplexityError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complexity_errors_map_to_exit_codes() {
        let err: AppError = ComplexityError::InvalidInput("empty series".into()).into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "invalid input: empty series");

        let err: AppError = ComplexityError::NoViableModel.into();
        assert_eq!(err.exit_code(), 3);

        let err: AppError = ComplexityError::NotFitted {
            model: ModelKind::Quadratic,
        }
        .into();
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.to_string(), "Quadratic: not yet fitted");
    }
}
