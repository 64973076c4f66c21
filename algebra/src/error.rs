use thiserror::Error;

/// A curve definition whose Ate loop count cannot drive the Miller loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParametersError {
    #[error("Ate loop count is empty")]
    EmptyLoopCount,

    #[error("Ate loop count digit {digit} at position {position} is not in {{-1, 0, 1}}")]
    InvalidDigit { position: usize, digit: i8 },

    #[error("leading Ate loop count digit must be 1, found {0}")]
    LeadingDigitNotOne(i8),
}

pub type ParametersResult<T> = std::result::Result<T, ParametersError>;
