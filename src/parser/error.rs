/// Errors raised while parsing a dice formula.
///
/// Always caller-fixable: the input string was malformed and a corrected
/// string will parse. Every variant carries a message suitable for direct
/// display.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParserError {
    /// The input does not start with a `<count>d<type>` die term.
    #[error("Invalid formula")]
    InvalidFormula,

    /// The modifier options after the die term failed to parse.
    #[error("Error parsing roll options: {0}")]
    Options(Box<ParserError>),

    /// Invalid character in the option text.
    #[error("Invalid token: {0}")]
    Token(char),

    /// A numeric field that failed to parse (overflow included).
    #[error("Invalid number: {0}")]
    Number(#[from] std::num::ParseIntError),

    /// An alphabetic sequence that matches no option code.
    #[error("Invalid identifier: {0}")]
    Identifier(String),

    /// An option carried a zero count, limiter or comparison operand.
    #[error("Invalid number value for option {0}")]
    InvalidOptionValue(String),

    /// A comparison operator with no operand after it.
    #[error("Missing comparison operand for option {0}")]
    MissingOperand(String),

    /// A number or comparison with no option code in front of it.
    #[error("Unexpected token in roll options: {0}")]
    UnexpectedToken(String),

    /// A formula rolling zero dice.
    #[error("Die count must be at least 1")]
    DieCount,

    /// A die type outside `[2, 2^48]`.
    #[error("Die type must be between 2 and 281474976710656, got {0}")]
    DieType(u64),
}

impl ParserError {
    /// Unwraps a [`ParserError::Options`] wrapper, returning the underlying
    /// option-parsing error. Any other variant is returned as-is.
    pub fn cause(&self) -> &Self {
        match self {
            ParserError::Options(inner) => inner.as_ref(),
            other => other
        }
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
