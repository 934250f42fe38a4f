use crate::parser::ParserError;


/// Errors raised while executing a roll.
///
/// These are fatal for the invocation that raised them: the engine never
/// substitutes a default value for a failed draw, and never retries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested die type cannot be rolled. Raised for any `max <= 1`
    /// (a one-sided die has no random outcome) and for die types above
    /// [`crate::MAX_DIE_TYPE`].
    #[error("Invalid die range: {0}")]
    InvalidDieRange(u64),

    /// The roll would generate more than [`crate::DIE_LIMIT`] dice in total.
    /// Guards unbounded recursive reroll/explode formulas.
    #[error("die limit exceeded")]
    DieLimit,

    /// A roll configuration that cannot be built.
    #[error("Invalid roll: {0}")]
    InvalidRoll(String),

    /// A formula that failed to parse.
    #[error("Parser error - {0}")]
    Parser(#[from] ParserError),
}
