#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]

//! Dice-formula parsing and rolling engine.
//!
//! Turns compact dice notation (`4d6kh3`, `8d6r1x`, `2d20+5`) into a
//! structured [`RollData`], executes it against a uniform CSPRNG through an
//! ordered modifier pipeline (reroll, explode, clamp, keep/drop), and
//! renders an annotated report string.
//!
//! ```
//! use clatter::roll;
//!
//! let outcome = roll("4d6kh3").unwrap();
//! assert!((3..=18).contains(&outcome.total));
//! println!("{}", outcome.report);
//! ```


#[cfg(test)]
mod roll_test_strategies;

mod error;
mod format;
mod rng;
mod roll;
mod parser;

pub use error::Error;
pub use format::format_rolls;
pub use rng::{uniform_int, uniform_int_with, MAX_DIE_TYPE};
pub use roll::{
    execute_roll, execute_roll_with, roll, total,
    Comparator, Mode, Roll, RollData, RollDataBuilder, RollFormula,
    RollOptions, RollOutcome, DIE_LIMIT,
};
pub use parser::{parse_formula, ParserError};
