use proptest::prelude::*;
use crate::roll::{RollData, RollFormula, RollOptions};


pub(crate) fn reroll_strategy(die_type: u64) -> impl Strategy<Value = RollFormula> {
    // Exact faces only: a single bounded pass, so generated rolls always
    // finish well under the die ceiling.
    (1..=die_type as i64).prop_map(RollFormula::exact)
}

pub(crate) fn options_strategy(die_type: u64, die_count: u64) -> impl Strategy<Value = RollOptions> {
    (
        prop::option::of(reroll_strategy(die_type)),
        prop::option::of((1..=die_type as i64).prop_map(RollFormula::exact)),
        prop::option::of(1..=die_count as i64),
        prop::option::of(1..=die_type as i64),
    ).prop_map(|(reroll, explode_once, keep_highest, replace_with_minimum)| {
        RollOptions {
            reroll,
            explode_once,
            keep_highest,
            replace_with_minimum,
            ..Default::default()
        }
    })
}

pub(crate) fn roll_data_strategy() -> impl Strategy<Value = RollData> {
    (1u64..=20, 2u64..=20).prop_flat_map(|(die_count, die_type)| {
        (
            prop::option::of(options_strategy(die_type, die_count)),
            prop::collection::vec(-10i64..=10, 0..3),
        ).prop_map(move |(roll_options, die_modifiers)| {
            RollData {
                die_count,
                die_type,
                die_modifiers,
                roll_options,
            }
        })
    })
}
