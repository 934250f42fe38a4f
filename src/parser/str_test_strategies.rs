use proptest::prelude::*;


pub(crate) fn die_term_strategy() -> impl Strategy<Value = String> {
    (1u64..=100, 2u64..=1000).prop_map(|(count, die)| format!("{}d{}", count, die))
}

pub(crate) fn option_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (
            prop::sample::select(&["r", "rr", "x", "xo"]),
            prop::option::of(1u64..=6)
        ).prop_map(|(code, n)| match n {
            Some(n) => format!("{}{}", code, n),
            None => code.to_string(),
        }),

        (
            prop::sample::select(&["r", "rr", "x", "xo"]),
            prop::option::of(1u64..=3),
            prop::sample::select(&["<", ">", "=", "<=", ">="]),
            1u64..=6
        ).prop_map(|(code, limiter, operator, n)| match limiter {
            Some(limiter) => format!("{}{}{}{}", code, limiter, operator, n),
            None => format!("{}{}{}", code, operator, n),
        }),

        (
            prop::sample::select(&["k", "kh", "kl", "d", "dl", "dh", "min", "max"]),
            prop::option::of(1u64..=6)
        ).prop_map(|(code, n)| match n {
            Some(n) => format!("{}{}", code, n),
            None => code.to_string(),
        }),
    ]
}

pub(crate) fn modifier_strategy() -> impl Strategy<Value = String> {
    (prop::sample::select(&["+", "-"]), 1u64..=99)
        .prop_map(|(sign, n)| format!("{}{}", sign, n))
}

pub(crate) fn formula_strategy() -> impl Strategy<Value = String> {
    (
        die_term_strategy(),
        prop::collection::vec(option_strategy(), 0..3),
        prop::collection::vec(modifier_strategy(), 0..3),
    ).prop_map(|(term, options, modifiers)| {
        let mut formula = term;
        for option in options {
            formula.push_str(&option);
        }
        for modifier in modifiers {
            formula.push_str(&modifier);
        }
        formula
    })
}
