use crate::rng::MAX_DIE_TYPE;
use crate::roll::{RollData, RollFormula, RollOptions};
use crate::parser::error::*;
use crate::parser::{Lexer, OptionCode, Token};


/// Parses a dice formula string into a [`RollData`].
///
/// A formula is a `<count>d<type>` die term followed by free-form modifier
/// text: option codes (`kh3`, `r1`, `x`, `min2`, ...) and flat signed
/// modifiers (`+5`, `-2`). Case-insensitive; whitespace is ignored outside
/// tokens.
///
/// # Errors
/// Returns [`ParserError::InvalidFormula`] when the die term is missing,
/// range errors for die counts below 1 or die types outside `[2, 2^48]`,
/// and [`ParserError::Options`] wrapping the underlying cause when the
/// option text is malformed.
///
/// # Examples
/// ```
/// use clatter::parse_formula;
///
/// let data = parse_formula("4d6kh3+2").unwrap();
/// assert_eq!(data.die_count, 4);
/// assert_eq!(data.die_type, 6);
/// assert_eq!(data.die_modifiers, vec![2]);
/// assert_eq!(data.roll_options.unwrap().keep_highest, Some(3));
///
/// assert!(parse_formula("banana").is_err());
/// assert!(parse_formula("1d1").is_err());
/// ```
pub fn parse_formula(input: &str) -> Result<RollData> {
    let formula: String = input
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let count_end = formula
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(formula.len());

    if count_end == 0 || !formula[count_end..].starts_with('d') {
        return Err(ParserError::InvalidFormula);
    }

    let die_count: u64 = formula[..count_end].parse()?;

    let rest = &formula[count_end + 1..];
    let type_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    if type_end == 0 {
        return Err(ParserError::InvalidFormula);
    }

    let die_type: u64 = rest[..type_end].parse()?;

    if die_count < 1 {
        return Err(ParserError::DieCount);
    }

    if die_type < 2 || die_type > MAX_DIE_TYPE {
        return Err(ParserError::DieType(die_type));
    }

    let (option_text, die_modifiers) = split_modifiers(&rest[type_end..])?;

    let roll_options = if option_text.is_empty() {
        None
    } else {
        let options = parse_options(&option_text)
            .map_err(|err| ParserError::Options(Box::new(err)))?;
        Some(options)
    };

    Ok(RollData {
        die_count,
        die_type,
        die_modifiers,
        roll_options,
    })
}

/// Pulls every `[+-]digits` token out of the trailing text, in encounter
/// order. What remains is the raw option string.
fn split_modifiers(text: &str) -> Result<(String, Vec<i64>)> {
    let chars: Vec<char> = text.chars().collect();
    let mut options = String::new();
    let mut modifiers = Vec::new();
    let mut position = 0;

    while position < chars.len() {
        let ch = chars[position];
        let signed = (ch == '+' || ch == '-')
            && chars.get(position + 1).is_some_and(|c| c.is_ascii_digit());

        if !signed {
            options.push(ch);
            position += 1;
            continue;
        }

        let start = position + 1;
        let mut end = start;
        while end < chars.len() && chars[end].is_ascii_digit() {
            end += 1;
        }

        let digits: String = chars[start..end].iter().collect();
        let value: i64 = digits.parse()?;
        modifiers.push(if ch == '-' { -value } else { value });
        position = end;
    }

    Ok((options, modifiers))
}

/// Parses a raw option string into a [`RollOptions`].
///
/// Grammar per match: `code [limiter] [operator] [number]`. A later
/// occurrence of a code overwrites an earlier one; that last-write-wins
/// behavior is deliberate and documented rather than rejected.
fn parse_options(input: &str) -> Result<RollOptions> {
    OptionParser::new(input)?.parse()
}


/// A single-lookahead parser over the option token stream.
#[derive(Debug)]
struct OptionParser {
    lexer: Lexer,
    current: Token,
    peek: Token,
}

impl OptionParser {
    fn new(input: &str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        let peek = lexer.next_token()?;

        Ok(Self { lexer, current, peek })
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.peek;
        self.peek = self.lexer.next_token()?;

        Ok(())
    }

    fn parse(mut self) -> Result<RollOptions> {
        let mut options = RollOptions::default();

        loop {
            match self.current {
                Token::Eof => break,
                Token::Code(code) => self.parse_option(code, &mut options)?,
                other => return Err(ParserError::UnexpectedToken(format!("{other:?}"))),
            }
        }

        Ok(options)
    }

    /// Consumes one `code [limiter] [operator] [number]` match and records it.
    fn parse_option(&mut self, code: OptionCode, options: &mut RollOptions) -> Result<()> {
        let mut first = None;
        if let Token::Number(n) = self.peek {
            self.advance()?;
            first = Some(n);
        }

        let mut operator = None;
        if let Token::Compare(comparator) = self.peek {
            self.advance()?;
            operator = Some(comparator);
        }

        let mut second = None;
        if operator.is_some() {
            match self.peek {
                Token::Number(n) => {
                    self.advance()?;
                    second = Some(n);
                }
                _ => return Err(ParserError::MissingOperand(code.as_str().into())),
            }
        }

        for value in [first, second].into_iter().flatten() {
            if value <= 0 {
                return Err(ParserError::InvalidOptionValue(code.as_str().into()));
            }
        }

        // With an operator, the operator-qualified integer is the number and
        // a preceding bare integer is the limiter. A lone integer is the
        // number itself; nothing at all leaves the absent sentinel.
        let (limiter, number) = match (first, operator, second) {
            (limiter, Some(_), Some(number)) => (limiter, number),
            (Some(number), None, None) => (None, number),
            (None, None, None) => (None, RollFormula::ABSENT),
            other => unreachable!("{other:?}"),
        };

        let formula = RollFormula { operator, number, limiter };

        match code {
            OptionCode::Reroll => options.reroll = Some(formula),
            OptionCode::RecursiveReroll => options.recursive_reroll = Some(formula),
            OptionCode::Explode => options.explode = Some(formula),
            OptionCode::ExplodeOnce => options.explode_once = Some(formula),
            OptionCode::Keep | OptionCode::KeepHighest => options.keep_highest = Some(number),
            OptionCode::KeepLowest => options.keep_lowest = Some(number),
            OptionCode::Drop | OptionCode::DropLowest => options.drop_lowest = Some(number),
            OptionCode::DropHighest => options.drop_highest = Some(number),
            OptionCode::Minimum => options.replace_with_minimum = Some(number),
            OptionCode::Maximum => options.replace_with_maximum = Some(number),
        }

        self.advance()
    }
}


#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use super::*;
    use crate::parser::str_test_strategies::*;
    use crate::roll::Comparator;


    #[test]
    fn test_bare_die_term() {
        let data = parse_formula("4d6").unwrap();

        assert_eq!(data.die_count, 4);
        assert_eq!(data.die_type, 6);
        assert!(data.die_modifiers.is_empty());
        assert!(data.roll_options.is_none());
    }

    #[test]
    fn test_single_modifier() {
        let data = parse_formula("2d20+5").unwrap();

        assert_eq!(data.die_modifiers, vec![5]);
        assert!(data.roll_options.is_none());
    }

    #[test]
    fn test_multiple_modifiers_stay_separate() {
        let data = parse_formula("2d20+5-3+1").unwrap();
        assert_eq!(data.die_modifiers, vec![5, -3, 1]);
    }

    #[test]
    fn test_keep_highest() {
        let data = parse_formula("6d6kh3").unwrap();
        let options = data.roll_options.unwrap();

        assert_eq!(options.keep_highest, Some(3));
        assert_eq!(options.keep_lowest, None);
    }

    #[test]
    fn test_bare_keep_and_drop_sentinels() {
        let options = parse_formula("4d6kh").unwrap().roll_options.unwrap();
        assert_eq!(options.keep_highest, Some(RollFormula::ABSENT));

        let options = parse_formula("4d6k2").unwrap().roll_options.unwrap();
        assert_eq!(options.keep_highest, Some(2));

        let options = parse_formula("4d6d2").unwrap().roll_options.unwrap();
        assert_eq!(options.drop_lowest, Some(2));
    }

    #[test]
    fn test_reroll_formula() {
        let options = parse_formula("8d6r1").unwrap().roll_options.unwrap();
        let formula = options.reroll.unwrap();

        assert_eq!(formula.number, 1);
        assert_eq!(formula.operator, None);
        assert_eq!(formula.limiter, None);
    }

    #[test]
    fn test_reroll_then_explode() {
        let options = parse_formula("8d6r1x").unwrap().roll_options.unwrap();

        assert_eq!(options.reroll.unwrap().number, 1);
        assert_eq!(options.explode.unwrap().number, RollFormula::ABSENT);
    }

    #[test]
    fn test_operator_and_limiter() {
        let options = parse_formula("10d10rr2<=3").unwrap().roll_options.unwrap();
        let formula = options.recursive_reroll.unwrap();

        assert_eq!(formula.limiter, Some(2));
        assert_eq!(formula.operator, Some(Comparator::LessEqual));
        assert_eq!(formula.number, 3);
    }

    #[test]
    fn test_operator_without_limiter() {
        let options = parse_formula("10d10x>=9").unwrap().roll_options.unwrap();
        let formula = options.explode.unwrap();

        assert_eq!(formula.limiter, None);
        assert_eq!(formula.operator, Some(Comparator::GreaterEqual));
        assert_eq!(formula.number, 9);
    }

    #[test]
    fn test_clamp_options() {
        let options = parse_formula("4d6min2max5").unwrap().roll_options.unwrap();

        assert_eq!(options.replace_with_minimum, Some(2));
        assert_eq!(options.replace_with_maximum, Some(5));
    }

    #[test]
    fn test_duplicate_code_last_wins() {
        let options = parse_formula("4d6kh2kh3").unwrap().roll_options.unwrap();
        assert_eq!(options.keep_highest, Some(3));
    }

    #[test]
    fn test_case_and_whitespace() {
        let data = parse_formula(" 4D6 KH3 + 2 ").unwrap();

        assert_eq!(data.die_count, 4);
        assert_eq!(data.die_modifiers, vec![2]);
        assert_eq!(data.roll_options.unwrap().keep_highest, Some(3));
    }

    #[test]
    fn test_missing_die_term() {
        for input in ["", "banana", "d6", "4d", "4", "kh3", "+5"] {
            assert!(
                matches!(parse_formula(input), Err(ParserError::InvalidFormula)),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_die_range_boundaries() {
        assert!(matches!(parse_formula("0d6"), Err(ParserError::DieCount)));
        assert!(matches!(parse_formula("1d1"), Err(ParserError::DieType(1))));
        assert!(matches!(parse_formula("1d0"), Err(ParserError::DieType(0))));
        assert!(matches!(
            parse_formula("1d281474976710657"),
            Err(ParserError::DieType(_))
        ));
        assert!(parse_formula("1d281474976710656").is_ok());
    }

    #[test]
    fn test_zero_option_value() {
        let err = parse_formula("4d6kh0").unwrap_err();

        assert!(matches!(err.cause(), ParserError::InvalidOptionValue(code) if code == "kh"));
        assert_eq!(
            err.to_string(),
            "Error parsing roll options: Invalid number value for option kh"
        );
    }

    #[test]
    fn test_zero_limiter() {
        let err = parse_formula("4d6rr0<=2").unwrap_err();
        assert!(matches!(err.cause(), ParserError::InvalidOptionValue(_)));
    }

    #[test]
    fn test_bare_comparison_is_rejected() {
        let err = parse_formula("10d10>=8+2").unwrap_err();
        assert!(matches!(err.cause(), ParserError::UnexpectedToken(_)));
    }

    #[test]
    fn test_dangling_operator() {
        let err = parse_formula("4d6r>=").unwrap_err();
        assert!(matches!(err.cause(), ParserError::MissingOperand(code) if code == "r"));
    }

    #[test]
    fn test_unknown_code() {
        let err = parse_formula("4d6z3").unwrap_err();
        assert!(matches!(err.cause(), ParserError::Identifier(_)));
    }

    proptest! {
        #[test]
        fn test_die_term_round_trip(count in 1u64..=100, die in 2u64..=1000) {
            let data = parse_formula(&format!("{count}d{die}")).unwrap();

            prop_assert_eq!(data.die_count, count);
            prop_assert_eq!(data.die_type, die);
        }

        #[test]
        fn test_generated_formulas_parse(input in formula_strategy()) {
            let data = parse_formula(&input);
            prop_assert!(data.is_ok(), "formula {input:?} failed: {data:?}");
        }

        #[test]
        fn test_modifiers_survive_in_order(
            count in 1u64..=20,
            die in 2u64..=20,
            modifiers in prop::collection::vec(-99i64..=99, 0..4)
        ) {
            let modifiers: Vec<i64> = modifiers.into_iter().filter(|m| *m != 0).collect();
            let mut input = format!("{count}d{die}");
            for modifier in &modifiers {
                if *modifier >= 0 {
                    input.push('+');
                }
                input.push_str(&modifier.to_string());
            }

            let data = parse_formula(&input).unwrap();
            prop_assert_eq!(data.die_modifiers, modifiers);
        }

        #[test]
        fn test_number_typed_counts(
            code in prop::sample::select(&["k", "kh", "kl", "d", "dl", "dh"]),
            n in 1i64..=10
        ) {
            let options = parse_formula(&format!("12d6{code}{n}")).unwrap().roll_options.unwrap();
            let recorded = options.keep_highest
                .or(options.keep_lowest)
                .or(options.drop_lowest)
                .or(options.drop_highest);

            prop_assert_eq!(recorded, Some(n));
        }
    }
}
