use std::fmt::Display;
use rand::Rng;
use crate::Error;
use crate::rng::{uniform_int_with, MAX_DIE_TYPE};


/// Hard ceiling on the total number of dice a single roll may generate,
/// counting rerolls and explosions. Without it an unbounded recursive
/// formula never terminates.
pub const DIE_LIMIT: usize = 10_000;


/// A comparison operator attached to a conditional modifier, as in `x>=5`
/// or `rr<=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comparator {
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `=`
    Equal,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
}

impl Comparator {
    /// Applies the comparison to a die value (`lhs`) and the option's
    /// operand (`rhs`).
    pub fn compare(&self, lhs: i64, rhs: i64) -> bool {
        match self {
            Comparator::Less => lhs < rhs,
            Comparator::Greater => lhs > rhs,
            Comparator::Equal => lhs == rhs,
            Comparator::LessEqual => lhs <= rhs,
            Comparator::GreaterEqual => lhs >= rhs,
        }
    }
}

impl Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Comparator::Less => "<",
            Comparator::Greater => ">",
            Comparator::Equal => "=",
            Comparator::LessEqual => "<=",
            Comparator::GreaterEqual => ">=",
        };

        write!(f, "{}", symbol)
    }
}


/// The matching rule carried by a conditional option (the reroll and
/// explode families).
///
/// With no operator the rule is exact equality against `number`. A `number`
/// of [`RollFormula::ABSENT`] means the option was written bare (`r`, `x`)
/// and the per-option default face is used instead. `limiter` bounds how
/// many recursive passes the rule may run where that applies.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollFormula {
    /// Comparison operator, or exact equality when absent.
    pub operator: Option<Comparator>,
    /// The operand to match against, or [`RollFormula::ABSENT`].
    pub number: i64,
    /// Bound on recursive passes, where the option recurses.
    pub limiter: Option<i64>,
}

impl RollFormula {
    /// Sentinel for an option written with no number at all.
    pub const ABSENT: i64 = -1;

    /// An exact-equality rule against `number`.
    pub fn exact(number: i64) -> Self {
        Self { operator: None, number, limiter: None }
    }

    /// An operator-qualified rule.
    pub fn compared(operator: Comparator, number: i64) -> Self {
        Self { operator: Some(operator), number, limiter: None }
    }

    /// A bare rule with no operand; matching falls back to the option's
    /// default face.
    pub fn bare() -> Self {
        Self { operator: None, number: Self::ABSENT, limiter: None }
    }

    /// Attaches a pass limiter.
    pub fn with_limiter(mut self, limiter: i64) -> Self {
        self.limiter = Some(limiter);
        self
    }

    /// The operand this rule matches against, falling back to `default`
    /// when the option was written bare.
    pub fn resolve(&self, default: i64) -> i64 {
        if self.number < 0 { default } else { self.number }
    }

    /// Whether a die showing `value` triggers this rule.
    pub fn matches(&self, value: i64, default: i64) -> bool {
        let number = self.resolve(default);

        match &self.operator {
            None => value == number,
            Some(comparator) => comparator.compare(value, number),
        }
    }
}

impl Display for RollFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(limiter) = self.limiter {
            write!(f, "{}", limiter)?;
        }

        if let Some(operator) = &self.operator {
            write!(f, "{}", operator)?;
        }

        if self.number >= 0 {
            write!(f, "{}", self.number)?;
        }

        Ok(())
    }
}


/// The sparse set of modifier options parsed from a formula.
///
/// Conditional options carry a [`RollFormula`]; count options carry a plain
/// integer where [`RollFormula::ABSENT`] marks a code written without one
/// (`kh` alone keeps the single highest die).
///
/// Only one member of each family is honored per roll: `reroll` wins over
/// `recursive_reroll`, `explode` over `explode_once`, and the keep/drop
/// fields resolve in the order keep-highest, keep-lowest, drop-lowest,
/// drop-highest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollOptions {
    /// `r`: replace matching dice once.
    pub reroll: Option<RollFormula>,
    /// `rr`: replace matching dice, then keep scanning the replacements.
    pub recursive_reroll: Option<RollFormula>,
    /// `x`: keep matching dice and roll a bonus die, recursively.
    pub explode: Option<RollFormula>,
    /// `xo`: keep matching dice and roll a bonus die, a single pass.
    pub explode_once: Option<RollFormula>,
    /// `k`/`kh`: keep only the highest n dice.
    pub keep_highest: Option<i64>,
    /// `kl`: keep only the lowest n dice.
    pub keep_lowest: Option<i64>,
    /// `d`/`dl`: drop the lowest n dice.
    pub drop_lowest: Option<i64>,
    /// `dh`: drop the highest n dice.
    pub drop_highest: Option<i64>,
    /// `min`: raise any die below n to n.
    pub replace_with_minimum: Option<i64>,
    /// `max`: lower any die above n to n.
    pub replace_with_maximum: Option<i64>,
}

impl RollOptions {
    /// `true` when no option is set at all.
    pub fn is_empty(&self) -> bool {
        *self == RollOptions::default()
    }

    /// The reroll rule in effect, with `true` marking the recursive flavor.
    pub fn reroll_rule(&self) -> Option<(&RollFormula, bool)> {
        if let Some(formula) = &self.reroll {
            return Some((formula, false));
        }

        self.recursive_reroll.as_ref().map(|formula| (formula, true))
    }

    /// The explode rule in effect, with `true` marking the single-pass
    /// flavor.
    pub fn explode_rule(&self) -> Option<(&RollFormula, bool)> {
        if let Some(formula) = &self.explode {
            return Some((formula, false));
        }

        self.explode_once.as_ref().map(|formula| (formula, true))
    }

    /// Resolves the keep/drop family to a single [`Mode`], honoring the
    /// field priority and the bare-code sentinel (one die).
    pub fn keep_drop(&self) -> Option<Mode> {
        let normalize = |n: i64| if n < 0 { 1 } else { n };

        if let Some(n) = self.keep_highest {
            return Some(Mode::kh(normalize(n)));
        }
        if let Some(n) = self.keep_lowest {
            return Some(Mode::kl(normalize(n)));
        }
        if let Some(n) = self.drop_lowest {
            return Some(Mode::dl(normalize(n)));
        }
        if let Some(n) = self.drop_highest {
            return Some(Mode::dh(normalize(n)));
        }

        None
    }
}

fn fmt_count(f: &mut std::fmt::Formatter<'_>, code: &str, count: Option<i64>) -> std::fmt::Result {
    match count {
        Some(n) if n >= 0 => write!(f, "{}{}", code, n),
        Some(_) => write!(f, "{}", code),
        None => Ok(()),
    }
}

impl Display for RollOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(formula) = &self.reroll {
            write!(f, "r{}", formula)?;
        }
        if let Some(formula) = &self.recursive_reroll {
            write!(f, "rr{}", formula)?;
        }
        if let Some(formula) = &self.explode {
            write!(f, "x{}", formula)?;
        }
        if let Some(formula) = &self.explode_once {
            write!(f, "xo{}", formula)?;
        }

        fmt_count(f, "kh", self.keep_highest)?;
        fmt_count(f, "kl", self.keep_lowest)?;
        fmt_count(f, "dl", self.drop_lowest)?;
        fmt_count(f, "dh", self.drop_highest)?;
        fmt_count(f, "min", self.replace_with_minimum)?;
        fmt_count(f, "max", self.replace_with_maximum)
    }
}


/// A resolved keep/drop selection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Keep `n` dice, dropping the rest.
    Keep {
        /// Keep from the top when `true`, from the bottom when `false`.
        highest: bool,
        /// The number of dice to keep.
        n: i64,
    },
    /// Drop `n` dice, keeping the rest.
    Drop {
        /// Drop from the top when `true`, from the bottom when `false`.
        highest: bool,
        /// The number of dice to drop.
        n: i64,
    },
}

impl Mode {
    /// Keep the `n` highest dice.
    pub fn kh(n: i64) -> Self {
        Mode::Keep { highest: true, n }
    }

    /// Keep the `n` lowest dice.
    pub fn kl(n: i64) -> Self {
        Mode::Keep { highest: false, n }
    }

    /// Drop the `n` highest dice.
    pub fn dh(n: i64) -> Self {
        Mode::Drop { highest: true, n }
    }

    /// Drop the `n` lowest dice.
    pub fn dl(n: i64) -> Self {
        Mode::Drop { highest: false, n }
    }

    /// The count attached to the mode.
    pub fn value(&self) -> i64 {
        match self {
            Mode::Keep { n, .. } | Mode::Drop { n, .. } => *n,
        }
    }
}


/// One physical die throw and its annotations.
///
/// Rolls live in an arena: once created they are never removed, and a die
/// superseded by a reroll stays in place with its `rerolled` field pointing
/// at the replacement's index. The full provenance chain therefore survives
/// into the formatted report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roll {
    /// The face the die landed on.
    pub value: i64,
    /// Index of the die this one replaced, for dice born of a reroll.
    pub origin: Option<usize>,
    /// Index of the replacement die, once this die has been rerolled.
    pub rerolled: Option<usize>,
    /// Display/scoring override applied by min/max clamping.
    pub replaced: Option<i64>,
    /// The die matched an explode rule and spawned a bonus die.
    pub exploded: bool,
    /// The die was excluded by a keep/drop selection.
    pub dropped: bool,
    /// The die is rendered inside another die's reroll chain, not on its
    /// own.
    pub string_ignore: bool,
}

impl Roll {
    /// A fresh, unannotated die showing `value`.
    pub fn new(value: i64) -> Self {
        Self {
            value,
            origin: None,
            rerolled: None,
            replaced: None,
            exploded: false,
            dropped: false,
            string_ignore: false,
        }
    }

    /// The value this die contributes when scored: the clamped override if
    /// one applies, the raw face otherwise.
    pub fn effective(&self) -> i64 {
        self.replaced.unwrap_or(self.value)
    }

    /// `true` once a reroll has replaced this die.
    pub fn superseded(&self) -> bool {
        self.rerolled.is_some()
    }

    /// `true` when the die counts toward the total: neither superseded nor
    /// dropped.
    pub fn scores(&self) -> bool {
        !self.superseded() && !self.dropped
    }
}


/// One fully parsed dice formula, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollData {
    /// How many dice to throw.
    pub die_count: u64,
    /// How many faces each die has.
    pub die_type: u64,
    /// Flat modifiers in encounter order; kept separate so each one shows
    /// in the report rather than being summed early.
    pub die_modifiers: Vec<i64>,
    /// Modifier options, or `None` for a plain `NdM` roll.
    pub roll_options: Option<RollOptions>,
}

impl RollData {
    /// Creates a new [`RollDataBuilder`] for dice with `die_type` faces.
    ///
    /// # Examples
    /// ```
    /// use clatter::RollData;
    ///
    /// let data = RollData::builder(6).count(4).modifier(2).build().unwrap();
    /// assert_eq!(data.to_string(), "4d6+2");
    /// ```
    pub fn builder(die_type: u64) -> RollDataBuilder {
        RollDataBuilder::new(die_type)
    }

    /// How many dice survive the keep/drop selection.
    fn kept_dice(&self) -> u64 {
        match self.roll_options.as_ref().and_then(RollOptions::keep_drop) {
            None => self.die_count,
            Some(Mode::Keep { n, .. }) => (n as u64).min(self.die_count),
            Some(Mode::Drop { n, .. }) => self.die_count.saturating_sub(n as u64),
        }
    }

    fn modifier_sum(&self) -> i64 {
        self.die_modifiers.iter().sum()
    }

    /// The smallest total this formula can produce from its initial pool.
    ///
    /// Bonus dice from rerolls and explosions can only grow the pool, so
    /// the bound describes the pre-bonus dice.
    pub fn minimum(&self) -> i64 {
        let floor = self
            .roll_options
            .as_ref()
            .and_then(|options| options.replace_with_minimum.filter(|n| *n > 0))
            .unwrap_or(1);

        self.kept_dice() as i64 * floor + self.modifier_sum()
    }

    /// The largest total this formula can produce from its initial pool.
    pub fn maximum(&self) -> i64 {
        let ceiling = self
            .roll_options
            .as_ref()
            .and_then(|options| options.replace_with_maximum.filter(|n| *n > 0))
            .map_or(self.die_type as i64, |n| n.min(self.die_type as i64));

        self.kept_dice() as i64 * ceiling + self.modifier_sum()
    }

    /// The midpoint of [`RollData::minimum`] and [`RollData::maximum`].
    pub fn average(&self) -> f64 {
        (self.minimum() as f64 + self.maximum() as f64) / 2.0
    }
}

impl Display for RollData {
    /// Renders the formula back to its compact notation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.die_count, self.die_type)?;

        if let Some(options) = &self.roll_options {
            write!(f, "{}", options)?;
        }

        for modifier in &self.die_modifiers {
            if *modifier >= 0 {
                write!(f, "+{}", modifier)?;
            } else {
                write!(f, "{}", modifier)?;
            }
        }

        Ok(())
    }
}


/// A builder for [`RollData`] with a fluent API, for callers constructing
/// rolls in code rather than parsing notation.
#[derive(Debug, Clone)]
pub struct RollDataBuilder {
    die_type: u64,
    die_count: u64,
    die_modifiers: Vec<i64>,
    roll_options: Option<RollOptions>,
}

impl RollDataBuilder {
    fn new(die_type: u64) -> Self {
        Self {
            die_type,
            die_count: 1,
            die_modifiers: Vec::new(),
            roll_options: None,
        }
    }

    /// Sets the number of dice to roll.
    pub fn count(mut self, count: u64) -> Self {
        self.die_count = count;
        self
    }

    /// Appends a flat modifier term.
    pub fn modifier(mut self, modifier: i64) -> Self {
        self.die_modifiers.push(modifier);
        self
    }

    /// Sets the modifier options.
    pub fn options(mut self, options: RollOptions) -> Self {
        self.roll_options = Some(options);
        self
    }

    /// Finalizes the configuration.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRoll`] for a zero die count and
    /// [`Error::InvalidDieRange`] for a die type outside `[2, 2^48]`.
    pub fn build(self) -> Result<RollData, Error> {
        if self.die_count < 1 {
            return Err(Error::InvalidRoll("Cannot roll zero dice".into()));
        }

        if self.die_type < 2 || self.die_type > MAX_DIE_TYPE {
            return Err(Error::InvalidDieRange(self.die_type));
        }

        Ok(RollData {
            die_count: self.die_count,
            die_type: self.die_type,
            die_modifiers: self.die_modifiers,
            roll_options: self.roll_options,
        })
    }
}


/// Executes a parsed formula against the thread-local CSPRNG.
///
/// Returns the full arena of dice in generation order: originals first,
/// then every bonus die appended by rerolls and explosions. Superseded and
/// dropped dice stay in the list with annotations; use [`total`] to score
/// the result and [`crate::format_rolls`] to render it.
///
/// A formula with no options short-circuits to a single synthetic roll
/// holding the summed dice plus the flattened modifiers, with no
/// annotations. The modifiers are already folded in on that path, so they
/// must not be added again when scoring.
///
/// # Errors
/// Returns [`Error::InvalidDieRange`] for an unrollable die type and
/// [`Error::DieLimit`] when the roll would generate more than [`DIE_LIMIT`]
/// dice.
///
/// # Examples
/// ```
/// use clatter::{execute_roll, parse_formula, total};
///
/// let data = parse_formula("4d6kh3").unwrap();
/// let rolls = execute_roll(&data).unwrap();
///
/// assert_eq!(rolls.len(), 4);
/// assert_eq!(rolls.iter().filter(|roll| roll.dropped).count(), 1);
/// assert!((3..=18).contains(&total(&rolls, &[])));
/// ```
pub fn execute_roll(data: &RollData) -> Result<Vec<Roll>, Error> {
    execute_roll_with(data, &mut rand::rng())
}

/// Executes a parsed formula against a caller-supplied generator.
///
/// Same contract as [`execute_roll`]; intended for seeded generators in
/// tests and simulations.
///
/// # Errors
/// Same as [`execute_roll`].
pub fn execute_roll_with<R: Rng + ?Sized>(data: &RollData, rng: &mut R) -> Result<Vec<Roll>, Error> {
    if data.die_count > DIE_LIMIT as u64 {
        return Err(Error::DieLimit);
    }

    let mut rolls = Vec::with_capacity(data.die_count as usize);
    for _ in 0..data.die_count {
        rolls.push(Roll::new(uniform_int_with(rng, data.die_type)?));
    }

    let Some(options) = &data.roll_options else {
        let value = rolls.iter().map(|roll| roll.value).sum::<i64>()
            + data.die_modifiers.iter().sum::<i64>();
        return Ok(vec![Roll::new(value)]);
    };

    apply_rerolls(&mut rolls, options, data.die_type, rng)?;
    apply_explosions(&mut rolls, options, data.die_type, rng)?;
    apply_clamp(&mut rolls, options);
    apply_keep_drop(&mut rolls, options);

    Ok(rolls)
}

/// Reroll stage. A bare `r` rerolls the minimum face.
fn apply_rerolls<R: Rng + ?Sized>(
    rolls: &mut Vec<Roll>,
    options: &RollOptions,
    die_type: u64,
    rng: &mut R,
) -> Result<(), Error> {
    let Some((formula, recursive)) = options.reroll_rule() else {
        return Ok(());
    };

    let default = 1;
    let mut pass_start = 0;
    let mut passes = 0i64;

    loop {
        let pass_end = rolls.len();
        if pass_start >= pass_end {
            break;
        }

        for index in pass_start..pass_end {
            if rolls[index].superseded() {
                continue;
            }
            if !formula.matches(rolls[index].value, default) {
                continue;
            }
            if rolls.len() >= DIE_LIMIT {
                return Err(Error::DieLimit);
            }

            let mut replacement = Roll::new(uniform_int_with(rng, die_type)?);
            replacement.origin = Some(index);
            replacement.string_ignore = true;

            rolls[index].rerolled = Some(rolls.len());
            rolls.push(replacement);
        }

        passes += 1;
        if !recursive {
            break;
        }
        if formula.limiter.is_some_and(|limit| passes >= limit) {
            break;
        }

        pass_start = pass_end;
    }

    Ok(())
}

/// Explode stage. A bare `x`/`xo` explodes the maximum face. Only `x` with
/// no operator and a trigger face above 1 keeps re-triggering on the bonus
/// dice it adds.
fn apply_explosions<R: Rng + ?Sized>(
    rolls: &mut Vec<Roll>,
    options: &RollOptions,
    die_type: u64,
    rng: &mut R,
) -> Result<(), Error> {
    let Some((formula, once)) = options.explode_rule() else {
        return Ok(());
    };

    let default = die_type as i64;
    let recursive = !once && formula.operator.is_none() && formula.resolve(default) > 1;
    let mut pass_start = 0;
    let mut passes = 0i64;

    loop {
        let pass_end = rolls.len();
        if pass_start >= pass_end {
            break;
        }

        for index in pass_start..pass_end {
            if rolls[index].superseded() {
                continue;
            }
            if !formula.matches(rolls[index].value, default) {
                continue;
            }
            if rolls.len() >= DIE_LIMIT {
                return Err(Error::DieLimit);
            }

            let bonus = Roll::new(uniform_int_with(rng, die_type)?);
            rolls[index].exploded = true;
            rolls.push(bonus);
        }

        passes += 1;
        if !recursive {
            break;
        }
        if formula.limiter.is_some_and(|limit| passes >= limit) {
            break;
        }

        pass_start = pass_end;
    }

    Ok(())
}

/// Clamp stage. Annotates an override; never removes or regenerates dice.
/// A bare `min`/`max` (absent count sentinel) does nothing.
fn apply_clamp(rolls: &mut [Roll], options: &RollOptions) {
    let floor = options.replace_with_minimum.filter(|n| *n > 0);
    let ceiling = options.replace_with_maximum.filter(|n| *n > 0);

    if floor.is_none() && ceiling.is_none() {
        return;
    }

    for roll in rolls.iter_mut() {
        if let Some(ceiling) = ceiling {
            if roll.value > ceiling {
                roll.replaced = Some(ceiling);
                continue;
            }
        }

        if let Some(floor) = floor {
            if roll.value < floor {
                roll.replaced = Some(floor);
            }
        }
    }
}

/// Keep/drop stage. Ranks the live dice (superseded ones are already out
/// of the running) by effective value with a stable sort, so ties keep
/// their generation order.
fn apply_keep_drop(rolls: &mut [Roll], options: &RollOptions) {
    let Some(mode) = options.keep_drop() else {
        return;
    };

    let mut live: Vec<usize> = (0..rolls.len())
        .filter(|index| !rolls[*index].superseded())
        .collect();
    live.sort_by_key(|index| rolls[*index].effective());

    let total = live.len();
    let n = mode.value().max(0) as usize;

    let dropped: &[usize] = match mode {
        Mode::Keep { highest: true, .. } => &live[..total.saturating_sub(n)],
        Mode::Keep { highest: false, .. } => &live[n.min(total)..],
        Mode::Drop { highest: false, .. } => &live[..n.min(total)],
        Mode::Drop { highest: true, .. } => &live[total.saturating_sub(n)..],
    };

    for &index in dropped {
        rolls[index].dropped = true;
    }
}

/// Scores a finished arena: the sum of every effective value that is
/// neither superseded nor dropped, plus the flat modifiers.
///
/// # Examples
/// ```
/// use clatter::{total, Roll};
///
/// let mut dropped = Roll::new(1);
/// dropped.dropped = true;
///
/// let rolls = vec![Roll::new(5), dropped, Roll::new(3)];
/// assert_eq!(total(&rolls, &[2]), 10);
/// ```
pub fn total(rolls: &[Roll], modifiers: &[i64]) -> i64 {
    let dice: i64 = rolls
        .iter()
        .filter(|roll| roll.scores())
        .map(Roll::effective)
        .sum();

    dice + modifiers.iter().sum::<i64>()
}


/// Everything a caller needs from one roll: the parsed formula, the die
/// arena, the computed total and the rendered report.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollOutcome {
    /// The parsed formula.
    pub data: RollData,
    /// The full die arena in generation order.
    pub rolls: Vec<Roll>,
    /// The scored total.
    pub total: i64,
    /// The annotated report text.
    pub report: String,
}

/// Parses, executes, scores and formats a formula in one call.
///
/// # Errors
/// Returns [`Error::Parser`] for a malformed formula and the
/// [`execute_roll`] errors for range and resource violations.
///
/// # Examples
/// ```
/// use clatter::roll;
///
/// let outcome = roll("2d6+3").unwrap();
/// assert!((5..=15).contains(&outcome.total));
///
/// let outcome = roll("4d6kh3").unwrap();
/// assert_eq!(outcome.rolls.len(), 4);
/// assert!(outcome.report.starts_with("4d6kh3\n("));
/// ```
pub fn roll(input: &str) -> Result<RollOutcome, Error> {
    let data = crate::parser::parse_formula(input)?;
    let rolls = execute_roll(&data)?;

    // The fast path folds the flat modifiers into its single synthetic
    // roll; counting or rendering them again would double them.
    let modifiers: &[i64] = if data.roll_options.is_some() {
        &data.die_modifiers
    } else {
        &[]
    };

    let total = total(&rolls, modifiers);
    let report = crate::format::format_rolls(&rolls, input, modifiers);

    Ok(RollOutcome { data, rolls, total, report })
}
