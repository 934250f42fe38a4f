use crate::roll::Roll;


/// Renders a finished roll as an annotated report.
///
/// The report is the echoed formula on one line and the parenthesized
/// per-die breakdown on the next, with the flat modifiers appended as
/// signed terms in encounter order. The numeric total is deliberately left
/// to the caller (see [`crate::total`]), which may want to style it.
///
/// Annotations use markdown: superseded values are struck through, kept
/// replacements and clamped values are bold, and an exploded die carries a
/// trailing `!`. A die consumed by another die's reroll chain is skipped so
/// it is never rendered twice.
///
/// Pure and infallible: malformed chains (out-of-range or cyclic indices)
/// degrade to rendering the die as a chain leaf rather than failing.
///
/// # Examples
/// ```
/// use clatter::{format_rolls, Roll};
///
/// let mut low = Roll::new(1);
/// low.dropped = true;
///
/// let rolls = vec![Roll::new(5), low, Roll::new(3)];
/// let report = format_rolls(&rolls, "3d6kh2+1", &[1]);
/// assert_eq!(report, "3d6kh2+1\n(5, ~~1~~, 3) + 1");
/// ```
pub fn format_rolls(rolls: &[Roll], formula: &str, modifiers: &[i64]) -> String {
    let mut dice = Vec::with_capacity(rolls.len());

    for (index, roll) in rolls.iter().enumerate() {
        if roll.string_ignore {
            continue;
        }

        dice.push(render_die(rolls, index));
    }

    let mut report = format!("{}\n({})", formula, dice.join(", "));

    for modifier in modifiers {
        if *modifier >= 0 {
            report.push_str(&format!(" + {}", modifier));
        } else {
            report.push_str(&format!(" - {}", modifier.unsigned_abs()));
        }
    }

    report
}

/// Renders one die through exactly one branch: reroll chain, exploded,
/// replaced, dropped, plain.
fn render_die(rolls: &[Roll], index: usize) -> String {
    let roll = &rolls[index];

    if roll.superseded() {
        return render_chain(rolls, index);
    }

    if roll.exploded {
        return format!("**{}!**", roll.effective());
    }

    if let Some(replaced) = roll.replaced {
        return format!("**{}**", replaced);
    }

    if roll.dropped {
        return format!("~~{}~~", roll.value);
    }

    roll.value.to_string()
}

/// Walks a reroll chain from its head, striking every superseded value and
/// bolding the surviving leaf. Hop and range guards keep a corrupt chain
/// from looping or indexing out of bounds.
fn render_chain(rolls: &[Roll], head: usize) -> String {
    let mut parts = Vec::new();
    let mut index = head;
    let mut hops = 0;

    loop {
        let roll = &rolls[index];

        match roll.rerolled {
            Some(next) if next < rolls.len() && next != index && hops < rolls.len() => {
                parts.push(format!("~~{}~~", roll.value));
                index = next;
                hops += 1;
            }
            _ => {
                if roll.exploded {
                    parts.push(format!("**{}!**", roll.effective()));
                } else {
                    parts.push(format!("**{}**", roll.effective()));
                }
                break;
            }
        }
    }

    parts.join(" ")
}


#[cfg(test)]
mod test {
    use super::*;


    fn arena(values: &[i64]) -> Vec<Roll> {
        values.iter().map(|value| Roll::new(*value)).collect()
    }

    #[test]
    fn test_plain_rolls() {
        let rolls = arena(&[4, 2, 6]);
        assert_eq!(format_rolls(&rolls, "3d6", &[]), "3d6\n(4, 2, 6)");
    }

    #[test]
    fn test_modifiers_render_as_signed_terms() {
        let rolls = arena(&[12, 7]);

        assert_eq!(format_rolls(&rolls, "2d20+5", &[5]), "2d20+5\n(12, 7) + 5");
        assert_eq!(
            format_rolls(&rolls, "2d20+5-3", &[5, -3]),
            "2d20+5-3\n(12, 7) + 5 - 3"
        );
    }

    #[test]
    fn test_reroll_chain_strikes_and_bolds() {
        let mut rolls = arena(&[1, 5, 6]);
        rolls[0].rerolled = Some(2);
        rolls[2].origin = Some(0);
        rolls[2].string_ignore = true;

        assert_eq!(
            format_rolls(&rolls, "2d6r1", &[]),
            "2d6r1\n(~~1~~ **6**, 5)"
        );
    }

    #[test]
    fn test_two_hop_chain() {
        let mut rolls = arena(&[1, 1, 4]);
        rolls[0].rerolled = Some(1);
        rolls[1].origin = Some(0);
        rolls[1].string_ignore = true;
        rolls[1].rerolled = Some(2);
        rolls[2].origin = Some(1);
        rolls[2].string_ignore = true;

        assert_eq!(
            format_rolls(&rolls, "1d6rr1", &[]),
            "1d6rr1\n(~~1~~ ~~1~~ **4**)"
        );
    }

    #[test]
    fn test_exploded_die() {
        let mut rolls = arena(&[6, 3, 2]);
        rolls[0].exploded = true;

        assert_eq!(format_rolls(&rolls, "2d6x", &[]), "2d6x\n(**6!**, 3, 2)");
    }

    #[test]
    fn test_exploded_chain_leaf() {
        let mut rolls = arena(&[1, 6, 4]);
        rolls[0].rerolled = Some(1);
        rolls[1].origin = Some(0);
        rolls[1].string_ignore = true;
        rolls[1].exploded = true;

        assert_eq!(
            format_rolls(&rolls, "1d6r1x", &[]),
            "1d6r1x\n(~~1~~ **6!**, 4)"
        );
    }

    #[test]
    fn test_replaced_and_dropped() {
        let mut rolls = arena(&[1, 6, 3]);
        rolls[0].replaced = Some(2);
        rolls[1].dropped = true;

        assert_eq!(
            format_rolls(&rolls, "3d6min2dh1", &[]),
            "3d6min2dh1\n(**2**, ~~6~~, 3)"
        );
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let mut rolls = arena(&[1, 5, 6]);
        rolls[0].rerolled = Some(2);
        rolls[2].string_ignore = true;
        rolls[1].dropped = true;

        let first = format_rolls(&rolls, "2d6r1kh1", &[2]);
        let second = format_rolls(&rolls, "2d6r1kh1", &[2]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_range_chain_degrades_to_a_leaf() {
        let mut rolls = arena(&[3]);
        rolls[0].rerolled = Some(9);

        assert_eq!(format_rolls(&rolls, "1d6r", &[]), "1d6r\n(**3**)");
    }

    #[test]
    fn test_cyclic_chain_terminates() {
        let mut rolls = arena(&[1, 2]);
        rolls[0].rerolled = Some(1);
        rolls[1].rerolled = Some(0);
        rolls[1].string_ignore = true;

        let report = format_rolls(&rolls, "2d6r", &[]);
        assert!(report.starts_with("2d6r\n("));
    }

    #[test]
    fn test_empty_arena() {
        assert_eq!(format_rolls(&[], "0d6", &[]), "0d6\n()");
    }
}
