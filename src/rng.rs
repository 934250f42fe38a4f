use rand::Rng;
use crate::Error;


/// Largest die type a formula may roll, `2^48`.
///
/// Anything above this is treated as a malformed request rather than an
/// exotic die: it guards resource exhaustion from inputs such as
/// `1d999999999999999999`.
pub const MAX_DIE_TYPE: u64 = 1 << 48;

/// Draws a uniform integer from `[1, max]` inclusive using the thread-local
/// generator.
///
/// The thread-local generator is a CSPRNG, so draws are unpredictable across
/// players and free of modulo bias. Safe for concurrent use: every thread
/// owns its own generator state.
///
/// # Errors
/// Returns [`Error::InvalidDieRange`] if `max <= 1` (a die with fewer than
/// two faces has no random outcome) or `max` exceeds [`MAX_DIE_TYPE`].
///
/// # Examples
/// ```
/// use clatter::uniform_int;
///
/// let face = uniform_int(20).unwrap();
/// assert!((1..=20).contains(&face));
///
/// assert!(uniform_int(1).is_err());
/// ```
pub fn uniform_int(max: u64) -> Result<i64, Error> {
    uniform_int_with(&mut rand::rng(), max)
}

/// Draws a uniform integer from `[1, max]` inclusive using a caller-supplied
/// generator.
///
/// Intended for seeded generators in tests and simulations; production rolls
/// go through [`uniform_int`].
///
/// # Errors
/// Same range rules as [`uniform_int`].
///
/// # Examples
/// ```
/// use clatter::uniform_int_with;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut a = StdRng::seed_from_u64(7);
/// let mut b = StdRng::seed_from_u64(7);
/// assert_eq!(uniform_int_with(&mut a, 6).unwrap(), uniform_int_with(&mut b, 6).unwrap());
/// ```
pub fn uniform_int_with<R: Rng + ?Sized>(rng: &mut R, max: u64) -> Result<i64, Error> {
    if max <= 1 || max > MAX_DIE_TYPE {
        return Err(Error::InvalidDieRange(max));
    }

    Ok(rng.random_range(1..=max) as i64)
}


#[cfg(test)]
mod test {
    use rand::{SeedableRng, rngs::StdRng};
    use super::*;


    #[test]
    fn test_draws_stay_in_range() {
        for max in [2u64, 6, 20, 100] {
            for _ in 0..10_000 {
                let value = uniform_int(max).unwrap();
                assert!(value >= 1 && value <= max as i64, "draw {value} outside [1, {max}]");
            }
        }
    }

    #[test]
    fn test_every_face_reachable() {
        let mut seen = [false; 6];
        for _ in 0..10_000 {
            let value = uniform_int(6).unwrap();
            seen[(value - 1) as usize] = true;
        }
        assert!(seen.iter().all(|hit| *hit), "10k d6 draws missed a face: {seen:?}");
    }

    #[test]
    fn test_degenerate_die_is_rejected() {
        assert!(matches!(uniform_int(0), Err(Error::InvalidDieRange(0))));
        assert!(matches!(uniform_int(1), Err(Error::InvalidDieRange(1))));
    }

    #[test]
    fn test_oversized_die_is_rejected() {
        assert!(uniform_int(MAX_DIE_TYPE).is_ok());
        assert!(matches!(
            uniform_int(MAX_DIE_TYPE + 1),
            Err(Error::InvalidDieRange(_))
        ));
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(
                uniform_int_with(&mut first, 20).unwrap(),
                uniform_int_with(&mut second, 20).unwrap()
            );
        }
    }
}
