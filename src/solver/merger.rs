//! Intersection of fresh feedback with the running possibility set

use super::possibility::{ColorSet, Possibility, PossibilitySet};
use crate::core::Code;
use tracing::debug;

/// Merge freshly enumerated possibilities into `current`
///
/// Returns the new possibility set and the new color pool:
/// - empty `fresh` (blank score): every color of `guess` leaves the pool and
///   `current` is restricted to what remains
/// - empty `current`: `fresh` in normal form
/// - otherwise: every non-empty pairwise intersection of a current and a
///   fresh possibility, in normal form
#[must_use]
pub fn merge(
    current: &PossibilitySet,
    fresh: Vec<Possibility>,
    guess: &Code,
    pool: ColorSet,
) -> (PossibilitySet, ColorSet) {
    if fresh.is_empty() {
        let guessed: ColorSet = guess.colors().iter().copied().collect();
        let pool = pool - guessed;
        debug!(removed = %guessed, remaining = %pool, "pruned color pool");
        return (current.restrict(pool), pool);
    }

    if current.is_empty() {
        return (PossibilitySet::normalized(fresh), pool);
    }

    let merged = PossibilitySet::normalized(
        current
            .iter()
            .flat_map(|existing| fresh.iter().filter_map(|new| existing.intersect(new))),
    );
    (merged, pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameColor, Score};
    use crate::solver::enumerator::enumerate;
    use GameColor::{Blue, Green, Orange, Pink, Red, Yellow};

    fn full_pool() -> ColorSet {
        GameColor::ALL.into_iter().collect()
    }

    /// Brute-force set of codes consistent with every (guess, score)
    fn consistent(history: &[(Code, Score)]) -> Vec<Code> {
        Code::all(4, &GameColor::ALL)
            .filter(|code| history.iter().all(|(g, s)| Score::calculate(code, g) == *s))
            .collect()
    }

    fn run(secret: &Code, guesses: &[Code]) -> (PossibilitySet, ColorSet, Vec<(Code, Score)>) {
        let mut current = PossibilitySet::new();
        let mut pool = full_pool();
        let mut history = Vec::new();
        for guess in guesses {
            let score = Score::calculate(secret, guess);
            let fresh = enumerate(guess, score, pool);
            (current, pool) = merge(&current, fresh, guess, pool);
            history.push((guess.clone(), score));
        }
        (current, pool, history)
    }

    #[test]
    fn first_merge_adopts_fresh() {
        let guess = Code::from([Blue, Blue, Green, Green]);
        let fresh = enumerate(&guess, Score::new(0, 1), full_pool());
        let (merged, pool) = merge(&PossibilitySet::new(), fresh.clone(), &guess, full_pool());

        assert_eq!(merged, PossibilitySet::normalized(fresh));
        assert_eq!(pool, full_pool());
    }

    #[test]
    fn blank_score_prunes_pool() {
        let guess = Code::from([Blue, Blue, Green, Green]);
        let (merged, pool) = merge(&PossibilitySet::new(), Vec::new(), &guess, full_pool());

        assert!(merged.is_empty());
        assert_eq!(pool, [Orange, Pink, Red, Yellow].into_iter().collect());
    }

    #[test]
    fn blank_score_filters_current() {
        let guess = Code::from([Red, Red, Red, Red]);
        let current = PossibilitySet::normalized(vec![
            Possibility::from_code(&Code::from([Red, Blue, Blue, Blue])),
            Possibility::new(vec![
                [Red, Yellow].into_iter().collect(),
                ColorSet::single(Pink),
                ColorSet::single(Pink),
                ColorSet::single(Pink),
            ]),
        ]);

        let (merged, pool) = merge(&current, Vec::new(), &guess, full_pool());

        assert!(!pool.contains(Red));
        assert_eq!(
            merged.assignments(),
            vec![Code::from([Yellow, Pink, Pink, Pink])]
        );
    }

    #[test]
    fn merge_matches_brute_force() {
        let secret = Code::from([Red, Green, Blue, Yellow]);
        let guesses = [
            Code::from([Blue, Blue, Green, Green]),
            Code::from([Green, Green, Orange, Orange]),
            Code::from([Red, Pink, Blue, Green]),
        ];

        let (current, _, history) = run(&secret, &guesses);

        let mut expected = consistent(&history);
        let mut actual = current.assignments();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
        assert!(current.contains(&secret));
    }

    #[test]
    fn blank_rounds_then_feedback() {
        let secret = Code::from([Yellow, Yellow, Yellow, Yellow]);
        let guesses = [
            Code::from([Blue, Blue, Green, Green]),
            Code::from([Orange, Orange, Pink, Pink]),
            Code::from([Red, Red, Yellow, Yellow]),
        ];

        let (current, pool, _) = run(&secret, &guesses);

        // Two exact reds on red-red-yellow-yellow also fit all-red
        assert_eq!(pool, [Red, Yellow].into_iter().collect());
        assert_eq!(
            current.assignments(),
            vec![Code::from([Red, Red, Red, Red]), secret]
        );
    }

    #[test]
    fn merge_is_idempotent() {
        let guess = Code::from([Blue, Green, Orange, Pink]);
        for score in [Score::new(2, 0), Score::new(1, 2), Score::new(0, 3)] {
            let fresh = enumerate(&guess, score, full_pool());
            let (once, pool) = merge(&PossibilitySet::new(), fresh.clone(), &guess, full_pool());
            let (twice, pool_again) = merge(&once, fresh, &guess, pool);

            assert_eq!(twice, once);
            assert_eq!(pool_again, pool);
        }
    }

    #[test]
    fn contradictory_feedback_empties_set() {
        let guess = Code::from([Blue, Blue, Green, Green]);
        let fresh = enumerate(&guess, Score::new(4, 0), full_pool());
        let (current, pool) = merge(&PossibilitySet::new(), fresh, &guess, full_pool());

        let other = enumerate(&guess, Score::new(0, 2), pool);
        let (merged, _) = merge(&current, other, &guess, pool);
        assert!(merged.is_empty());
    }
}
