//! Feedback enumeration
//!
//! Turns one (guess, score) pair into the list of possibilities whose
//! assignments score exactly that against the guess.

use super::combinatorics::{Derangements, KSubsets};
use super::possibility::{ColorSet, Possibility};
use crate::core::{Code, GameColor, Score};
use rustc_hash::FxHashSet;
use tracing::trace;

/// All possibilities consistent with `guess` having scored `score`
///
/// Only colors in `pool` are used. A blank score returns an empty list:
/// the merger handles it by pruning the pool instead.
///
/// Every assignment of every returned possibility scores exactly `score`
/// against `guess`, and every code from `pool` that scores `score` is an
/// assignment of at least one of them.
#[must_use]
pub fn enumerate(guess: &Code, score: Score, pool: ColorSet) -> Vec<Possibility> {
    let positions: Vec<usize> = (0..guess.len()).collect();

    let possibilities: Vec<Possibility> = match (score.exact, score.misplaced) {
        (0, 0) => Vec::new(),
        (0, misplaced) => white_peg_possibilities(guess, &[], misplaced, pool),
        (exact, 0) => KSubsets::new(&positions, exact)
            .filter_map(|reds| build_possibility(guess, &reds, &[], pool))
            .collect(),
        (exact, misplaced) => KSubsets::new(&positions, exact)
            .flat_map(|reds| white_peg_possibilities(guess, &reds, misplaced, pool))
            .collect(),
    };

    let mut seen = FxHashSet::default();
    let unique: Vec<Possibility> = possibilities
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect();

    trace!(%guess, exact = score.exact, misplaced = score.misplaced, count = unique.len(), "enumerated feedback");
    unique
}

/// Possibilities with `misplaced` displaced colors among the positions not in `occupied`
///
/// Positions in `occupied` are fixed to the guess color. For every choice
/// of source positions and every derangement of them onto the free
/// positions, the target takes the source's guess color. Mappings between
/// two positions with the same guess color are skipped, since that target
/// would have scored exact.
fn white_peg_possibilities(
    guess: &Code,
    occupied: &[usize],
    misplaced: usize,
    pool: ColorSet,
) -> Vec<Possibility> {
    let free: Vec<usize> = (0..guess.len()).filter(|p| !occupied.contains(p)).collect();

    KSubsets::new(&free, misplaced)
        .flat_map(|sources| {
            Derangements::new(&sources, &free)
                .filter(|mapping| {
                    mapping
                        .iter()
                        .all(|&(from, to)| guess.color_at(from) != guess.color_at(to))
                })
                .collect::<Vec<_>>()
        })
        .filter_map(|mapping| build_possibility(guess, occupied, &mapping, pool))
        .collect()
}

/// Possibility with `exact` positions fixed and `mapping` targets displaced
///
/// Every other position may hold any pool color except its own guess color
/// and except guess colors that could still add a misplaced peg. A guess
/// color whose non-exact occurrences are all accounted for by `mapping` is
/// confirmed present and stays allowed.
fn build_possibility(
    guess: &Code,
    exact: &[usize],
    mapping: &[(usize, usize)],
    pool: ColorSet,
) -> Option<Possibility> {
    let pegs = guess.len();
    let mut fixed: Vec<Option<GameColor>> = vec![None; pegs];
    for &position in exact {
        fixed[position] = Some(guess.color_at(position));
    }
    for &(from, to) in mapping {
        fixed[to] = Some(guess.color_at(from));
    }

    // Occurrences of each guess color outside the exact positions, minus those placed
    let mut open = [0usize; GameColor::COUNT];
    for position in (0..pegs).filter(|p| !exact.contains(p)) {
        open[guess.color_at(position).index()] += 1;
    }
    for &(from, _) in mapping {
        open[guess.color_at(from).index()] -= 1;
    }

    let guessed: ColorSet = (0..pegs)
        .filter(|p| !exact.contains(p))
        .map(|p| guess.color_at(p))
        .collect();
    let confirmed: ColorSet = guessed.iter().filter(|c| open[c.index()] == 0).collect();
    let others = (pool - guessed) | (confirmed & pool);

    let slots = fixed
        .into_iter()
        .enumerate()
        .map(|(position, color)| match color {
            Some(color) => ColorSet::single(color) & pool,
            None => others - ColorSet::single(guess.color_at(position)),
        })
        .collect();

    let possibility = Possibility::new(slots);
    possibility.is_viable().then_some(possibility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use GameColor::{Blue, Green, Orange, Pink, Red, Yellow};
    use rustc_hash::FxHashMap;

    fn full_pool() -> ColorSet {
        GameColor::ALL.into_iter().collect()
    }

    fn all_codes() -> Vec<Code> {
        Code::all(4, &GameColor::ALL).collect()
    }

    fn sample_guesses() -> Vec<Code> {
        vec![
            Code::from([Blue, Blue, Green, Green]),
            Code::from([Blue, Green, Orange, Pink]),
            Code::from([Red, Red, Red, Yellow]),
            Code::from([Pink, Pink, Pink, Pink]),
            Code::from([Yellow, Orange, Yellow, Orange]),
        ]
    }

    #[test]
    fn blank_score_yields_nothing() {
        let guess = Code::from([Blue, Blue, Green, Green]);
        assert!(enumerate(&guess, Score::new(0, 0), full_pool()).is_empty());
    }

    #[test]
    fn perfect_score_yields_guess() {
        let guess = Code::from([Blue, Blue, Green, Green]);
        let result = enumerate(&guess, Score::perfect(4), full_pool());
        assert_eq!(result, vec![Possibility::from_code(&guess)]);
    }

    #[test]
    fn single_white_peg_on_opening_guess() {
        let guess = Code::from([Blue, Blue, Green, Green]);
        let result = enumerate(&guess, Score::new(0, 1), full_pool());

        let others: ColorSet = [Orange, Pink, Red, Yellow].into_iter().collect();
        let blue = ColorSet::single(Blue);
        let green = ColorSet::single(Green);
        assert_eq!(
            result,
            vec![
                Possibility::new(vec![others, others, blue, others]),
                Possibility::new(vec![others, others, others, blue]),
                Possibility::new(vec![green, others, others, others]),
                Possibility::new(vec![others, green, others, others]),
            ]
        );
    }

    #[test]
    fn red_only_excludes_remaining_guess_colors() {
        let guess = Code::from([Blue, Green, Orange, Pink]);
        let result = enumerate(&guess, Score::new(2, 0), full_pool());

        assert_eq!(result.len(), 6);
        let first = &result[0];
        let rest: ColorSet = [Blue, Green, Red, Yellow].into_iter().collect();
        assert_eq!(
            first.slots(),
            &[ColorSet::single(Blue), ColorSet::single(Green), rest, rest]
        );
    }

    #[test]
    fn pool_limits_candidates() {
        let guess = Code::from([Orange, Orange, Pink, Pink]);
        let pool: ColorSet = [Orange, Pink, Red, Yellow].into_iter().collect();

        for possibility in enumerate(&guess, Score::new(1, 0), pool) {
            for slot in possibility.slots() {
                assert!(slot.is_subset(pool));
                assert!(!slot.is_empty());
            }
        }
    }

    #[test]
    fn enumeration_is_sound() {
        let codes = all_codes();
        for guess in sample_guesses() {
            let mut cache: FxHashMap<Score, Vec<Possibility>> = FxHashMap::default();
            for secret in &codes {
                let score = Score::calculate(secret, &guess);
                if score.is_blank() {
                    continue;
                }
                let possibilities = cache
                    .entry(score)
                    .or_insert_with(|| enumerate(&guess, score, full_pool()));
                assert!(
                    possibilities.iter().any(|p| p.contains(secret)),
                    "{secret} missing for guess {guess} scored {score}"
                );
            }
        }
    }

    #[test]
    fn enumeration_is_complete() {
        let codes = all_codes();
        for guess in sample_guesses() {
            let scores: FxHashSet<Score> = codes
                .iter()
                .map(|secret| Score::calculate(secret, &guess))
                .collect();
            for score in scores {
                for possibility in enumerate(&guess, score, full_pool()) {
                    for assignment in possibility.dissolve() {
                        assert_eq!(Score::calculate(&assignment, &guess), score);
                    }
                }
            }
        }
    }

    #[test]
    fn blank_score_secrets_avoid_guess_colors() {
        // What the merger relies on when it prunes the pool
        let guess = Code::from([Red, Red, Yellow, Yellow]);
        for secret in all_codes() {
            if Score::calculate(&secret, &guess).is_blank() {
                assert!(!secret.colors().contains(&Red));
                assert!(!secret.colors().contains(&Yellow));
            }
        }
    }

    #[test]
    fn no_duplicates_returned() {
        let guess = Code::from([Yellow, Orange, Yellow, Orange]);
        let result = enumerate(&guess, Score::new(0, 4), full_pool());
        let unique: FxHashSet<&Possibility> = result.iter().collect();
        assert_eq!(unique.len(), result.len());
        assert_eq!(result, vec![Possibility::from_code(&Code::from([Orange, Yellow, Orange, Yellow]))]);
    }
}
