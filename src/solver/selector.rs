//! Guess selection
//!
//! Before any informative feedback the solver plays a fixed opening that
//! tests two colors per round. Afterwards each position takes the color
//! held most often at that position among the remaining assignments that
//! agree with the positions already chosen.

use super::possibility::PossibilitySet;
use crate::core::{Code, GameColor, Score};
use crate::error::{MastermindError, Result};
use rustc_hash::FxHashSet;
use std::borrow::Cow;
use tracing::warn;

/// Opening guess for round `round` (0-based)
///
/// The first half of the pegs takes `alphabet[2 * round]`, the second half
/// `alphabet[2 * round + 1]`.
///
/// # Errors
/// Returns `InternalInconsistency` when the alphabet has no pair left for
/// this round.
pub fn opening_guess(round: usize, pegs: usize, alphabet: &[GameColor]) -> Result<Code> {
    let (Some(&first), Some(&second)) = (alphabet.get(2 * round), alphabet.get(2 * round + 1))
    else {
        return Err(MastermindError::InternalInconsistency(format!(
            "no opening guess left for round {}",
            round + 1
        )));
    };

    Ok((0..pegs)
        .map(|position| if position < pegs / 2 { first } else { second })
        .collect())
}

/// Pick the next guess from the history and the current possibilities
///
/// An empty possibility set means no feedback has narrowed the search yet,
/// so the opening sequence is used. A guess that was already played is
/// removed from the candidates and selection runs again.
///
/// # Errors
/// Returns `InternalInconsistency` when every remaining assignment has
/// already been played, or the opening sequence is exhausted.
pub fn next_guess(
    history: &[(Code, Score)],
    current: &PossibilitySet,
    pegs: usize,
    alphabet: &[GameColor],
) -> Result<Code> {
    if current.is_empty() {
        return opening_guess(history.len(), pegs, alphabet);
    }

    let tried: FxHashSet<&Code> = history.iter().map(|(guess, _)| guess).collect();
    let mut working = Cow::Borrowed(current);

    loop {
        let guess = plurality_guess(&working.assignments()).ok_or_else(|| {
            MastermindError::InternalInconsistency(
                "every remaining candidate has already been guessed".to_string(),
            )
        })?;

        if !tried.contains(&guess) {
            return Ok(guess);
        }

        warn!(%guess, "guess already played, removing it from the candidates");
        working = Cow::Owned(working.without(&guess));
    }
}

/// Per-position plurality vote over `assignments`
///
/// Position `i` only counts assignments that match the colors already
/// picked for positions `0..i`. Ties go to the color seen first. Returns
/// `None` for an empty slice.
#[must_use]
pub fn plurality_guess(assignments: &[Code]) -> Option<Code> {
    let pegs = assignments.first()?.len();
    let mut guess: Vec<GameColor> = Vec::with_capacity(pegs);

    for position in 0..pegs {
        let mut tally: Vec<(GameColor, usize)> = Vec::new();
        for assignment in assignments
            .iter()
            .filter(|a| a.colors()[..position] == guess[..])
        {
            let color = assignment.color_at(position);
            match tally.iter_mut().find(|(c, _)| *c == color) {
                Some((_, count)) => *count += 1,
                None => tally.push((color, 1)),
            }
        }

        let mut best = *tally.first()?;
        for &(color, count) in &tally[1..] {
            if count > best.1 {
                best = (color, count);
            }
        }
        guess.push(best.0);
    }

    Some(Code::from(guess))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::possibility::Possibility;
    use GameColor::{Blue, Green, Orange, Pink, Red, Yellow};

    fn singletons(codes: &[Code]) -> PossibilitySet {
        PossibilitySet::normalized(codes.iter().map(Possibility::from_code))
    }

    #[test]
    fn opening_sequence() {
        let alphabet = GameColor::ALL;
        assert_eq!(
            opening_guess(0, 4, &alphabet).unwrap(),
            Code::from([Blue, Blue, Green, Green])
        );
        assert_eq!(
            opening_guess(1, 4, &alphabet).unwrap(),
            Code::from([Orange, Orange, Pink, Pink])
        );
        assert_eq!(
            opening_guess(2, 4, &alphabet).unwrap(),
            Code::from([Red, Red, Yellow, Yellow])
        );
        assert!(matches!(
            opening_guess(3, 4, &alphabet),
            Err(MastermindError::InternalInconsistency(_))
        ));
    }

    #[test]
    fn empty_set_uses_opening_for_round() {
        let history = vec![(Code::from([Blue, Blue, Green, Green]), Score::new(0, 0))];
        let guess = next_guess(&history, &PossibilitySet::new(), 4, &GameColor::ALL).unwrap();
        assert_eq!(guess, Code::from([Orange, Orange, Pink, Pink]));
    }

    #[test]
    fn plurality_follows_majority_with_prefix() {
        let assignments = vec![
            Code::from([Red, Green, Blue, Yellow]),
            Code::from([Red, Green, Orange, Yellow]),
            Code::from([Blue, Green, Orange, Pink]),
            Code::from([Blue, Pink, Orange, Pink]),
            Code::from([Blue, Pink, Pink, Pink]),
        ];

        // Blue wins position 0; among blue-led codes pink wins position 1
        assert_eq!(
            plurality_guess(&assignments),
            Some(Code::from([Blue, Pink, Orange, Pink]))
        );
    }

    #[test]
    fn plurality_ties_go_to_first_seen() {
        let assignments = vec![
            Code::from([Red, Green, Blue, Yellow]),
            Code::from([Blue, Green, Orange, Yellow]),
        ];
        assert_eq!(
            plurality_guess(&assignments),
            Some(Code::from([Red, Green, Blue, Yellow]))
        );
        assert_eq!(plurality_guess(&[]), None);
    }

    #[test]
    fn guess_is_always_a_candidate() {
        let current = PossibilitySet::normalized(vec![Possibility::new(vec![
            [Red, Blue].into_iter().collect(),
            [Green, Pink].into_iter().collect(),
            [Orange].into_iter().collect(),
            [Yellow, Red].into_iter().collect(),
        ])]);
        let guess = next_guess(&[], &current, 4, &GameColor::ALL).unwrap();
        assert!(current.contains(&guess));
    }

    #[test]
    fn repeated_guess_is_skipped() {
        let played = Code::from([Blue, Blue, Green, Green]);
        let fresh = Code::from([Red, Red, Red, Red]);
        let current = singletons(&[played.clone(), fresh.clone()]);
        let history = vec![(played, Score::new(0, 1))];

        assert_eq!(
            next_guess(&history, &current, 4, &GameColor::ALL).unwrap(),
            fresh
        );
    }

    #[test]
    fn all_candidates_tried_is_inconsistent() {
        let played = Code::from([Blue, Blue, Green, Green]);
        let current = singletons(std::slice::from_ref(&played));
        let history = vec![(played, Score::new(0, 1))];

        assert!(matches!(
            next_guess(&history, &current, 4, &GameColor::ALL),
            Err(MastermindError::InternalInconsistency(_))
        ));
    }
}
