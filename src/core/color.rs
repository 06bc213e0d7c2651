//! Mastermind colors and color sequences
//!
//! A [`Code`] is an ordered sequence of [`GameColor`]s. The same type is used
//! for the hidden secret, for every guess, and for a single concrete
//! assignment dissolved from a possibility.

use crate::error::{MastermindError, Result};
use std::fmt;

/// A code peg color
///
/// The alphabet is ordered by name, which fixes the order of the opening
/// guesses and of every enumeration in the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameColor {
    Blue,
    Green,
    Orange,
    Pink,
    Red,
    Yellow,
}

impl GameColor {
    /// Full alphabet, sorted by name
    pub const ALL: [Self; 6] = [
        Self::Blue,
        Self::Green,
        Self::Orange,
        Self::Pink,
        Self::Red,
        Self::Yellow,
    ];

    /// Number of colors in the full alphabet
    pub const COUNT: usize = Self::ALL.len();

    /// Lowercase display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }

    /// Position of this color in [`GameColor::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color at `index` in [`GameColor::ALL`], if any
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// 24-bit terminal color used when drawing a peg of this color
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Blue => (0, 175, 255),
            Self::Green => (0, 128, 0),
            Self::Orange => (255, 135, 0),
            Self::Pink => (255, 175, 255),
            Self::Red => (205, 0, 0),
            Self::Yellow => (255, 255, 0),
        }
    }
}

impl fmt::Display for GameColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shortest prefix length that identifies each name among `names`
///
/// Returned in the order of `names`. A name that is itself a prefix of
/// another gets its full length plus one, meaning no prefix is unique.
///
/// # Examples
/// ```
/// use mastermind_solver::core::minimum_unique_prefix_lengths;
///
/// let lengths = minimum_unique_prefix_lengths(&["pink", "purple", "red"]);
/// assert_eq!(lengths, vec![2, 2, 1]);
/// ```
#[must_use]
pub fn minimum_unique_prefix_lengths(names: &[&str]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..names.len()).collect();
    order.sort_by_key(|&i| names[i]);

    let mut lengths = vec![0; names.len()];
    if names.len() == 1 {
        lengths[0] = 1;
    }

    for pair in order.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let shared = names[current]
            .bytes()
            .zip(names[next].bytes())
            .take_while(|(a, b)| a == b)
            .count();
        let unique = shared + 1;
        lengths[current] = lengths[current].max(unique);
        lengths[next] = lengths[next].max(unique);
    }

    lengths
}

/// Resolve a single color token against `alphabet` by unique name prefix
///
/// # Errors
/// Returns `UnknownColor` when no name starts with the token and
/// `AmbiguousColor` when more than one does (an exact name always wins).
pub fn parse_color(token: &str, alphabet: &[GameColor]) -> Result<GameColor> {
    let token = token.to_lowercase();

    if let Some(&exact) = alphabet.iter().find(|c| c.name() == token) {
        return Ok(exact);
    }

    let mut matches = alphabet.iter().filter(|c| c.name().starts_with(&token));
    match (matches.next(), matches.next()) {
        (Some(&color), None) => Ok(color),
        (Some(_), Some(_)) => Err(MastermindError::AmbiguousColor(token)),
        (None, _) => Err(MastermindError::UnknownColor(token)),
    }
}

/// An ordered sequence of colors: a secret, a guess, or a concrete assignment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Vec<GameColor>);

impl Code {
    /// Create a code from a color sequence
    pub fn new(colors: impl Into<Vec<GameColor>>) -> Self {
        Self(colors.into())
    }

    /// Parse whitespace separated color names (or unique prefixes)
    ///
    /// # Errors
    /// Returns `InvalidLength` if the number of colors differs from `pegs`,
    /// or a color error for any token that does not resolve.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameColor};
    ///
    /// let code = Code::parse("r g bl y", 4, &GameColor::ALL).unwrap();
    /// assert_eq!(code.to_string(), "red green blue yellow");
    /// ```
    pub fn parse(input: &str, pegs: usize, alphabet: &[GameColor]) -> Result<Self> {
        let colors = input
            .split_whitespace()
            .map(|token| parse_color(token, alphabet))
            .collect::<Result<Vec<_>>>()?;

        if colors.len() != pegs {
            return Err(MastermindError::InvalidLength {
                expected: pegs,
                actual: colors.len(),
            });
        }

        Ok(Self(colors))
    }

    /// Every code of length `pegs` over `alphabet`, in lexicographic order
    ///
    /// Yields `alphabet.len() ^ pegs` codes.
    pub fn all(pegs: usize, alphabet: &[GameColor]) -> impl Iterator<Item = Self> + '_ {
        let mut digits = vec![0usize; pegs];
        let mut exhausted = alphabet.is_empty();

        std::iter::from_fn(move || {
            if exhausted {
                return None;
            }
            let code = Self(digits.iter().map(|&d| alphabet[d]).collect());

            // Odometer step, last position fastest
            exhausted = true;
            for digit in digits.iter_mut().rev() {
                *digit += 1;
                if *digit < alphabet.len() {
                    exhausted = false;
                    break;
                }
                *digit = 0;
            }
            Some(code)
        })
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[GameColor] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn color_at(&self, position: usize) -> GameColor {
        self.0[position]
    }
}

impl From<Vec<GameColor>> for Code {
    fn from(colors: Vec<GameColor>) -> Self {
        Self(colors)
    }
}

impl<const N: usize> From<[GameColor; N]> for Code {
    fn from(colors: [GameColor; N]) -> Self {
        Self(colors.to_vec())
    }
}

impl FromIterator<GameColor> for Code {
    fn from_iter<I: IntoIterator<Item = GameColor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
