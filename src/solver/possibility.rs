//! Compressed representation of the secrets still in play
//!
//! A [`Possibility`] keeps one [`ColorSet`] per position and stands for the
//! Cartesian product of those sets. A [`PossibilitySet`] is a union of
//! possibilities.

use crate::core::{Code, GameColor};
use rustc_hash::FxHashSet;
use std::fmt;
use std::ops::{BitAnd, BitOr, Sub};

/// Set of colors stored as a bitmask over [`GameColor::ALL`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSet(u8);

impl ColorSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn single(color: GameColor) -> Self {
        Self(1 << color.index())
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, color: GameColor) -> bool {
        self.0 & (1 << color.index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, color: GameColor) {
        self.0 |= 1 << color.index();
    }

    #[inline]
    pub fn remove(&mut self, color: GameColor) {
        self.0 &= !(1 << color.index());
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Members in alphabet order
    pub fn iter(self) -> impl Iterator<Item = GameColor> {
        GameColor::ALL.into_iter().filter(move |&c| self.contains(c))
    }
}

impl FromIterator<GameColor> for ColorSet {
    fn from_iter<I: IntoIterator<Item = GameColor>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for color in iter {
            set.insert(color);
        }
        set
    }
}

impl BitAnd for ColorSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for ColorSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl Sub for ColorSet {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, color) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{color}")?;
        }
        f.write_str("}")
    }
}

/// Candidate colors per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Possibility(Vec<ColorSet>);

impl Possibility {
    #[must_use]
    pub fn new(slots: Vec<ColorSet>) -> Self {
        Self(slots)
    }

    /// The possibility containing exactly one concrete assignment
    #[must_use]
    pub fn from_code(code: &Code) -> Self {
        Self(code.colors().iter().map(|&c| ColorSet::single(c)).collect())
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[ColorSet] {
        &self.0
    }

    /// True when no position has an empty candidate set
    #[must_use]
    pub fn is_viable(&self) -> bool {
        self.0.iter().all(|slot| !slot.is_empty())
    }

    /// Position-wise intersection, `None` if any position becomes empty
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let slots: Vec<ColorSet> = self.0.iter().zip(&other.0).map(|(&a, &b)| a & b).collect();
        let merged = Self(slots);
        merged.is_viable().then_some(merged)
    }

    /// Keep only colors in `pool`, `None` if any position becomes empty
    #[must_use]
    pub fn restrict(&self, pool: ColorSet) -> Option<Self> {
        let restricted = Self(self.0.iter().map(|&slot| slot & pool).collect());
        restricted.is_viable().then_some(restricted)
    }

    /// Every assignment of `self` is also an assignment of `other`
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().zip(&other.0).all(|(a, b)| a.is_subset(*b))
    }

    /// Whether `code` is one of the dissolved assignments
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.0.len() == code.len()
            && self
                .0
                .iter()
                .zip(code.colors())
                .all(|(slot, &color)| slot.contains(color))
    }

    /// Number of concrete assignments
    #[must_use]
    pub fn assignment_count(&self) -> usize {
        self.0.iter().map(|slot| slot.len()).product()
    }

    /// Expand into concrete assignments
    ///
    /// Ordered lexicographically: the first position varies slowest and each
    /// position runs through its colors in alphabet order.
    #[must_use]
    pub fn dissolve(&self) -> Vec<Code> {
        let mut prefixes: Vec<Vec<GameColor>> = vec![Vec::with_capacity(self.0.len())];
        for slot in &self.0 {
            prefixes = prefixes
                .into_iter()
                .flat_map(|prefix| {
                    slot.iter().map(move |color| {
                        let mut next = prefix.clone();
                        next.push(color);
                        next
                    })
                })
                .collect();
        }
        prefixes.into_iter().map(Code::from).collect()
    }
}

impl fmt::Display for Possibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}

/// Union of possibilities
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PossibilitySet(Vec<Possibility>);

impl PossibilitySet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Collect possibilities in normal form
    ///
    /// Drops non-viable entries, duplicates, and any entry contained in
    /// another one. The union is unchanged and first occurrences keep their
    /// relative order.
    pub fn normalized<I: IntoIterator<Item = Possibility>>(possibilities: I) -> Self {
        let mut kept: Vec<Possibility> = Vec::new();
        for candidate in possibilities {
            if !candidate.is_viable() || kept.iter().any(|k| candidate.is_subset(k)) {
                continue;
            }
            kept.retain(|k| !k.is_subset(&candidate));
            kept.push(candidate);
        }
        Self(kept)
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

    pub fn iter(&self) -> std::slice::Iter<'_, Possibility> {
        self.0.iter()
    }

    /// Distinct concrete assignments, in dissolution order
    #[must_use]
    pub fn assignments(&self) -> Vec<Code> {
        let mut seen: FxHashSet<Code> = FxHashSet::default();
        self.0
            .iter()
            .flat_map(Possibility::dissolve)
            .filter(|code| seen.insert(code.clone()))
            .collect()
    }

    /// Number of distinct concrete assignments
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.assignments().len()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.0.iter().any(|p| p.contains(code))
    }

    /// Drop colors outside `pool`, and every possibility left with an empty position
    #[must_use]
    pub fn restrict(&self, pool: ColorSet) -> Self {
        Self::normalized(self.0.iter().filter_map(|p| p.restrict(pool)))
    }

    /// Remove one concrete assignment
    ///
    /// Possibilities containing `code` are dissolved and the remaining
    /// assignments rewrapped as single-color possibilities. Others are kept
    /// as they are.
    #[must_use]
    pub fn without(&self, code: &Code) -> Self {
        let mut rest = Vec::with_capacity(self.0.len());
        for possibility in &self.0 {
            if possibility.contains(code) {
                rest.extend(
                    possibility
                        .dissolve()
                        .iter()
                        .filter(|&assignment| assignment != code)
                        .map(Possibility::from_code),
                );
            } else {
                rest.push(possibility.clone());
            }
        }
        Self(rest)
    }
}

impl<'a> IntoIterator for &'a PossibilitySet {
    type Item = &'a Possibility;
    type IntoIter = std::slice::Iter<'a, Possibility>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
