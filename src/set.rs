//! Provides `LineSet`, a set of lines, and the `Diff` returned by
//! `LineSet::diff`.
use bstr::ByteSlice;
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use std::fmt;

/// A `LineSet` is a set of lines, each line an owned byte string.
/// * Lines are opaque: no case folding, trimming, or UTF-8 validation
/// * Adding a line that is already present does nothing
/// * Iteration order is unspecified; use `to_sorted_vec` when order matters
#[derive(Clone, Default)]
pub struct LineSet {
    set: LineSetInner,
}
type LineSetInner = IndexSet<Vec<u8>, FxBuildHasher>;

/// The result of `a.diff(&b)`: `added` holds the lines of `b` missing from
/// `a`, and `removed` holds the lines of `a` missing from `b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    /// Lines present only in the candidate (right hand) set
    pub added: LineSet,
    /// Lines present only in the baseline (left hand) set
    pub removed: LineSet,
}

impl Diff {
    /// True if the two sets compared had exactly the same lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

impl LineSet {
    /// Returns a set containing each distinct line of `initial` once.
    pub fn new<L: Into<Vec<u8>>>(initial: impl IntoIterator<Item = L>) -> Self {
        let mut set = LineSet::default();
        set.add(initial);
        set
    }

    /// Inserts every line of `lines`. To add a single line, pass `[line]`.
    pub fn add<L: Into<Vec<u8>>>(&mut self, lines: impl IntoIterator<Item = L>) {
        for line in lines {
            self.set.insert(line.into());
        }
    }

    /// Inserts every line of `other`, leaving `other` untouched
    pub fn add_set(&mut self, other: &LineSet) {
        self.set.extend(other.set.iter().cloned());
    }

    /// Removes every line of `lines`. Lines not in the set are ignored.
    pub fn remove<L: AsRef<[u8]>>(&mut self, lines: impl IntoIterator<Item = L>) {
        // `swap_remove` is O(1) but scrambles the order of the remaining
        // keys, which is fine since a `LineSet` promises no order.
        for line in lines {
            self.set.swap_remove(line.as_ref());
        }
    }

    /// Removes every line that is also in `other`
    pub fn remove_set(&mut self, other: &LineSet) {
        self.remove(other.iter());
    }

    /// Is `line` in the set?
    #[must_use]
    pub fn contains(&self, line: impl AsRef<[u8]>) -> bool {
        self.set.contains(line.as_ref())
    }

    /// Number of distinct lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// True if the set has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Two sets are equal when they have the same size and every line of one
    /// is a line of the other.
    #[must_use]
    pub fn equal(&self, other: &LineSet) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|line| other.contains(line))
    }

    /// Iterates over the lines in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.set.iter().map(Vec::as_slice)
    }

    /// The lines in no particular order
    #[must_use]
    pub fn to_vec(&self) -> Vec<&[u8]> {
        self.iter().collect()
    }

    /// The lines in ascending byte-wise order
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<&[u8]> {
        let mut lines = self.to_vec();
        lines.sort_unstable();
        lines
    }

    /// Returns the lines found in both `self` and `other`.
    #[must_use]
    pub fn intersect(&self, other: &LineSet) -> LineSet {
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        small.iter().filter(|line| large.contains(line)).collect()
    }

    /// Returns the lines of `self` that are not in `other`. Note that
    /// `a.minus(&b)` and `b.minus(&a)` differ in general.
    #[must_use]
    pub fn minus(&self, other: &LineSet) -> LineSet {
        self.iter().filter(|line| !other.contains(line)).collect()
    }

    /// Compares `self` (the baseline) with `other` (the candidate). The
    /// result's `added` field is `other.minus(self)` and its `removed` field
    /// is `self.minus(other)`.
    #[must_use]
    pub fn diff(&self, other: &LineSet) -> Diff {
        Diff { added: other.minus(self), removed: self.minus(other) }
    }
}

impl PartialEq for LineSet {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}
impl Eq for LineSet {}

impl fmt::Debug for LineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.to_sorted_vec().into_iter().map(ByteSlice::as_bstr)).finish()
    }
}

impl<L: Into<Vec<u8>>> FromIterator<L> for LineSet {
    fn from_iter<I: IntoIterator<Item = L>>(lines: I) -> Self {
        LineSet::new(lines)
    }
}

impl<L: Into<Vec<u8>>> Extend<L> for LineSet {
    fn extend<I: IntoIterator<Item = L>>(&mut self, lines: I) {
        self.add(lines);
    }
}
